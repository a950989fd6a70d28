//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, SweetShopClient};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the sweet shop API. Handlers are generic over the API
/// so tests can substitute an in-memory backend.
pub struct AppState<A = SweetShopClient> {
    inner: Arc<AppStateInner<A>>,
}

struct AppStateInner<A> {
    config: StorefrontConfig,
    api: A,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl AppState {
    /// Create the application state with an HTTP client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let api = SweetShopClient::new(&config.api)?;
        Ok(Self::with_api(config, api))
    }
}

impl<A> AppState<A> {
    /// Create the application state around an existing API implementation.
    #[must_use]
    pub fn with_api(config: StorefrontConfig, api: A) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the sweet shop API.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.inner.api
    }
}
