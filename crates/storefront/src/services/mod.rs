//! Service boundaries the storefront delegates to.
//!
//! # Services
//!
//! - [`AuthService`] - login and registration
//! - [`SweetService`] - product listing, search, and purchase
//!
//! Both are implemented over HTTP by [`crate::api::SweetShopClient`]. Pages
//! and handlers are generic over [`SweetShopApi`] so they can be driven by
//! an in-memory implementation in tests.

#[cfg(test)]
pub mod fake;

use std::future::Future;

use sweet_shop_core::{SearchParams, Sweet, SweetId};

use crate::api::ApiError;
use crate::models::{AuthToken, Credentials, LoginSession};

/// Authentication service.
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a user and bearer token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginSession, ApiError>> + Send;

    /// Create a new account.
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Product service.
pub trait SweetService: Send + Sync {
    /// Fetch the full product listing.
    fn get_all_sweets(
        &self,
        token: &AuthToken,
    ) -> impl Future<Output = Result<Vec<Sweet>, ApiError>> + Send;

    /// Fetch the listing filtered by `params`.
    fn search_sweets(
        &self,
        token: &AuthToken,
        params: &SearchParams,
    ) -> impl Future<Output = Result<Vec<Sweet>, ApiError>> + Send;

    /// Buy `quantity` units of a sweet.
    fn purchase_sweet(
        &self,
        token: &AuthToken,
        id: SweetId,
        quantity: u32,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Everything the storefront needs from the backend.
pub trait SweetShopApi: AuthService + SweetService + 'static {}

impl<T> SweetShopApi for T where T: AuthService + SweetService + 'static {}
