//! HTTP implementation of the storefront's service traits.

use std::sync::Arc;

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use sweet_shop_core::{SearchParams, Sweet, SweetId};

use super::ApiError;
use crate::config::SweetShopApiConfig;
use crate::models::{AuthToken, Credentials, LoginSession};
use crate::services::{AuthService, SweetService};

const LOGIN_PATH: &str = "api/auth/login";
const REGISTER_PATH: &str = "api/auth/register";
const SWEETS_PATH: &str = "api/sweets";
const SEARCH_PATH: &str = "api/sweets/search";

/// Error bodies are truncated to this many characters in logs.
const LOGGED_BODY_CHARS: usize = 500;

/// Client for the sweet shop API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct SweetShopClient {
    inner: Arc<SweetShopClientInner>,
}

struct SweetShopClientInner {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct PurchaseBody {
    quantity: u32,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl SweetShopClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be built.
    pub fn new(config: &SweetShopApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(SweetShopClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Send a request and decode its JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&body),
                "Failed to parse sweet shop API response"
            );
            ApiError::Parse(e)
        })
    }

    /// Send a request, returning the body text of a success response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = %status, body = %truncate(&body), "Sweet shop API returned non-success status");
            return Err(ApiError::Rejected {
                status,
                message: parse_error_message(&body),
            });
        }

        Ok(body)
    }
}

impl AuthService for SweetShopClient {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError> {
        let url = self.endpoint(LOGIN_PATH)?;
        let body = CredentialsBody {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };
        self.send_json(self.inner.client.post(url).json(&body)).await
    }

    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.endpoint(REGISTER_PATH)?;
        let body = CredentialsBody {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };
        self.send(self.inner.client.post(url).json(&body)).await?;
        Ok(())
    }
}

impl SweetService for SweetShopClient {
    #[instrument(skip(self, token))]
    async fn get_all_sweets(&self, token: &AuthToken) -> Result<Vec<Sweet>, ApiError> {
        let url = self.endpoint(SWEETS_PATH)?;
        let request = self.inner.client.get(url).bearer_auth(token.expose());
        self.send_json(request).await
    }

    #[instrument(skip(self, token))]
    async fn search_sweets(
        &self,
        token: &AuthToken,
        params: &SearchParams,
    ) -> Result<Vec<Sweet>, ApiError> {
        let url = self.endpoint(SEARCH_PATH)?;
        let request = self
            .inner
            .client
            .get(url)
            .bearer_auth(token.expose())
            .query(params);
        self.send_json(request).await
    }

    #[instrument(skip(self, token))]
    async fn purchase_sweet(
        &self,
        token: &AuthToken,
        id: SweetId,
        quantity: u32,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&purchase_path(id))?;
        let request = self
            .inner
            .client
            .post(url)
            .bearer_auth(token.expose())
            .json(&PurchaseBody { quantity });
        self.send(request).await?;
        Ok(())
    }
}

fn purchase_path(id: SweetId) -> String {
    format!("{SWEETS_PATH}/{id}/purchase")
}

/// Pull the human-readable message out of an error body.
///
/// Prefers the `error` field, then `message`. Non-JSON bodies carry no message.
fn parse_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
}

fn truncate(body: &str) -> String {
    body.chars().take(LOGGED_BODY_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::parse_api_base_url;

    fn client() -> SweetShopClient {
        SweetShopClient::new(&SweetShopApiConfig {
            base_url: parse_api_base_url("http://localhost:5000/shop").unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoints_join_under_base_path() {
        let client = client();
        assert_eq!(
            client.endpoint(LOGIN_PATH).unwrap().as_str(),
            "http://localhost:5000/shop/api/auth/login"
        );
        assert_eq!(
            client
                .endpoint(&purchase_path(SweetId::new(12)))
                .unwrap()
                .as_str(),
            "http://localhost:5000/shop/api/sweets/12/purchase"
        );
    }

    #[test]
    fn test_search_query_string() {
        let client = client();
        let params = SearchParams {
            name: Some("ladoo".to_string()),
            category: None,
            min_price: Some(rust_decimal::Decimal::new(5, 1)),
            max_price: None,
        };
        let request = client
            .inner
            .client
            .get(client.endpoint(SEARCH_PATH).unwrap())
            .query(&params)
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("name=ladoo&minPrice=0.5"));
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"error":"Insufficient stock"}"#).as_deref(),
            Some("Insufficient stock")
        );
        assert_eq!(
            parse_error_message(r#"{"message":"Sweet not found"}"#).as_deref(),
            Some("Sweet not found")
        );
        assert_eq!(parse_error_message(r#"{"error":""}"#), None);
        assert_eq!(parse_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_error_message(""), None);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        let client = SweetShopClient::new(&SweetShopApiConfig {
            // Port 9 (discard) on localhost is expected to refuse connections.
            base_url: parse_api_base_url("http://127.0.0.1:9").unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let err = client
            .get_all_sweets(&AuthToken::new("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
        assert_eq!(err.user_message("Failed to load sweets"), "Failed to load sweets");
    }
}
