//! End-to-end tests for the Sweet Shop storefront.
//!
//! The tests drive a running storefront (and the sweet shop API behind it)
//! over HTTP, so they are ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the sweet shop API, then the storefront
//! cargo run -p sweet-shop-storefront
//!
//! # Run the ignored tests
//! cargo test -p sweet-shop-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `STOREFRONT_TEST_URL` - storefront base URL (default `http://localhost:3000`)
//! - `SWEET_SHOP_TEST_API_URL` - API base URL (default `http://localhost:5000`)
//! - `SWEET_SHOP_TEST_USERNAME` / `SWEET_SHOP_TEST_PASSWORD` - an existing account

use reqwest::Client;

/// Storefront base URL.
#[must_use]
pub fn storefront_url() -> String {
    std::env::var("STOREFRONT_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Sweet shop API base URL.
#[must_use]
pub fn api_url() -> String {
    std::env::var("SWEET_SHOP_TEST_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Credentials of the test account.
#[must_use]
pub fn test_credentials() -> (String, String) {
    let username =
        std::env::var("SWEET_SHOP_TEST_USERNAME").unwrap_or_else(|_| "testuser".to_string());
    let password =
        std::env::var("SWEET_SHOP_TEST_PASSWORD").unwrap_or_else(|_| "testpassword".to_string());
    (username, password)
}

/// HTTP client that keeps the session cookie between requests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
