//! Login page state.

use tracing::warn;

use super::LOGIN_FAILED;
use crate::models::{Credentials, CurrentUser};
use crate::services::AuthService;

/// State of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPage {
    /// Username to pre-fill after a failed attempt.
    pub username: String,
    pub error: Option<String>,
    pub success: Option<String>,
    pub loading: bool,
}

impl LoginPage {
    /// A blank form, optionally carrying a success banner (e.g. after registering).
    #[must_use]
    pub fn new(success: Option<String>) -> Self {
        Self {
            success,
            ..Self::default()
        }
    }

    /// Submit the form.
    ///
    /// Clears the previous error and sets `loading` for the duration of the
    /// call. On success returns the session context to publish; on failure
    /// records the server's message or [`LOGIN_FAILED`]. `loading` is false
    /// again whichever way the call ends.
    pub async fn submit<A: AuthService>(
        &mut self,
        auth: &A,
        credentials: Credentials,
    ) -> Option<CurrentUser> {
        self.error = None;
        self.success = None;
        self.username.clone_from(&credentials.username);
        self.loading = true;

        let result = auth.login(&credentials).await;
        self.loading = false;

        match result {
            Ok(session) => Some(CurrentUser::from(session)),
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "Login failed");
                self.error = Some(e.user_message(LOGIN_FAILED));
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::fake::{Call, FakeShop, VALID_PASSWORD, VALID_USERNAME};

    #[tokio::test]
    async fn test_failed_login_shows_fallback_and_clears_loading() {
        let shop = FakeShop::default();
        let mut page = LoginPage::default();

        let user = page
            .submit(&shop, Credentials::new("alice", "wrong"))
            .await;

        assert!(user.is_none());
        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some("Login failed. Please try again."));
        assert_eq!(page.username, "alice");
        assert_eq!(shop.calls(), vec![Call::Login("alice".to_string())]);
    }

    #[tokio::test]
    async fn test_failed_login_always_has_non_empty_error() {
        for (username, password) in [("", ""), ("bob", "pw"), ("alice", "wrong"), ("ALICE", VALID_PASSWORD)] {
            let shop = FakeShop::default();
            let mut page = LoginPage::default();
            page.submit(&shop, Credentials::new(username, password)).await;
            assert!(!page.loading);
            assert!(page.error.as_deref().is_some_and(|e| !e.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_failed_login_uses_server_message() {
        let shop = FakeShop::default();
        shop.reject_logins(Some("Account locked"));
        let mut page = LoginPage::default();

        page.submit(&shop, Credentials::new(VALID_USERNAME, VALID_PASSWORD))
            .await;

        assert_eq!(page.error.as_deref(), Some("Account locked"));
    }

    #[tokio::test]
    async fn test_successful_login_clears_previous_error() {
        let shop = FakeShop::default();
        let mut page = LoginPage {
            error: Some("Login failed. Please try again.".to_string()),
            success: Some("Registered".to_string()),
            ..LoginPage::default()
        };

        let user = page
            .submit(&shop, Credentials::new(VALID_USERNAME, VALID_PASSWORD))
            .await
            .unwrap();

        assert_eq!(user.username(), VALID_USERNAME);
        assert_eq!(page.error, None);
        assert_eq!(page.success, None);
        assert!(!page.loading);
    }
}
