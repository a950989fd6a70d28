//! Registration page state.

use tracing::warn;

use super::REGISTRATION_FAILED;
use crate::models::Credentials;
use crate::services::AuthService;

/// Shown when the confirmation does not match the password.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// State of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPage {
    pub username: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl RegisterPage {
    /// Submit the form. Returns `true` when the account was created.
    ///
    /// A mismatched confirmation is rejected without calling the service.
    pub async fn submit<A: AuthService>(
        &mut self,
        auth: &A,
        credentials: Credentials,
        password_confirm: &str,
    ) -> bool {
        use secrecy::ExposeSecret;

        self.error = None;
        self.username.clone_from(&credentials.username);

        if credentials.password.expose_secret() != password_confirm {
            self.error = Some(PASSWORD_MISMATCH.to_string());
            return false;
        }

        self.loading = true;
        let result = auth.register(&credentials).await;
        self.loading = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "Registration failed");
                self.error = Some(e.user_message(REGISTRATION_FAILED));
                false
            }
        }
    }
}
