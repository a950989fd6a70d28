//! User types exchanged with the authentication service.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use sweet_shop_core::UserId;

use super::AuthToken;

/// A user as returned by the authentication service.
///
/// Only `username` is guaranteed; the rest is carried when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Result of a successful login: the user plus the bearer token the API
/// expects on product calls.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSession {
    pub token: AuthToken,
    pub user: User,
}

/// Username and password entered into a login or registration form.
///
/// Lives only for the duration of the submission.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from form input.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}
