//! Session context types.
//!
//! The session context is created at login, read by every authenticated
//! request, and removed at logout.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LoginSession, User};

/// Bearer token issued by the authentication service.
///
/// Stored in the server-side session only; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Session-stored user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: User,
    pub token: AuthToken,
}

impl CurrentUser {
    /// Name shown in the dashboard header.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

impl From<LoginSession> for CurrentUser {
    fn from(session: LoginSession) -> Self {
        Self {
            user: session.user,
            token: session.token,
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
    /// Key for the outcome of the last buy action, shown once on the dashboard.
    pub const DASHBOARD_FLASH: &str = "dashboard_flash";
}
