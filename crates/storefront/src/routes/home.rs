//! Entry point and health check.

use axum::response::Redirect;

use crate::middleware::OptionalAuth;

/// Send visitors to the dashboard when logged in, otherwise to login.
pub async fn home(OptionalAuth(user): OptionalAuth) -> Redirect {
    if user.is_some() {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/auth/login")
    }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the sweet shop API.
pub async fn health() -> &'static str {
    "ok"
}
