//! Authentication route handlers.
//!
//! Login and registration forms post back to the server. Failures re-render
//! the form with an inline error; a successful login stores the session
//! context and redirects to the dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{self, Result};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::Credentials;
use crate::pages::{LoginPage, RegisterPage};
use crate::services::SweetShopApi;
use crate::state::AppState;

/// Banner shown on the login page after registering.
pub const REGISTERED_MESSAGE: &str = "Account created. Please log in.";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub registered: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: LoginPage,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: RegisterPage,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    let success = query.registered.map(|_| REGISTERED_MESSAGE.to_string());
    LoginTemplate {
        page: LoginPage::new(success),
    }
}

/// Handle login form submission.
pub async fn login<A: SweetShopApi>(
    State(state): State<AppState<A>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let mut page = LoginPage::default();
    let credentials = Credentials::new(form.username, form.password);

    let Some(user) = page.submit(state.api(), credentials).await else {
        return Ok(LoginTemplate { page }.into_response());
    };

    set_current_user(&session, &user).await?;
    error::set_sentry_user(user.username());
    tracing::info!(username = %user.username(), "User logged in");

    Ok(Redirect::to("/dashboard").into_response())
}

/// Handle logout.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    error::clear_sentry_user();
    Ok(Redirect::to("/auth/login"))
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate {
        page: RegisterPage::default(),
    }
}

/// Handle registration form submission.
///
/// On success the user is sent to log in with the new account.
pub async fn register<A: SweetShopApi>(
    State(state): State<AppState<A>>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let mut page = RegisterPage::default();
    let credentials = Credentials::new(form.username, form.password);

    if page
        .submit(state.api(), credentials, &form.password_confirm)
        .await
    {
        tracing::info!(username = %page.username, "User registered");
        Redirect::to("/auth/login?registered=1").into_response()
    } else {
        RegisterTemplate { page }.into_response()
    }
}
