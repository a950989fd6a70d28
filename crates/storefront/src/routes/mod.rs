//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to dashboard or login
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard              - Listing; filtered when search fields are set
//! POST /dashboard/purchase     - Buy a sweet, then redirect to the dashboard
//!
//! # Assets
//! GET  /static/*               - Stylesheet
//! ```

pub mod auth;
pub mod dashboard;
pub mod home;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::services::SweetShopApi;
use crate::state::AppState;

/// Directory static assets are served from, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Create the auth routes router.
pub fn auth_routes<A: SweetShopApi>() -> Router<AppState<A>> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login::<A>))
        .route(
            "/register",
            get(auth::register_page).post(auth::register::<A>),
        )
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes<A: SweetShopApi>() -> Router<AppState<A>> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(home::health))
        .route("/dashboard", get(dashboard::show::<A>))
        .route("/dashboard/purchase", post(dashboard::purchase::<A>))
        .nest("/auth", auth_routes::<A>())
}

/// Build the complete application: routes, static assets, and middleware.
pub fn app<A: SweetShopApi>(state: AppState<A>) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .merge(routes::<A>())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}
