//! Dashboard route handlers: listing, search, and purchase.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{instrument, warn};

use sweet_shop_core::{QuantitySelector, SearchParams, SweetId};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::pages::{DashboardFlash, DashboardPage, Notification, SweetCardView, submit_purchase};
use crate::services::SweetShopApi;
use crate::state::AppState;

/// Search form query parameters, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub max_price: String,
}

impl SearchQuery {
    /// Convert the submitted fields into search criteria.
    ///
    /// # Errors
    ///
    /// Returns the decimal parse error if a price bound is not a number.
    pub fn to_params(&self) -> std::result::Result<SearchParams, rust_decimal::Error> {
        Ok(SearchParams {
            name: Some(self.name.clone()),
            category: Some(self.category.clone()),
            min_price: parse_price_bound(&self.min_price)?,
            max_price: parse_price_bound(&self.max_price)?,
        }
        .normalized())
    }
}

fn parse_price_bound(raw: &str) -> std::result::Result<Option<Decimal>, rust_decimal::Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(raw).map(Some)
}

/// Purchase form data posted by a sweet card.
#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
    pub sweet_id: SweetId,
    /// Raw quantity input.
    #[serde(default)]
    pub quantity: String,
    /// Stock the card was rendered with.
    pub stock: u32,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub search: SearchQuery,
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<SweetCardView>,
    pub notification: Option<Notification>,
}

impl DashboardTemplate {
    fn new(username: &str, search: SearchQuery, page: &DashboardPage) -> Self {
        Self {
            username: username.to_string(),
            search,
            loading: page.loading,
            error: page.error.clone(),
            cards: page.cards(),
            notification: page.notification.clone(),
        }
    }
}

/// Display the dashboard.
///
/// Without search criteria the full listing is fetched; with any criterion
/// set, the filtered listing is fetched instead. Criteria that cannot be
/// sent show the search failure banner. The outcome of a preceding buy
/// action is shown once and removed from the session.
#[instrument(skip_all)]
pub async fn show<A: SweetShopApi>(
    State(state): State<AppState<A>>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let flash: Option<DashboardFlash> = session.remove(session_keys::DASHBOARD_FLASH).await?;
    let mut page = DashboardPage::new();

    match search.to_params() {
        Ok(params) if params.is_empty() => page.load(state.api(), &user.token).await,
        Ok(params) => page.search(state.api(), &user.token, &params).await,
        Err(e) => {
            warn!(error = %e, ?search, "Search price bound is not a number");
            page.reject_search();
        }
    }

    if let Some(flash) = flash {
        page.apply_flash(flash);
    }

    Ok(DashboardTemplate::new(user.username(), search, &page))
}

/// Handle a sweet card's buy control.
///
/// The quantity is checked against the stock the card was rendered with. A
/// quantity outside `1..=stock` submits nothing and the card re-renders with
/// the entered value and its buy control disabled. Either way the outcome is
/// stored in the session and the browser is sent back to the dashboard, so
/// reloading the result never repeats the purchase.
#[instrument(skip_all)]
pub async fn purchase<A: SweetShopApi>(
    State(state): State<AppState<A>>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<PurchaseForm>,
) -> Result<Redirect> {
    let mut selector = QuantitySelector::new(form.stock);
    selector.set_input(&form.quantity);

    let flash = match selector.buy(form.sweet_id) {
        Some(request) => {
            DashboardFlash::notify(submit_purchase(state.api(), &user.token, request).await)
        }
        None => DashboardFlash::keep_input(form.sweet_id, form.quantity),
    };

    session
        .insert(session_keys::DASHBOARD_FLASH, &flash)
        .await?;

    Ok(Redirect::to("/dashboard"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_criteria() {
        let params = SearchQuery::default().to_params().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_query_to_params() {
        let search = SearchQuery {
            name: "ladoo".to_string(),
            category: " ".to_string(),
            min_price: "1.5".to_string(),
            max_price: String::new(),
        };
        let params = search.to_params().unwrap();
        assert_eq!(params.name.as_deref(), Some("ladoo"));
        assert_eq!(params.category, None);
        assert_eq!(params.min_price, Some(Decimal::new(15, 1)));
        assert_eq!(params.max_price, None);
    }

    #[test]
    fn test_non_numeric_price_bound_is_rejected() {
        let search = SearchQuery {
            max_price: "cheap".to_string(),
            ..SearchQuery::default()
        };
        assert!(search.to_params().is_err());
    }
}
