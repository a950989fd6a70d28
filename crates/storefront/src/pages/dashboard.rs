//! Dashboard page state: listing, search, and purchase.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use sweet_shop_core::{PurchaseRequest, SearchParams, Sweet, SweetId};

use super::{LOAD_FAILED, PURCHASE_FAILED, PURCHASE_SUCCEEDED, SEARCH_FAILED, SweetCardView};
use crate::models::AuthToken;
use crate::services::SweetService;

/// Kind of a blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Blocking notification shown over the dashboard after a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// CSS modifier class.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// Quantity input that was not submitted, re-shown on its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptInput {
    pub sweet_id: SweetId,
    pub input: String,
}

/// Outcome of a buy action, carried across the redirect to the dashboard.
///
/// Stored in the session by the purchase handler and taken (read once, then
/// removed) by the next dashboard render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFlash {
    pub notification: Option<Notification>,
    pub kept_input: Option<KeptInput>,
}

impl DashboardFlash {
    #[must_use]
    pub const fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            kept_input: None,
        }
    }

    #[must_use]
    pub fn keep_input(sweet_id: SweetId, input: impl Into<String>) -> Self {
        Self {
            notification: None,
            kept_input: Some(KeptInput {
                sweet_id,
                input: input.into(),
            }),
        }
    }
}

/// Submit a purchase and describe its outcome.
///
/// Success yields [`PURCHASE_SUCCEEDED`]; failure yields the server's message
/// or [`PURCHASE_FAILED`]. The listing is not touched here: the dashboard
/// render that follows the purchase is its one refetch.
pub async fn submit_purchase<S: SweetService>(
    sweets: &S,
    token: &AuthToken,
    request: PurchaseRequest,
) -> Notification {
    match sweets
        .purchase_sweet(token, request.sweet_id, request.quantity)
        .await
    {
        Ok(()) => {
            info!(sweet_id = %request.sweet_id, quantity = request.quantity, "Purchase completed");
            Notification::success(PURCHASE_SUCCEEDED)
        }
        Err(e) => {
            warn!(sweet_id = %request.sweet_id, quantity = request.quantity, error = %e, "Purchase failed");
            Notification::error(e.user_message(PURCHASE_FAILED))
        }
    }
}

/// State of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    pub sweets: Vec<Sweet>,
    pub loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    kept_input: Option<KeptInput>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    /// A dashboard that has not fetched anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sweets: Vec::new(),
            loading: true,
            error: None,
            notification: None,
            kept_input: None,
        }
    }

    /// Fetch the full listing.
    ///
    /// On failure the displayed set is left as it was and the error is
    /// replaced with [`LOAD_FAILED`].
    pub async fn load<S: SweetService>(&mut self, sweets: &S, token: &AuthToken) {
        self.loading = true;
        match sweets.get_all_sweets(token).await {
            Ok(data) => self.sweets = data,
            Err(e) => {
                warn!(error = %e, "Failed to load sweets");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Fetch the listing filtered by `params`, replacing the displayed set.
    pub async fn search<S: SweetService>(
        &mut self,
        sweets: &S,
        token: &AuthToken,
        params: &SearchParams,
    ) {
        self.loading = true;
        match sweets.search_sweets(token, params).await {
            Ok(data) => self.sweets = data,
            Err(e) => {
                warn!(error = %e, ?params, "Search failed");
                self.error = Some(SEARCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Fail a search whose criteria could not be sent at all.
    pub fn reject_search(&mut self) {
        self.error = Some(SEARCH_FAILED.to_string());
        self.loading = false;
    }

    /// Show the outcome of the preceding buy action.
    pub fn apply_flash(&mut self, flash: DashboardFlash) {
        self.notification = flash.notification;
        self.kept_input = flash.kept_input;
    }

    /// One card per displayed sweet, in listing order.
    #[must_use]
    pub fn cards(&self) -> Vec<SweetCardView> {
        self.sweets
            .iter()
            .map(|sweet| match &self.kept_input {
                Some(kept) if kept.sweet_id == sweet.id => {
                    SweetCardView::with_input(sweet, &kept.input)
                }
                _ => SweetCardView::new(sweet),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::fake::{Call, FakeShop, TOKEN, sweet};

    fn token() -> AuthToken {
        AuthToken::new(TOKEN)
    }

    fn buy(id: i64, quantity: u32) -> PurchaseRequest {
        PurchaseRequest {
            sweet_id: SweetId::new(id),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_load_renders_one_card_per_sweet() {
        let shop = FakeShop::with_sweets(vec![
            sweet(1, "Ladoo", 5),
            sweet(2, "Barfi", 0),
            sweet(3, "Jalebi", 12),
        ]);
        let mut page = DashboardPage::new();
        assert!(page.loading);

        page.load(&shop, &token()).await;

        assert!(!page.loading);
        let ids: Vec<String> = page.cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_load_failure_sets_static_error() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5)]);
        shop.fail_listings();
        let mut page = DashboardPage::new();

        page.load(&shop, &token()).await;
        page.load(&shop, &token()).await;

        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some("Failed to load sweets"));
        assert!(page.sweets.is_empty());
    }

    #[tokio::test]
    async fn test_search_replaces_listing() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5), sweet(2, "Barfi", 3)]);
        let mut page = DashboardPage::new();
        page.load(&shop, &token()).await;

        let params = SearchParams {
            name: Some("bar".to_string()),
            ..SearchParams::default()
        };
        page.search(&shop, &token(), &params).await;

        assert_eq!(page.sweets.len(), 1);
        assert_eq!(page.sweets[0].name, "Barfi");
        assert_eq!(shop.calls().last(), Some(&Call::Search(params)));
    }

    #[tokio::test]
    async fn test_search_failure() {
        let shop = FakeShop::default();
        shop.fail_listings();
        let mut page = DashboardPage::new();

        page.search(&shop, &token(), &SearchParams::default()).await;

        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some("Search failed"));
    }

    #[test]
    fn test_rejected_search_clears_loading() {
        let mut page = DashboardPage::new();
        page.reject_search();
        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some("Search failed"));
    }

    #[tokio::test]
    async fn test_successful_purchase_notifies_without_reading_listing() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5)]);

        let notification = submit_purchase(&shop, &token(), buy(1, 3)).await;

        assert_eq!(notification, Notification::success("Purchase successful!"));
        assert_eq!(shop.calls(), vec![Call::Purchase(SweetId::new(1), 3)]);
        assert_eq!(shop.stock_of(SweetId::new(1)), Some(2));
    }

    #[tokio::test]
    async fn test_failed_purchase_uses_server_message() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5)]);

        let notification = submit_purchase(&shop, &token(), buy(1, 9)).await;

        assert_eq!(notification, Notification::error("Insufficient stock"));
        assert_eq!(shop.count(|c| *c == Call::GetAll), 0);
    }

    #[tokio::test]
    async fn test_failed_purchase_without_message_uses_fallback() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5)]);
        shop.reject_purchases(None);

        let notification = submit_purchase(&shop, &token(), buy(1, 1)).await;

        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Purchase failed");
        assert_eq!(notification.css_class(), "error");
    }

    #[tokio::test]
    async fn test_kept_input_renders_on_matching_card_only() {
        let shop = FakeShop::with_sweets(vec![sweet(1, "Ladoo", 5), sweet(2, "Barfi", 5)]);
        let mut page = DashboardPage::new();
        page.load(&shop, &token()).await;

        page.apply_flash(DashboardFlash::keep_input(SweetId::new(2), "8"));
        let cards = page.cards();

        assert_eq!(cards[0].quantity, 1);
        assert!(cards[0].buy_enabled);
        assert_eq!(cards[1].quantity, 8);
        assert!(!cards[1].buy_enabled);
        assert_eq!(page.notification, None);
    }

    #[test]
    fn test_flash_survives_session_serialization() {
        let flash = DashboardFlash::notify(Notification::success("Purchase successful!"));
        let json = serde_json::to_value(&flash).unwrap();
        let back: DashboardFlash = serde_json::from_value(json).unwrap();
        assert_eq!(back, flash);
    }
}
