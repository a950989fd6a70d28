//! Page state for the storefront's views.
//!
//! Each page tracks the same three things per backend call: whether a call
//! is in flight, the last error message, and the data to render. State is
//! built fresh for every request and dropped with it, so a completion can
//! only ever update the page that issued the call.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod sweet_card;

pub use dashboard::{
    DashboardFlash, DashboardPage, KeptInput, Notification, NotificationKind, submit_purchase,
};
pub use login::LoginPage;
pub use register::RegisterPage;
pub use sweet_card::SweetCardView;

/// Shown when login fails without a server message.
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
/// Shown when registration fails without a server message.
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
/// Shown when the initial or refreshed listing cannot be fetched.
pub const LOAD_FAILED: &str = "Failed to load sweets";
/// Shown when a search cannot be completed.
pub const SEARCH_FAILED: &str = "Search failed";
/// Shown after a successful purchase.
pub const PURCHASE_SUCCEEDED: &str = "Purchase successful!";
/// Shown when a purchase fails without a server message.
pub const PURCHASE_FAILED: &str = "Purchase failed";
