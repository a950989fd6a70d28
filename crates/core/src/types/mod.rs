//! Core types for the Sweet Shop.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod search;
pub mod sweet;

pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::{PurchaseRequest, QuantitySelector, parse_quantity};
pub use search::SearchParams;
pub use sweet::{Sweet, StockStatus};
