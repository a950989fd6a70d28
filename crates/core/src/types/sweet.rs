//! Product records mirrored from the sweet shop API.

use serde::{Deserialize, Serialize};

use super::{Price, SweetId};

/// A purchasable catalog item.
///
/// The API owns every field; the storefront only renders them. Stock never
/// goes below zero on the server, which is why it is unsigned here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity_in_stock: u32,
}

impl Sweet {
    /// Whether the sweet can currently be bought at all.
    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.quantity_in_stock == 0
    }

    /// Stock state for display.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        if self.is_out_of_stock() {
            StockStatus::OutOfStock
        } else {
            StockStatus::Available(self.quantity_in_stock)
        }
    }
}

/// Display state of a sweet's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Available(u32),
    OutOfStock,
}

impl StockStatus {
    /// Human-readable label, e.g. "Available: 5".
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Available(n) => format!("Available: {n}"),
            Self::OutOfStock => "Out of Stock".to_string(),
        }
    }

    /// CSS modifier class for the stock badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Available(_) => "in",
            Self::OutOfStock => "out",
        }
    }
}
