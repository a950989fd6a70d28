//! Search criteria for the sweet listing query.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filter criteria passed from the search form to the listing query.
///
/// The storefront does not interpret these; they flow to the API as query
/// parameters. Blank text fields are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub min_price: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub max_price: Option<Decimal>,
}

impl SearchParams {
    /// Drop blank text criteria so they are not sent as empty filters.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            category: non_blank(self.category),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }

    /// Whether no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
