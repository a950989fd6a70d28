//! Quantity selection for the buy control of a single sweet.
//!
//! The selector holds free-text quantity input bounded by the sweet's current
//! stock. The bounds check is advisory: the API is the only authority on
//! whether a purchase can be fulfilled.

use super::SweetId;

/// Quantity a fresh or reset selector starts at.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Parse free-text quantity input.
///
/// Reads an optional sign followed by the leading run of ASCII digits and
/// ignores whatever follows, so `"3.7"` reads as 3 and `"12abc"` as 12.
/// Input with no leading digits, or that reads as zero, yields
/// [`DEFAULT_QUANTITY`]. Negative values are passed through; the selector's
/// bounds decide what to do with them.
#[must_use]
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let Some(digits) = rest.get(..digits_len).filter(|d| !d.is_empty()) else {
        return DEFAULT_QUANTITY;
    };

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    if value == 0 { DEFAULT_QUANTITY } else { value }
}

/// A purchase the buy control is allowed to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub sweet_id: SweetId,
    pub quantity: u32,
}

/// Bounded quantity selector for one sweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    stock: u32,
    quantity: i64,
}

impl QuantitySelector {
    /// Create a selector for a sweet with the given stock, starting at 1.
    #[must_use]
    pub const fn new(stock: u32) -> Self {
        Self {
            stock,
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Stock the selector is bounded by.
    #[must_use]
    pub const fn stock(&self) -> u32 {
        self.stock
    }

    /// Currently selected quantity.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace the selected quantity with parsed free-text input.
    pub fn set_input(&mut self, input: &str) {
        self.quantity = parse_quantity(input);
    }

    /// Whether the quantity input accepts edits.
    #[must_use]
    pub const fn input_enabled(&self) -> bool {
        self.stock > 0
    }

    /// Whether the buy control is enabled.
    #[must_use]
    pub fn can_buy(&self) -> bool {
        self.stock > 0 && self.quantity <= i64::from(self.stock)
    }

    /// Press the buy control.
    ///
    /// Returns the purchase to submit when `0 < quantity <= stock`, resetting
    /// the selector to 1. Otherwise nothing is submitted and the selection is
    /// left as entered.
    pub fn buy(&mut self, sweet_id: SweetId) -> Option<PurchaseRequest> {
        if self.quantity <= 0 || self.quantity > i64::from(self.stock) {
            return None;
        }
        let quantity = u32::try_from(self.quantity).ok()?;
        self.quantity = DEFAULT_QUANTITY;
        Some(PurchaseRequest { sweet_id, quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_integer_prefix() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("  7"), 7);
        assert_eq!(parse_quantity("3.7"), 3);
        assert_eq!(parse_quantity("12abc"), 12);
        assert_eq!(parse_quantity("+4"), 4);
    }

    #[test]
    fn test_parse_quantity_defaults_to_one() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-"), 1);
        assert_eq!(parse_quantity(".5"), 1);
    }

    #[test]
    fn test_parse_quantity_keeps_negative() {
        assert_eq!(parse_quantity("-2"), -2);
    }

    #[test]
    fn test_out_of_stock_disables_buy_for_any_quantity() {
        for input in ["1", "0", "5", "-3", "abc"] {
            let mut selector = QuantitySelector::new(0);
            selector.set_input(input);
            assert!(!selector.can_buy(), "input {input:?} should not enable buy");
            assert!(!selector.input_enabled());
            assert_eq!(selector.buy(SweetId::new(1)), None);
        }
    }

    #[test]
    fn test_quantity_bounds_against_stock() {
        let stock = 5;
        for quantity in 1..=stock {
            let mut selector = QuantitySelector::new(stock);
            selector.set_input(&quantity.to_string());
            assert!(selector.can_buy(), "quantity {quantity} should enable buy");
        }

        let mut selector = QuantitySelector::new(stock);
        selector.set_input("6");
        assert!(!selector.can_buy());
        assert_eq!(selector.buy(SweetId::new(1)), None);
        assert_eq!(selector.quantity(), 6);
    }

    #[test]
    fn test_buy_submits_and_resets() {
        let mut selector = QuantitySelector::new(5);
        selector.set_input("3");

        let request = selector.buy(SweetId::new(1));

        assert_eq!(
            request,
            Some(PurchaseRequest {
                sweet_id: SweetId::new(1),
                quantity: 3,
            })
        );
        assert_eq!(selector.quantity(), 1);
    }

    #[test]
    fn test_negative_quantity_never_submits() {
        let mut selector = QuantitySelector::new(5);
        selector.set_input("-2");
        // Enabled by the upper bound alone, but the press is a no-op.
        assert!(selector.can_buy());
        assert_eq!(selector.buy(SweetId::new(1)), None);
        assert_eq!(selector.quantity(), -2);
    }
}
