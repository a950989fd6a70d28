//! Display data for a single sweet card.

use sweet_shop_core::{QuantitySelector, Sweet};

/// Sweet card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweetCardView {
    /// Card key; the product identifier.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price with two decimals, without currency symbol.
    pub price: String,
    pub stock: u32,
    pub stock_label: String,
    pub stock_class: &'static str,
    pub out_of_stock: bool,
    /// Quantity shown in the selector.
    pub quantity: i64,
    pub buy_enabled: bool,
}

impl SweetCardView {
    /// Card for a sweet with a fresh selector (quantity 1).
    #[must_use]
    pub fn new(sweet: &Sweet) -> Self {
        Self::with_selector(sweet, QuantitySelector::new(sweet.quantity_in_stock))
    }

    /// Card for a sweet whose selector holds previously entered input.
    ///
    /// The input is re-applied against the sweet's current stock, so a
    /// quantity that no longer fits renders with the buy control disabled.
    #[must_use]
    pub fn with_input(sweet: &Sweet, input: &str) -> Self {
        let mut selector = QuantitySelector::new(sweet.quantity_in_stock);
        selector.set_input(input);
        Self::with_selector(sweet, selector)
    }

    fn with_selector(sweet: &Sweet, selector: QuantitySelector) -> Self {
        let status = sweet.stock_status();
        Self {
            id: sweet.id.to_string(),
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_fixed(),
            stock: sweet.quantity_in_stock,
            stock_label: status.label(),
            stock_class: status.css_class(),
            out_of_stock: sweet.is_out_of_stock(),
            quantity: selector.quantity(),
            buy_enabled: selector.can_buy(),
        }
    }
}
