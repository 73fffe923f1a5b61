//! Product detail state: the quantity selector.

use crate::catalog::{CartItem, Product};
use crate::events::CatalogEvents;
use serde::{Deserialize, Serialize};

/// A product opened in the detail view, with the chosen quantity.
///
/// The quantity never drops below 1 and never rises above the stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    quantity: u32,
}

impl ProductDetail {
    /// Open `product` with a quantity of 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The chosen quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn max_quantity(&self) -> u32 {
        self.product.stock.max(1)
    }

    /// Add one unit, if stock allows. Returns whether the quantity changed.
    pub fn increment(&mut self) -> bool {
        if self.quantity < self.product.stock {
            self.quantity += 1;
            true
        } else {
            false
        }
    }

    /// Remove one unit, down to 1. Returns whether the quantity changed.
    pub fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }

    /// Set the quantity, clamped into the selectable range.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.max_quantity());
    }

    /// Whether another unit fits within the stock.
    pub fn can_increment(&self) -> bool {
        self.quantity < self.product.stock
    }

    /// Whether the quantity is above 1.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    /// Whether the product can be added at all.
    pub fn can_add_to_cart(&self) -> bool {
        self.product.is_in_stock()
    }

    /// Price of the chosen quantity.
    pub fn line_total(&self) -> f64 {
        self.product.line_total(self.quantity)
    }

    /// The product and chosen quantity as a cart line.
    pub fn cart_item(&self) -> CartItem {
        CartItem::new(self.product.clone(), self.quantity)
    }

    /// Hand the cart line to the host. Does nothing for
    /// out-of-stock products; returns whether the hand-off happened.
    pub fn add_to_cart(&self, events: &mut impl CatalogEvents) -> bool {
        if !self.can_add_to_cart() {
            tracing::debug!(product_id = %self.product.id, "add to cart ignored, out of stock");
            return false;
        }
        events.on_add_to_cart(&self.cart_item());
        true
    }
}
