//! Product and cart item types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Stock above this count is shown as plainly "in stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once loaded; nothing in this crate mutates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown on cards and in the detail view.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Unit price (non-negative).
    pub price: f64,
    /// Image URI.
    pub image: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Units available.
    pub stock: u32,
    /// Whether the product is promoted.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Create a product with empty text fields, zero price, and no stock.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            price: 0.0,
            image: String::new(),
            rating: 0.0,
            stock: 0,
            featured: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the unit price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the average rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the units available.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Check if at least one unit is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Classify the stock level for display.
    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            n if n <= LOW_STOCK_THRESHOLD => StockStatus::LowStock(n),
            n => StockStatus::InStock(n),
        }
    }

    /// Number of filled stars for the rating.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Whether a half star follows the filled ones.
    pub fn has_half_star(&self) -> bool {
        let rating = self.rating.clamp(0.0, MAX_RATING);
        rating < MAX_RATING && rating.fract() >= 0.5
    }

    /// Price of `quantity` units.
    pub fn line_total(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity)
    }
}

/// Display classification of a product's stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    InStock(u32),
    /// Between 1 and [`LOW_STOCK_THRESHOLD`] units.
    LowStock(u32),
    /// Nothing left.
    OutOfStock,
}

impl StockStatus {
    /// CSS-friendly status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock(_) => "in-stock",
            StockStatus::LowStock(_) => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Text shown next to the product.
    pub fn message(&self) -> String {
        match self {
            StockStatus::InStock(n) => format!("In Stock ({} available)", n),
            StockStatus::LowStock(n) => format!("Only {} left", n),
            StockStatus::OutOfStock => "Out of Stock".to_string(),
        }
    }
}

/// A product paired with a chosen quantity, as handed to the cart.
///
/// Serializes as the product's fields plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart item; the quantity is raised to at least 1.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// Price of the whole line.
    pub fn line_total(&self) -> f64 {
        self.product.line_total(self.quantity)
    }
}
