//! Product catalog module.
//!
//! Contains the product type, the built-in sample catalog, and loading of
//! supplied catalogs.

mod product;
mod sample;
mod source;

pub use product::{CartItem, Product, StockStatus, LOW_STOCK_THRESHOLD, MAX_RATING};
pub use sample::sample_products;
pub use source::{validate, Catalog};
