//! Product catalog domain for the product provider.
//!
//! This crate holds everything the product components compute, with no
//! rendering involved:
//!
//! - **Catalog**: Products, the built-in sample catalog, JSON/TOML loading
//! - **Search**: Filter options, sort orders, the query engine, facets, the
//!   visible-count cursor
//! - **Grid**: Explicit view state updated through reducer actions, and the
//!   immutable view model handed to a renderer
//! - **Detail**: Quantity selection for a single product
//!
//! # Example
//!
//! ```rust
//! use provider_catalog::prelude::*;
//!
//! let catalog = Catalog::new(None); // falls back to the sample products
//! let mut state = GridState::default();
//!
//! state.apply(GridAction::SetSort(SortBy::PriceAsc), &catalog);
//! state.apply(GridAction::SetMaxPrice(100.0), &catalog);
//!
//! let view = GridView::build(&catalog, &state);
//! assert_eq!(view.products[0].product.name, "Organic Coffee Beans");
//! assert!(!view.has_more);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod ids;

pub mod catalog;
pub mod detail;
pub mod grid;
pub mod search;

pub use error::{CatalogError, Result};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::error::{CatalogError, Result};
    pub use crate::events::{CatalogEvents, NoopEvents};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{sample_products, CartItem, Catalog, Product, StockStatus};

    // Search
    pub use crate::search::{
        categories, category_facet, query, query_refs, CategoryFacet, CategoryFilter,
        FacetValue, FilterOptions, ResultCounts, SortBy, VisibleCursor,
    };

    // Grid
    pub use crate::grid::{GridAction, GridState, GridView, ProductTile, SortChoice, ViewMode};

    // Detail
    pub use crate::detail::ProductDetail;
}
