//! Search module.
//!
//! Contains filter options, sort orders, the query engine, facet derivation,
//! and the visible-count cursor.

mod filter;
mod query;
mod results;
mod sort;

pub use filter::{
    CategoryFilter, FilterOptions, ALL_CATEGORIES, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
pub use query::{categories, category_facet, query, query_refs};
pub use results::{CategoryFacet, FacetValue, ResultCounts, VisibleCursor, DEFAULT_PAGE_SIZE};
pub use sort::{collate, SortBy};
