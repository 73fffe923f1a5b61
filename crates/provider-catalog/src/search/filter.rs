//! Filter options for the product grid.

use crate::catalog::Product;
use crate::search::SortBy;
use serde::{Deserialize, Serialize};

/// Label of the category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Default lower price bound.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Default upper price bound.
pub const DEFAULT_MAX_PRICE: f64 = 500.0;

/// Category selection. Serialized as the plain label, with "All" meaning no
/// filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Keep every category.
    #[default]
    All,
    /// Keep only this exact label.
    Only(String),
}

impl CategoryFilter {
    /// Build from a selector value; "All" maps to the sentinel.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label)
        }
    }

    /// The selector label; "All" for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label,
        }
    }

    /// Whether category filtering is off.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact (case-sensitive) label match.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => product.category == *label,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        CategoryFilter::new(label)
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        CategoryFilter::new(label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(label) => label,
        }
    }
}

/// Filter and sort settings of the product grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Category selection.
    pub category: CategoryFilter,
    /// Free-text query, matched case-insensitively.
    pub search_query: String,
    /// Inclusive lower price bound.
    pub min_price: f64,
    /// Inclusive upper price bound.
    pub max_price: f64,
    /// Result ordering.
    pub sort_by: SortBy,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_query: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            sort_by: SortBy::Name,
        }
    }
}

impl FilterOptions {
    /// Default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set both price bounds.
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the upper price bound.
    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = max;
        self
    }

    /// Set the result ordering.
    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Whether every product passes the filter steps (sorting aside).
    pub fn is_default_scope(&self) -> bool {
        self.category.is_all()
            && self.search_query.is_empty()
            && self.min_price <= DEFAULT_MIN_PRICE
            && self.max_price >= DEFAULT_MAX_PRICE
    }

    /// Whether the product passes all three filter steps.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && matches_search(product, &self.search_query.to_lowercase())
            && self.matches_price(product)
    }

    /// Inclusive price bound check. An inverted range matches nothing.
    pub fn matches_price(&self, product: &Product) -> bool {
        product.price >= self.min_price && product.price <= self.max_price
    }
}

/// Case-insensitive substring match over name, description, and category.
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub(crate) fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&product.name, &product.description, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
