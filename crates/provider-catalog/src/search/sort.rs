//! Sort orders for grid results.

use std::cmp::Ordering;

use crate::catalog::Product;
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortBy {
    /// Name A-Z.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Price, low to high.
    #[serde(rename = "price-asc")]
    PriceAsc,
    /// Price, high to low.
    #[serde(rename = "price-desc")]
    PriceDesc,
    /// Highest rated first.
    #[serde(rename = "rating")]
    Rating,
    /// Featured first, then rating, then stock.
    #[serde(rename = "popular")]
    Popular,
}

impl SortBy {
    /// Every option, in selector order.
    pub const ALL: [SortBy; 5] = [
        SortBy::Name,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
        SortBy::Rating,
        SortBy::Popular,
    ];

    /// Wire name used in selectors and serialized filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::Rating => "rating",
            SortBy::Popular => "popular",
        }
    }

    /// Parse a selector value. Unknown values fall back to [`SortBy::Name`].
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-asc" => SortBy::PriceAsc,
            "price-desc" => SortBy::PriceDesc,
            "rating" => SortBy::Rating,
            "popular" => SortBy::Popular,
            _ => SortBy::Name,
        }
    }

    /// Label shown in the sort selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Name => "Name (A-Z)",
            SortBy::PriceAsc => "Price (Low to High)",
            SortBy::PriceDesc => "Price (High to Low)",
            SortBy::Rating => "Top Rated",
            SortBy::Popular => "Most Popular",
        }
    }

    /// Compare two products under this order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortBy::Name => collate(&a.name, &b.name),
            SortBy::PriceAsc => a.price.total_cmp(&b.price),
            SortBy::PriceDesc => b.price.total_cmp(&a.price),
            SortBy::Rating => b.rating.total_cmp(&a.rating),
            SortBy::Popular => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.rating.total_cmp(&a.rating))
                .then_with(|| b.stock.cmp(&a.stock)),
        }
    }

    /// Stable in-place sort; equal elements keep their input order.
    pub fn sort<P: AsRef<Product>>(&self, products: &mut [P]) {
        products.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| tracing::warn!(?err, "collation data unavailable, sorting names by code point"))
            .ok();
}

/// Locale-aware string comparison using the root collation order.
///
/// Accented letters sort beside their base letter and punctuation sorts
/// before letters. On a case-only difference lowercase comes first. Strings
/// the collator considers equal fall back to code point order, so this is a
/// total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    let collated = COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    });
    collated.then_with(|| a.cmp(b))
}
