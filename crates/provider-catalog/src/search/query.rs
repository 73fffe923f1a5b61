//! The catalog query engine.
//!
//! A pure function of (products, filters) to an ordered result. Steps run in
//! a fixed order: category, text search, price bounds, then a stable sort.
//! No step fails; products are only dropped on predicate mismatch.

use std::collections::HashMap;

use crate::catalog::Product;
use crate::search::filter::{matches_search, ALL_CATEGORIES};
use crate::search::{CategoryFacet, CategoryFilter, FacetValue, FilterOptions};

/// Filter and sort `products`, returning owned copies.
pub fn query(products: &[Product], filters: &FilterOptions) -> Vec<Product> {
    query_refs(products, filters).into_iter().cloned().collect()
}

/// Filter and sort `products` without cloning them.
pub fn query_refs<'a>(products: &'a [Product], filters: &FilterOptions) -> Vec<&'a Product> {
    let needle = filters.search_query.to_lowercase();

    let mut results: Vec<&Product> = products
        .iter()
        .filter(|p| filters.category.matches(p))
        .filter(|p| matches_search(p, &needle))
        .filter(|p| filters.matches_price(p))
        .collect();

    filters.sort_by.sort(&mut results);

    tracing::debug!(
        total = products.len(),
        filtered = results.len(),
        category = filters.category.as_str(),
        sort = filters.sort_by.as_str(),
        "catalog query"
    );

    results
}

/// "All" followed by the distinct categories of `products`, in first-seen
/// order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !labels[1..].contains(&product.category) {
            labels.push(product.category.clone());
        }
    }
    labels
}

/// The category facet over the unfiltered `products`, marking `selection`.
///
/// Independent of every other filter; the selector always offers all
/// categories of the catalog.
pub fn category_facet(products: &[Product], selection: &CategoryFilter) -> CategoryFacet {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_insert(0) += 1;
    }

    let values = categories(products)
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let (count, selected) = if i == 0 {
                (products.len(), selection.is_all())
            } else {
                (
                    counts.get(value.as_str()).copied().unwrap_or(0),
                    selection.as_str() == value && !selection.is_all(),
                )
            };
            FacetValue {
                value,
                count,
                selected,
            }
        })
        .collect();

    CategoryFacet { values }
}
