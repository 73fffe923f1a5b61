//! Immutable view model of the product grid.

use crate::catalog::{Catalog, Product};
use crate::grid::{GridState, ViewMode};
use crate::search::{category_facet, query_refs, CategoryFacet, FilterOptions, ResultCounts, SortBy};
use serde::Serialize;

/// One card in the grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductTile<'a> {
    pub product: &'a Product,
    pub wishlisted: bool,
}

/// A sort selector entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SortChoice {
    pub value: SortBy,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything a renderer needs to draw the grid, borrowed from the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridView<'a> {
    /// Visible products, in sort order.
    pub products: Vec<ProductTile<'a>>,
    /// Category selector values.
    pub categories: CategoryFacet,
    /// Sort selector values.
    pub sort_choices: Vec<SortChoice>,
    /// Filters in effect.
    pub filters: FilterOptions,
    pub counts: ResultCounts,
    /// Whether a "load more" control should be offered.
    pub has_more: bool,
    pub view_mode: ViewMode,
    /// Upper end of the max-price slider.
    pub price_ceiling: f64,
    /// Slider step of the max-price control.
    pub price_step: f64,
}

impl<'a> GridView<'a> {
    /// Run the query for `state` and slice it to the visible cursor.
    pub fn build(catalog: &'a Catalog, state: &GridState) -> Self {
        let filtered = query_refs(catalog.products(), &state.filters);
        let counts = ResultCounts::new(&state.cursor, filtered.len(), catalog.len());

        let products = state
            .cursor
            .slice(&filtered)
            .iter()
            .map(|&product| ProductTile {
                product,
                wishlisted: state.is_wishlisted(&product.id),
            })
            .collect();

        let sort_choices = SortBy::ALL
            .iter()
            .map(|&value| SortChoice {
                value,
                label: value.display_name(),
                selected: value == state.filters.sort_by,
            })
            .collect();

        Self {
            products,
            categories: category_facet(catalog.products(), &state.filters.category),
            sort_choices,
            filters: state.filters.clone(),
            counts,
            has_more: state.cursor.has_more(filtered.len()),
            view_mode: state.view_mode,
            price_ceiling: state.config().price_ceiling,
            price_step: state.config().price_step,
        }
    }

    /// No product passes the filters.
    pub fn is_empty(&self) -> bool {
        self.counts.filtered == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridAction;
    use crate::ids::ProductId;

    #[test]
    fn test_sample_catalog_has_no_load_more() {
        let catalog = Catalog::sample();
        let view = GridView::build(&catalog, &GridState::default());
        assert_eq!(view.products.len(), 6);
        assert!(!view.has_more);
        assert_eq!(view.counts.visible, 6);
        assert_eq!(view.counts.filtered, 6);
        assert_eq!(view.counts.total, 6);
    }

    #[test]
    fn test_default_view_is_name_sorted() {
        let catalog = Catalog::sample();
        let view = GridView::build(&catalog, &GridState::default());
        let names: Vec<_> = view.products.iter().map(|t| t.product.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Leather Messenger Bag",
                "Minimalist Desk Lamp",
                "Organic Coffee Beans",
                "Premium Wireless Headphones",
                "Smart Watch Pro",
                "Yoga Mat Premium",
            ]
        );
    }

    #[test]
    fn test_empty_view() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetSearch("no such thing".into()), &catalog);
        let view = GridView::build(&catalog, &state);
        assert!(view.is_empty());
        assert!(view.products.is_empty());
        assert!(!view.has_more);
        assert_eq!(view.counts.total, 6);
        assert_eq!(view.categories.len(), 6);
    }

    #[test]
    fn test_sort_choices_mark_selection() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetSort(SortBy::Popular), &catalog);
        let view = GridView::build(&catalog, &state);
        let selected: Vec<_> = view.sort_choices.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Most Popular");
        assert_eq!(view.sort_choices[0].label, "Name (A-Z)");
    }

    #[test]
    fn test_wishlist_flags() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::ToggleWishlist(ProductId::new("4")), &catalog);
        let view = GridView::build(&catalog, &state);
        let flagged: Vec<_> = view
            .products
            .iter()
            .filter(|t| t.wishlisted)
            .map(|t| t.product.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["4"]);
    }

    #[test]
    fn test_view_serializes() {
        let catalog = Catalog::sample();
        let view = GridView::build(&catalog, &GridState::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["counts"]["filtered"], 6);
        assert_eq!(json["view_mode"], "grid");
        assert_eq!(json["sort_choices"][1]["value"], "price-asc");
    }
}
