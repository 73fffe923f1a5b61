//! Grid view state and the actions that update it.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::config::GridConfig;
use crate::ids::ProductId;
use crate::search::{query_refs, CategoryFilter, FilterOptions, SortBy, VisibleCursor};
use serde::{Deserialize, Serialize};

/// Layout of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Wire name of the layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// A discrete update to the grid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridAction {
    SetCategory(CategoryFilter),
    SetSearch(String),
    ClearSearch,
    SetMinPrice(f64),
    SetMaxPrice(f64),
    SetSort(SortBy),
    /// Filters back to their defaults.
    ClearFilters,
    /// Reveal the next step of results.
    LoadMore,
    ToggleWishlist(ProductId),
    SetViewMode(ViewMode),
}

/// Everything the grid remembers between renders.
///
/// Filter actions never move the cursor. The wishlist lives only as long as
/// the state does.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub filters: FilterOptions,
    pub cursor: VisibleCursor,
    pub view_mode: ViewMode,
    wishlist: BTreeSet<ProductId>,
    config: GridConfig,
}

impl GridState {
    /// Fresh state with the configured default filters and page size.
    pub fn new(config: GridConfig) -> Self {
        Self {
            filters: config.default_filters(),
            cursor: VisibleCursor::new(config.page_size),
            view_mode: ViewMode::default(),
            wishlist: BTreeSet::new(),
            config,
        }
    }

    /// The configuration this state was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Whether `id` is on the wishlist.
    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Wishlisted ids, in id order.
    pub fn wishlist(&self) -> impl Iterator<Item = &ProductId> {
        self.wishlist.iter()
    }

    /// Apply an action. Returns whether anything changed.
    ///
    /// `catalog` is consulted only by [`GridAction::LoadMore`], to cap the
    /// cursor at the current filtered length.
    pub fn apply(&mut self, action: GridAction, catalog: &Catalog) -> bool {
        tracing::trace!(?action, "grid action");

        match action {
            GridAction::SetCategory(category) => {
                replace(&mut self.filters.category, category)
            }
            GridAction::SetSearch(text) => replace(&mut self.filters.search_query, text),
            GridAction::ClearSearch => replace(&mut self.filters.search_query, String::new()),
            GridAction::SetMinPrice(min) => replace(&mut self.filters.min_price, min),
            GridAction::SetMaxPrice(max) => replace(&mut self.filters.max_price, max),
            GridAction::SetSort(sort) => replace(&mut self.filters.sort_by, sort),
            GridAction::ClearFilters => {
                let mut changed = replace(&mut self.filters, self.config.default_filters());
                if self.config.reset_cursor_on_clear {
                    changed |= replace(&mut self.cursor, VisibleCursor::new(self.config.page_size));
                }
                changed
            }
            GridAction::LoadMore => {
                let filtered = query_refs(catalog.products(), &self.filters).len();
                self.cursor.load_more(filtered)
            }
            GridAction::ToggleWishlist(id) => {
                if !self.wishlist.remove(&id) {
                    self.wishlist.insert(id);
                }
                true
            }
            GridAction::SetViewMode(mode) => replace(&mut self.view_mode, mode),
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
