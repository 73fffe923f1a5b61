//! Grid shell: header, filter bar, product list, load more, empty state.

use provider_catalog::grid::{GridView, ViewMode};

use super::render_product_card;
use crate::html::{escape, short_price};

/// Render the complete product grid.
pub fn render_grid(view: &GridView<'_>) -> String {
    let body = if view.is_empty() {
        render_empty_state()
    } else {
        let cards: String = view
            .products
            .iter()
            .map(|tile| render_product_card(tile, view.view_mode))
            .collect();

        let list_class = match view.view_mode {
            ViewMode::Grid => "product-grid",
            ViewMode::List => "product-list",
        };

        format!(
            r#"<div class="{list_class}" data-view-mode="{mode}">
        {cards}
    </div>
    {load_more}"#,
            list_class = list_class,
            mode = view.view_mode.as_str(),
            cards = cards,
            load_more = render_load_more(view),
        )
    };

    format!(
        r#"<section class="product-grid-section" data-section="products">
    <header class="grid-header">
        <h1>Discover Products</h1>
        <p>Find your perfect match from our curated collection</p>
    </header>
    {filters}
    {body}
</section>"#,
        filters = render_filter_bar(view),
        body = body,
    )
}

/// Search box, selectors, price slider, counts, and view toggles.
pub fn render_filter_bar(view: &GridView<'_>) -> String {
    let search = &view.filters.search_query;
    let clear_search = if search.is_empty() {
        String::new()
    } else {
        r#"<button class="clear-search" data-action="clear-search" aria-label="Clear search">&times;</button>"#
            .to_string()
    };

    let category_options: String = view
        .categories
        .values
        .iter()
        .map(|v| {
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = escape(&v.value),
                selected = if v.selected { " selected" } else { "" },
            )
        })
        .collect();

    let sort_options: String = view
        .sort_choices
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                c.value.as_str(),
                if c.selected { " selected" } else { "" },
                c.label
            )
        })
        .collect();

    let toggle = |mode: ViewMode, label: &str| {
        let active = view.view_mode == mode;
        format!(
            r#"<button class="view-toggle{}" data-action="set-view-mode" data-mode="{}" aria-pressed="{}">{}</button>"#,
            if active { " active" } else { "" },
            mode.as_str(),
            active,
            label
        )
    };

    let max_price = view.filters.max_price.min(view.price_ceiling);

    let clear_filters = if view.filters.is_default_scope() {
        ""
    } else {
        r#"<button class="clear-filters" data-action="clear-filters">Clear all filters</button>"#
    };

    format!(
        r#"<div class="filter-bar" data-section="filters">
    <div class="search-box">
        <input type="text" name="search" placeholder="Search products, categories, or brands..." value="{search}">
        {clear_search}
    </div>
    <div class="filter-controls">
        <label for="filter-category">Category</label>
        <select id="filter-category" name="category">{category_options}</select>

        <label for="filter-sortby">Sort By</label>
        <select id="filter-sortby" name="sort">{sort_options}</select>

        <label for="filter-maxprice">Max Price: {max_label}</label>
        <input id="filter-maxprice" type="range" name="max_price" min="0" max="{ceiling}" step="{step}" value="{max_price}">
        <div class="range-labels"><span>$0</span><span>{ceiling_label}</span></div>
    </div>
    <div class="filter-summary">
        <span class="result-count"><strong>{visible}</strong> of {filtered} results <span class="total">&middot; total {total} products</span></span>
        <div class="view-toggles">{grid_toggle}{list_toggle}</div>
        {clear_filters}
    </div>
</div>"#,
        search = escape(search),
        clear_search = clear_search,
        category_options = category_options,
        sort_options = sort_options,
        max_label = short_price(max_price),
        ceiling = view.price_ceiling,
        step = view.price_step,
        max_price = max_price,
        ceiling_label = short_price(view.price_ceiling),
        visible = view.counts.visible,
        filtered = view.counts.filtered,
        total = view.counts.total,
        clear_filters = clear_filters,
        grid_toggle = toggle(ViewMode::Grid, "Grid"),
        list_toggle = toggle(ViewMode::List, "List"),
    )
}

/// "Load more" control; empty when every result is already visible.
pub fn render_load_more(view: &GridView<'_>) -> String {
    if !view.has_more {
        return String::new();
    }

    r#"<div class="load-more">
        <button data-action="load-more">Load more</button>
    </div>"#
        .to_string()
}

/// Shown when no product passes the filters.
pub fn render_empty_state() -> String {
    r#"<div class="empty-state">
        <h3>No products found</h3>
        <p>Try adjusting your filters or search terms</p>
        <button data-action="clear-filters">Reset Filters</button>
    </div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_catalog::catalog::{Catalog, Product};
    use provider_catalog::grid::{GridAction, GridState};
    use provider_catalog::search::SortBy;

    fn big_catalog() -> Catalog {
        Catalog::new(Some(
            (0..8)
                .map(|i| Product::new(i.to_string(), format!("Item {}", i)).with_category("Misc"))
                .collect(),
        ))
    }

    #[test]
    fn test_filter_bar_reflects_state() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetCategory("Food".into()), &catalog);
        state.apply(GridAction::SetSort(SortBy::Rating), &catalog);
        state.apply(GridAction::SetSearch("coffee".into()), &catalog);

        let view = GridView::build(&catalog, &state);
        let html = render_filter_bar(&view);

        assert!(html.contains(r#"<option value="Food" selected>Food</option>"#));
        assert!(html.contains(r#"<option value="rating" selected>Top Rated</option>"#));
        assert!(html.contains(r#"value="coffee""#));
        assert!(html.contains("clear-search"));
        assert!(html.contains("<strong>1</strong> of 1 results"));
        assert!(html.contains("total 6 products"));
        assert!(html.contains("Max Price: $500"));
        assert!(html.contains("Clear all filters"));
    }

    #[test]
    fn test_clear_all_hidden_without_narrowing_filters() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetSort(SortBy::PriceDesc), &catalog);
        let html = render_filter_bar(&GridView::build(&catalog, &state));
        assert!(!html.contains("Clear all filters"));

        state.apply(GridAction::SetMaxPrice(100.0), &catalog);
        let html = render_filter_bar(&GridView::build(&catalog, &state));
        assert!(html.contains("Clear all filters"));
        assert!(html.contains("Max Price: $100"));
    }

    #[test]
    fn test_load_more_only_when_more() {
        let catalog = big_catalog();
        let mut state = GridState::default();

        let html = render_grid(&GridView::build(&catalog, &state));
        assert!(html.contains("Load more"));
        assert_eq!(html.matches(r#"<article class="product-card"#).count(), 6);

        state.apply(GridAction::LoadMore, &catalog);
        let html = render_grid(&GridView::build(&catalog, &state));
        assert!(!html.contains("Load more"));
        assert_eq!(html.matches(r#"<article class="product-card"#).count(), 8);
    }

    #[test]
    fn test_list_mode() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetViewMode(ViewMode::List), &catalog);
        let html = render_grid(&GridView::build(&catalog, &state));
        assert!(html.contains(r#"class="product-list" data-view-mode="list""#));
        assert!(html.contains(r#"data-mode="list" aria-pressed="true""#));
    }

    #[test]
    fn test_empty_state_replaces_list() {
        let catalog = Catalog::sample();
        let mut state = GridState::default();
        state.apply(GridAction::SetSearch("nothing matches this".into()), &catalog);
        let html = render_grid(&GridView::build(&catalog, &state));
        assert!(html.contains("No products found"));
        assert!(!html.contains("product-card"));
        assert!(!html.contains("Load more"));
    }
}
