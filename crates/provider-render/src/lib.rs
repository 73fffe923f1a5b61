//! HTML sections for the product provider components.
//!
//! Everything here is a pure function from a `provider-catalog` view model to
//! an HTML string. No section computes filtering, sorting, or paging; that
//! all happens in [`GridView::build`].

mod html;
mod sections;

pub use sections::{
    render_empty_state, render_filter_bar, render_grid, render_load_more, render_product_card,
    render_product_detail, render_stars,
};

use provider_catalog::catalog::Catalog;
use provider_catalog::grid::{GridState, GridView};

/// Build the grid view for `state` and render it.
pub fn render_catalog(catalog: &Catalog, state: &GridState) -> String {
    let view = GridView::build(catalog, state);
    let html = render_grid(&view);

    tracing::debug!(
        visible = view.counts.visible,
        filtered = view.counts.filtered,
        bytes = html.len(),
        "grid rendered"
    );

    html
}
