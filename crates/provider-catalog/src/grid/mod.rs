//! Product grid module.
//!
//! `GridState` is the grid's explicit state, changed only through
//! `GridAction`s. `GridView` is the read-only model built from it.

mod state;
mod view;

pub use state::{GridAction, GridState, ViewMode};
pub use view::{GridView, ProductTile, SortChoice};
