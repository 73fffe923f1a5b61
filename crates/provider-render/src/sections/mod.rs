//! Section renderers for the product components.

mod card;
mod detail;
mod grid;

pub use card::*;
pub use detail::*;
pub use grid::*;
