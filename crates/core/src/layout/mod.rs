//! Geometric data model and the text/rectangle spatial join.

mod cell;
mod combine;

pub use cell::{Cell, Rectangle, TextFragment};
pub use combine::combine;
