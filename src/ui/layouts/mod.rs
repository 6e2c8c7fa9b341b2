//! Layout containers for arranging UI elements
//!
//! Every container owns its children, forwards input, updates and drawing
//! to them in insertion order, and places them when it is placed.

pub mod absolute;
pub(crate) mod children;
pub mod even_spacing;
pub mod grid;
pub mod list;
pub mod scrollable;
pub mod sizing;

pub use absolute::AbsolutePosContainer;
pub use even_spacing::EvenSpacingContainer;
pub use grid::{GridContainer, GridLayout};
pub use list::{ListContainer, ListLayout};
pub use scrollable::{SCROLL_STEP_PX, SCROLLBAR_WIDTH, ScrollContainer, ScrollLayout};
pub use sizing::{Length, Margin, Orientation};
