//! Styling system for UI elements
//!
//! - [`colors`] - Color constants and palette management
//! - [`style`] - Styles, per-state style sets and button variants

pub mod colors;
pub mod style;

pub use colors::{
    BLACK, COLOR_CYAN, COLOR_INDIGO, COLOR_INDIGO_LIGHT, COLOR_MINT, ColorPalette, DARK_GRAY,
    GRAY, LIGHT_GRAY, MATRIX_GREEN, WHITE,
};
pub use style::{ButtonVariant, Fill, Style, StyleSet, StyleState};
