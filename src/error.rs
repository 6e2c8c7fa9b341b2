//! Error types for widget tree construction.
//!
//! Two kinds of faults exist in the toolkit:
//!
//! - **Configuration faults** are static wiring mistakes in a component tree
//!   (for example asking a horizontal list to stretch a child's width). They
//!   are detected while the tree is built and reported as [`LayoutError`].
//! - **Usage faults** are calls that need a position (hit-testing, pointer
//!   motion, drawing) made before `set_position`. They are programmer errors
//!   and panic with [`NOT_POSITIONED`].

use crate::ui::layouts::Orientation;
use thiserror_no_std::Error;

/// Panic message for position-dependent calls on a component that was never
/// positioned.
pub const NOT_POSITIONED: &str =
    "component must be positioned with set_position before it is hit-tested, moved over or drawn";

/// Configuration faults raised while a container resolves its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A child asked to fill the axis a list lays its children out along.
    #[error("child {index} cannot fill the main axis of a {orientation:?} list")]
    FillAlongListAxis {
        orientation: Orientation,
        index: usize,
    },

    /// A grid received more children than it has cells.
    #[error("grid has {capacity} cells but {children} children")]
    GridOverflow { capacity: usize, children: usize },

    /// A grid was declared with zero columns or zero rows.
    #[error("grid dimensions must be non-zero (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },
}
