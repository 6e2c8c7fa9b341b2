//! Sizing vocabulary shared by the layout containers

use embedded_graphics::prelude::*;

/// Axis along which a list lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn main(self, size: Size) -> u32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub fn cross(self, size: Size) -> u32 {
        self.perpendicular().main(size)
    }

    /// Builds a size from main-axis and cross-axis extents.
    pub fn size(self, main: u32, cross: u32) -> Size {
        match self {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// Builds an offset from main-axis and cross-axis coordinates.
    pub fn point(self, main: i32, cross: i32) -> Point {
        match self {
            Orientation::Horizontal => Point::new(main, cross),
            Orientation::Vertical => Point::new(cross, main),
        }
    }
}

/// How a container sizes itself along one axis
///
/// - `Fixed(n)`: exactly n pixels
/// - `FitContents`: just large enough for the children plus padding
/// - `FillParent`: whatever the parent assigns later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Fixed(u32),
    FitContents,
    FillParent,
}

impl Length {
    /// Whether the parent is asked to stretch this axis.
    pub fn is_fill(self) -> bool {
        matches!(self, Length::FillParent)
    }
}

/// Gap between consecutive children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    /// Fixed gap in pixels
    Fixed(u32),
    /// Spread the leftover main-axis space evenly between children
    Auto,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Fixed(0)
    }
}

/// Gap that spreads `extent - total - 2 * padding` evenly over `count - 1`
/// gaps. Integer division; negative when the children overflow.
pub(crate) fn even_gap(extent: u32, total: u32, padding: u32, count: usize) -> i32 {
    if count < 2 {
        return 0;
    }
    (extent as i32 - total as i32 - 2 * padding as i32) / (count as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_maps_axes() {
        let size = Size::new(30, 10);
        assert_eq!(Orientation::Horizontal.main(size), 30);
        assert_eq!(Orientation::Horizontal.cross(size), 10);
        assert_eq!(Orientation::Vertical.main(size), 10);
        assert_eq!(Orientation::Vertical.size(10, 30), size);
        assert_eq!(Orientation::Vertical.point(4, 2), Point::new(2, 4));
    }

    #[test]
    fn even_gap_handles_small_and_overflowing_lists() {
        assert_eq!(even_gap(100, 40, 5, 1), 0);
        assert_eq!(even_gap(100, 40, 5, 0), 0);
        assert_eq!(even_gap(100, 40, 5, 3), 25);
        assert_eq!(even_gap(50, 60, 5, 3), -10);
    }
}
