//! Fixed grid of uniform cells

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use log::debug;

use super::children::{Children, forward_to_children};
use crate::error::LayoutError;
use crate::ui::core::Component;
use crate::ui::elements::Element;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Configuration of a [`GridContainer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    /// Gap between neighbouring cells
    pub margin: u32,
    pub padding: u32,
}

impl GridLayout {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            margin: 0,
            padding: 0,
        }
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    fn extent(&self, cells: u32, cell: u32) -> u32 {
        cells * cell + 2 * self.padding + (cells - 1) * self.margin
    }
}

/// Places children row-major in cells as large as the largest child.
///
/// # Examples
/// ```ignore
/// // Three rows of ten keys
/// let keyboard = GridContainer::new(
///     GridLayout::new(10, 3).with_margin(5).with_padding(5),
///     keys,
/// )?;
/// ```
pub struct GridContainer {
    frame: Frame,
    layout: GridLayout,
    cell: Size,
    children: Children,
}

impl GridContainer {
    pub fn new(layout: GridLayout, children: Vec<Element>) -> Result<Self, LayoutError> {
        if layout.columns == 0 || layout.rows == 0 {
            return Err(LayoutError::EmptyGrid {
                columns: layout.columns,
                rows: layout.rows,
            });
        }

        let capacity = (layout.columns * layout.rows) as usize;
        if children.len() > capacity {
            return Err(LayoutError::GridOverflow {
                capacity,
                children: children.len(),
            });
        }

        let children = Children::new(children);
        let cell = Size::new(
            children.largest(|s| s.width),
            children.largest(|s| s.height),
        );
        let size = Size::new(
            layout.extent(layout.columns, cell.width),
            layout.extent(layout.rows, cell.height),
        );
        debug!(
            "Grid {}x{} with {}x{} cells: {}x{}",
            layout.columns, layout.rows, cell.width, cell.height, size.width, size.height
        );

        Ok(Self {
            frame: Frame::new(size),
            layout,
            cell,
            children,
        })
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn cell_size(&self) -> Size {
        self.cell
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

impl Component for GridContainer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);

        let padding = self.layout.padding as i32;
        let step = Point::new(
            (self.cell.width + self.layout.margin) as i32,
            (self.cell.height + self.layout.margin) as i32,
        );
        let columns = self.layout.columns as usize;

        for (index, child) in self.children.iter_mut().enumerate() {
            let column = (index % columns) as i32;
            let row = (index / columns) as i32;
            let offset = Point::new(padding + column * step.x, padding + row * step.y);
            child.set_position(origin + offset);
        }
    }

    forward_to_children!();
}
