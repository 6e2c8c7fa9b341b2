//! Single row with evenly distributed gaps

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use log::debug;

use super::children::{Children, forward_to_children};
use super::sizing::{Length, Orientation, even_gap};
use crate::ui::core::Component;
use crate::ui::elements::Element;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Lays children out left to right, spreading the leftover width evenly
/// between them.
///
/// The gap is always `(width - sum of widths - 2 * padding) / (n - 1)` and
/// is recomputed at every placement; with fewer than two children it is 0.
pub struct EvenSpacingContainer {
    frame: Frame,
    padding: u32,
    children: Children,
}

impl EvenSpacingContainer {
    pub fn new(width: Length, height: Length, padding: u32, children: Vec<Element>) -> Self {
        let children = Children::new(children);
        let resolve = |length: Length, fit: u32| match length {
            Length::Fixed(n) => n,
            Length::FitContents => fit + 2 * padding,
            Length::FillParent => 0,
        };
        let size = Size::new(
            resolve(width, children.total(|s| s.width)),
            resolve(height, children.largest(|s| s.height)),
        );

        let mut frame = Frame::new(size);
        frame.set_fill(Orientation::Horizontal, width.is_fill());
        frame.set_fill(Orientation::Vertical, height.is_fill());

        Self {
            frame,
            padding,
            children,
        }
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    /// Gap used at the current width.
    pub fn margin(&self) -> i32 {
        even_gap(
            self.frame.size().width,
            self.children.total(|s| s.width),
            self.padding,
            self.children.len(),
        )
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

impl Component for EvenSpacingContainer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);

        let margin = self.margin();
        debug!("Spacing {} children {}px apart", self.children.len(), margin);

        let padding = self.padding as i32;
        let mut x = padding;
        for child in self.children.iter_mut() {
            child.set_position(origin + Point::new(x, padding));
            x += child.size().width as i32 + margin;
        }
    }

    forward_to_children!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn spreads_children_across_width() {
        let mut row = EvenSpacingContainer::new(
            Length::Fixed(100),
            Length::FitContents,
            5,
            vec![
                Element::spacer(Size::new(10, 4)),
                Element::spacer(Size::new(20, 8)),
                Element::spacer(Size::new(10, 4)),
            ],
        );
        assert_eq!(row.size(), Size::new(100, 18));
        assert_eq!(row.margin(), 25);

        row.set_position(Point::new(0, 0));
        let xs: Vec<i32> = row.children().iter().map(|c| c.frame().origin().x).collect();
        assert_eq!(xs, [5, 40, 85]);
    }

    #[test]
    fn single_child_has_no_gap() {
        let mut row = EvenSpacingContainer::new(
            Length::Fixed(100),
            Length::Fixed(20),
            5,
            vec![Element::spacer(Size::new(10, 10))],
        );
        assert_eq!(row.margin(), 0);

        row.set_position(Point::new(10, 10));
        assert_eq!(row.children()[0].frame().origin(), Point::new(15, 15));
    }

    #[test]
    fn fit_contents_width_has_no_gaps() {
        let row = EvenSpacingContainer::new(
            Length::FitContents,
            Length::FitContents,
            2,
            vec![
                Element::spacer(Size::new(10, 4)),
                Element::spacer(Size::new(10, 6)),
            ],
        );
        assert_eq!(row.size(), Size::new(24, 10));
        assert_eq!(row.margin(), 0);
    }
}
