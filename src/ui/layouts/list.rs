//! Horizontal or vertical list with fit and fill sizing

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use log::debug;

use super::children::{Children, forward_to_children};
use super::sizing::{Length, Margin, Orientation, even_gap};
use crate::error::LayoutError;
use crate::ui::core::Component;
use crate::ui::elements::Element;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Configuration of a [`ListContainer`]
///
/// # Examples
/// ```ignore
/// let layout = ListLayout::horizontal()
///     .with_height(Length::Fixed(40))
///     .with_margin(Margin::Auto)
///     .with_padding(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub orientation: Orientation,
    pub width: Length,
    pub height: Length,
    pub margin: Margin,
    pub padding: u32,
}

impl ListLayout {
    /// A list that fits its contents on both axes, without gaps or padding.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            width: Length::FitContents,
            height: Length::FitContents,
            margin: Margin::Fixed(0),
            padding: 0,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    fn main_length(&self) -> Length {
        self.length(self.orientation)
    }

    fn cross_length(&self) -> Length {
        self.length(self.orientation.perpendicular())
    }

    fn length(&self, axis: Orientation) -> Length {
        match axis {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Lays children out one after another along its orientation
///
/// Sizes resolve at construction, again whenever a parent resizes the list,
/// and on every [`push`](ListContainer::push):
///
/// 1. `FitContents` axes wrap the children plus padding. Along the list the
///    gaps count too, except auto gaps which count as zero.
/// 2. Children that fill the cross axis get `cross - 2 * padding`.
/// 3. An auto margin spreads the leftover main-axis space over the gaps.
///
/// A child asking to fill the list's own axis is rejected.
pub struct ListContainer {
    frame: Frame,
    layout: ListLayout,
    margin: i32,
    children: Children,
}

impl ListContainer {
    pub fn new(layout: ListLayout, children: Vec<Element>) -> Result<Self, LayoutError> {
        for (index, child) in children.iter().enumerate() {
            check_child(&layout, index, child)?;
        }

        let mut frame = Frame::new(Size::zero());
        frame.set_fill(Orientation::Horizontal, layout.width.is_fill());
        frame.set_fill(Orientation::Vertical, layout.height.is_fill());

        let mut list = Self {
            frame,
            layout,
            margin: 0,
            children: Children::new(children),
        };
        list.resolve();
        Ok(list)
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    /// Gap between consecutive children after resolution.
    pub fn resolved_margin(&self) -> i32 {
        self.margin
    }

    /// Appends a child and resolves the layout again.
    pub fn push(&mut self, child: Element) -> Result<(), LayoutError> {
        check_child(&self.layout, self.children.len(), &child)?;
        self.children.push(child);
        self.resolve();
        if let Some(origin) = self.frame.try_origin() {
            self.place_children(origin);
        }
        Ok(())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    fn resolve(&mut self) {
        let axis = self.layout.orientation;
        let padding = self.layout.padding;
        let count = self.children.len();
        let current = self.frame.size();

        let fixed_gaps = match self.layout.margin {
            Margin::Fixed(margin) => margin * count.saturating_sub(1) as u32,
            Margin::Auto => 0,
        };
        let main = match self.layout.main_length() {
            Length::Fixed(n) => n,
            Length::FitContents => self.children.total(|s| axis.main(s)) + fixed_gaps + 2 * padding,
            Length::FillParent => axis.main(current),
        };
        let cross = match self.layout.cross_length() {
            Length::Fixed(n) => n,
            Length::FitContents => self.children.largest(|s| axis.cross(s)) + 2 * padding,
            Length::FillParent => axis.cross(current),
        };
        self.frame.resize_keeping_origin(axis.size(main, cross));

        let stretched = cross.saturating_sub(2 * padding);
        for child in self.children.iter_mut() {
            if child.fills(axis.perpendicular()) {
                let size = child.size();
                child.set_size(axis.size(axis.main(size), stretched));
            }
        }

        self.margin = match self.layout.margin {
            Margin::Fixed(margin) => margin as i32,
            Margin::Auto => even_gap(main, self.children.total(|s| axis.main(s)), padding, count),
        };

        debug!(
            "Resolved {:?} list of {} children: {}x{}, margin {}",
            axis,
            count,
            self.frame.size().width,
            self.frame.size().height,
            self.margin
        );
    }

    fn place_children(&mut self, origin: Point) {
        let axis = self.layout.orientation;
        let padding = self.layout.padding as i32;
        let mut offset = padding;

        for child in self.children.iter_mut() {
            child.set_position(origin + axis.point(offset, padding));
            offset += axis.main(child.size()) as i32 + self.margin;
        }
    }
}

fn check_child(layout: &ListLayout, index: usize, child: &Element) -> Result<(), LayoutError> {
    if child.fills(layout.orientation) {
        return Err(LayoutError::FillAlongListAxis {
            orientation: layout.orientation,
            index,
        });
    }
    Ok(())
}

impl Component for ListContainer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_size(&mut self, size: Size) {
        self.frame.set_size(size);
        self.resolve();
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        self.place_children(origin);
    }

    forward_to_children!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_logging;
    use alloc::vec;

    fn spacers(widths: &[u32], height: u32) -> Vec<Element> {
        widths
            .iter()
            .map(|w| Element::spacer(Size::new(*w, height)))
            .collect()
    }

    #[test]
    fn horizontal_fit_contents_width() {
        init_logging();
        let list = ListContainer::new(
            ListLayout::horizontal()
                .with_margin(Margin::Fixed(5))
                .with_padding(10),
            spacers(&[40, 60, 20], 8),
        )
        .unwrap();

        // 120 of children, two 5px gaps and 10px padding on each side.
        assert_eq!(list.size(), Size::new(150, 28));
    }

    #[test]
    fn children_are_placed_along_the_axis() {
        let mut list = ListContainer::new(
            ListLayout::vertical()
                .with_margin(Margin::Fixed(3))
                .with_padding(2),
            spacers(&[10, 20], 5),
        )
        .unwrap();
        list.set_position(Point::new(100, 100));

        assert_eq!(list.children()[0].frame().origin(), Point::new(102, 102));
        assert_eq!(list.children()[1].frame().origin(), Point::new(102, 110));
        assert_eq!(list.size(), Size::new(24, 17));
    }

    #[test]
    fn fill_along_axis_is_rejected() {
        let result = ListContainer::new(
            ListLayout::horizontal(),
            vec![
                Element::spacer(Size::new(10, 10)),
                Element::spacer(Size::new(10, 10)).filling(Orientation::Horizontal),
            ],
        );
        assert!(matches!(
            result,
            Err(LayoutError::FillAlongListAxis {
                orientation: Orientation::Horizontal,
                index: 1
            })
        ));

        let mut list = ListContainer::new(ListLayout::vertical(), Vec::new()).unwrap();
        let pushed = list.push(Element::spacer(Size::new(1, 1)).filling(Orientation::Vertical));
        assert!(pushed.is_err());
        assert!(list.children().is_empty());
    }

    #[test]
    fn cross_axis_fill_is_stretched_inside_padding() {
        let list = ListContainer::new(
            ListLayout::vertical()
                .with_width(Length::Fixed(100))
                .with_padding(6),
            vec![
                Element::spacer(Size::new(10, 10)).filling(Orientation::Horizontal),
                Element::spacer(Size::new(30, 10)),
            ],
        )
        .unwrap();

        assert_eq!(list.children()[0].size(), Size::new(88, 10));
        assert_eq!(list.children()[1].size(), Size::new(30, 10));
    }

    #[test]
    fn auto_margin_spreads_leftover_space() {
        let mut list = ListContainer::new(
            ListLayout::horizontal()
                .with_width(Length::Fixed(100))
                .with_margin(Margin::Auto)
                .with_padding(5),
            spacers(&[10, 10, 10], 10),
        )
        .unwrap();
        assert_eq!(list.resolved_margin(), 30);

        list.set_position(Point::zero());
        let xs: Vec<i32> = list.children().iter().map(|c| c.frame().origin().x).collect();
        assert_eq!(xs, [5, 45, 85]);

        let single = ListContainer::new(
            ListLayout::horizontal().with_margin(Margin::Auto),
            spacers(&[10], 10),
        )
        .unwrap();
        assert_eq!(single.resolved_margin(), 0);
    }

    #[test]
    fn nested_fill_parent_list_is_resized_by_parent() {
        let inner = ListContainer::new(
            ListLayout::horizontal()
                .with_width(Length::FillParent)
                .with_margin(Margin::Auto),
            spacers(&[10, 10], 10),
        )
        .unwrap();
        assert!(inner.fills(Orientation::Horizontal));

        let mut outer = ListContainer::new(
            ListLayout::vertical()
                .with_width(Length::Fixed(60))
                .with_padding(5),
            vec![inner.into()],
        )
        .unwrap();
        outer.set_position(Point::zero());

        let inner = outer.children()[0].as_list().unwrap();
        assert_eq!(inner.size(), Size::new(50, 10));
        assert_eq!(inner.resolved_margin(), 30);
        assert_eq!(inner.children()[1].frame().origin(), Point::new(45, 5));
    }
}
