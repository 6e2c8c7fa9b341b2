//! Container placing children at fixed offsets

use alloc::vec::Vec;
use embedded_graphics::prelude::*;

use super::children::{Children, forward_to_children};
use crate::ui::core::Component;
use crate::ui::elements::Element;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Places each child at `origin + offset`. The size is caller-supplied.
pub struct AbsolutePosContainer {
    frame: Frame,
    offsets: Vec<Point>,
    children: Children,
}

impl AbsolutePosContainer {
    pub fn new(size: Size, children: Vec<(Point, Element)>) -> Self {
        let (offsets, elements) = children.into_iter().unzip();
        Self {
            frame: Frame::new(size),
            offsets,
            children: Children::new(elements),
        }
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    /// Adds a child, placing it right away when the container is placed.
    pub fn push(&mut self, offset: Point, mut child: Element) {
        if let Some(origin) = self.frame.try_origin() {
            child.set_position(origin + offset);
        }
        self.offsets.push(offset);
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

impl Component for AbsolutePosContainer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        for (offset, child) in self.offsets.iter().zip(self.children.iter_mut()) {
            child.set_position(origin + *offset);
        }
    }

    forward_to_children!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::primary_button;
    use crate::ui::components::ButtonBehavior;
    use crate::ui::core::KeyCode;
    use crate::ui::styling::StyleState;
    use alloc::vec;

    #[test]
    fn children_follow_offsets() {
        let mut container = AbsolutePosContainer::new(
            Size::new(100, 100),
            vec![
                (Point::new(5, 5), Element::spacer(Size::new(10, 10))),
                (Point::new(50, 20), Element::spacer(Size::new(10, 10))),
            ],
        );
        container.set_position(Point::new(100, 200));

        assert_eq!(container.children()[0].frame().origin(), Point::new(105, 205));
        assert_eq!(container.children()[1].frame().origin(), Point::new(150, 220));

        container.push(Point::new(1, 1), Element::spacer(Size::new(1, 1)));
        assert_eq!(container.children()[2].frame().origin(), Point::new(101, 201));
    }

    #[test]
    fn overlapping_siblings_both_receive_press() {
        let button = || {
            Element::from(primary_button(Size::new(20, 20), ButtonBehavior::single_click()))
        };
        let mut container = AbsolutePosContainer::new(
            Size::new(100, 100),
            vec![(Point::new(0, 0), button()), (Point::new(10, 10), button())],
        );
        container.set_position(Point::zero());

        container.handle_pointer_down(Point::new(15, 15));
        assert!(container.children().iter().all(|c| c.style_state() == StyleState::Active));

        container.handle_pointer_down(Point::new(200, 200));
        container.update(1000);
        assert!(container.children().iter().all(|c| c.style_state() == StyleState::Normal));
    }

    #[test]
    fn leaving_the_container_blurs_children() {
        let mut container = AbsolutePosContainer::new(
            Size::new(50, 50),
            vec![(
                Point::zero(),
                primary_button(Size::new(50, 50), ButtonBehavior::single_click()).into(),
            )],
        );
        container.set_position(Point::zero());

        container.handle_pointer_move(Point::new(10, 10));
        assert_eq!(container.children()[0].style_state(), StyleState::Hovered);

        container.blur();
        assert_eq!(container.children()[0].style_state(), StyleState::Normal);
    }

    #[test]
    fn hidden_container_still_passes_key_release() {
        let button = primary_button(Size::new(20, 20), ButtonBehavior::hold_to_repeat(400, 30))
            .with_hotkey(KeyCode::from('a'));
        let mut container =
            AbsolutePosContainer::new(Size::new(50, 50), vec![(Point::zero(), button.into())]);
        container.set_position(Point::zero());

        container.handle_key_down(KeyCode::from('a'));
        container.set_visible(false);
        container.handle_key_up(KeyCode::from('a'));
        container.update(1000);

        let button = container.children()[0].as_button().unwrap();
        assert!(matches!(button.behavior(), ButtonBehavior::HoldToRepeat(h) if !h.is_held()));
        assert_eq!(button.style_state(), StyleState::Normal);
    }
}
