//! Core UI traits and types

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::error::NOT_POSITIONED;
use crate::ui::frame::Frame;
use crate::ui::layouts::Orientation;
use crate::ui::styling::StyleState;

/// Platform-neutral key identifier
///
/// Characters map to their Unicode scalar value; non-character keys can use
/// any code outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        KeyCode(c as u32)
    }
}

/// Raw input events, delivered in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to an absolute position
    PointerMoved(Point),
    /// Pointer pressed at an absolute position
    PointerDown(Point),
    /// Pointer released
    PointerUp,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Hover transition reported by [`Frame::track_pointer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Entered,
    Left,
}

/// Contract shared by every widget and container
///
/// Implementors only provide access to their [`Frame`]; everything else has
/// a default that widgets refine through the `on_*` hooks and
/// [`draw_contents`](Component::draw_contents). Containers override the
/// handlers to forward calls to their children in child order.
///
/// `draw` is generic over the target, so the trait is not object-safe.
/// Heterogeneous trees use [`Element`](crate::ui::Element) instead.
pub trait Component {
    fn frame(&self) -> &Frame;

    fn frame_mut(&mut self) -> &mut Frame;

    fn size(&self) -> Size {
        self.frame().size()
    }

    /// Resizes the component. The origin becomes unset until the next
    /// [`set_position`](Component::set_position).
    fn set_size(&mut self, size: Size) {
        self.frame_mut().set_size(size);
    }

    /// Whether the component asks its parent to stretch it along `orientation`.
    fn fills(&self, orientation: Orientation) -> bool {
        self.frame().fills(orientation)
    }

    /// Records the absolute origin. Components that own children or text
    /// place them before returning.
    fn set_position(&mut self, origin: Point) {
        self.frame_mut().place(origin);
    }

    fn is_visible(&self) -> bool {
        self.frame().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.frame_mut().set_visible(visible);
    }

    fn style_state(&self) -> StyleState {
        self.frame().style_state()
    }

    /// Pointer pressed at `pos`. Calls [`on_click`](Component::on_click) when
    /// the component is visible and `pos` is inside it.
    ///
    /// # Panics
    ///
    /// If the component was never positioned.
    fn handle_pointer_down(&mut self, pos: Point) {
        let hit = self.frame().hit(pos);
        if hit && self.is_visible() {
            self.on_click(pos);
        }
    }

    fn handle_pointer_up(&mut self) {
        self.on_release();
    }

    /// Pointer moved to `pos`.
    ///
    /// # Panics
    ///
    /// If the component was never positioned.
    fn handle_pointer_move(&mut self, pos: Point) {
        self.track_hover(pos);
    }

    /// Hover bookkeeping behind [`handle_pointer_move`](Component::handle_pointer_move).
    fn track_hover(&mut self, pos: Point) {
        match self.frame_mut().track_pointer(pos) {
            Some(Hover::Entered) => self.on_hover(pos),
            Some(Hover::Left) => self.on_blur(),
            None => {}
        }
    }

    /// Drops the hover state as if the pointer had left.
    fn blur(&mut self) {
        if self.frame_mut().clear_hover() {
            self.on_blur();
        }
    }

    fn handle_key_down(&mut self, _key: KeyCode) {}

    fn handle_key_up(&mut self, _key: KeyCode) {}

    /// Advances timers by `dt_ms` milliseconds.
    fn update(&mut self, _dt_ms: u32) {}

    fn on_click(&mut self, _pos: Point) {}

    fn on_release(&mut self) {}

    fn on_hover(&mut self, _pos: Point) {}

    fn on_blur(&mut self) {}

    /// Draws background, contents and outline, in that order.
    ///
    /// # Panics
    ///
    /// If the component was never positioned.
    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let frame = self.frame();
        assert!(frame.is_positioned(), "{}", NOT_POSITIONED);
        if !frame.is_visible() {
            return Ok(());
        }

        frame.draw_background(display)?;
        self.draw_contents(display)?;
        frame.draw_outline(display)
    }

    /// Draws what sits between the background and the outline.
    fn draw_contents<D>(&self, _display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{canvas, solid_image};
    use crate::ui::components::Button;
    use crate::ui::elements::{Element, Spacer};
    use crate::ui::styling::{Style, StyleSet};
    use embedded_graphics::primitives::Rectangle;

    fn unplaced() -> Element {
        Element::spacer(Size::new(10, 10))
    }

    #[test]
    #[should_panic(expected = "set_position")]
    fn pointer_down_before_placement_panics() {
        unplaced().handle_pointer_down(Point::zero());
    }

    #[test]
    #[should_panic(expected = "set_position")]
    fn pointer_move_before_placement_panics() {
        unplaced().handle_pointer_move(Point::zero());
    }

    #[test]
    #[should_panic(expected = "set_position")]
    fn hidden_draw_before_placement_still_panics() {
        let mut element = unplaced();
        element.set_visible(false);
        let _ = element.draw(&mut canvas(10, 10));
    }

    #[test]
    fn hidden_components_ignore_presses_but_track_hover() {
        let mut element = unplaced();
        element.set_position(Point::zero());
        element.set_visible(false);

        element.handle_pointer_down(Point::new(1, 1));
        element.handle_pointer_move(Point::new(1, 1));
        assert!(element.frame().is_hovered());

        element.blur();
        assert!(!element.frame().is_hovered());
    }

    #[test]
    fn fill_image_is_clipped_under_outline() {
        let style = Style::new()
            .with_fill_image(solid_image(8, 8))
            .with_outline(Rgb565::RED, 1);
        let spacer = Spacer::new(Size::new(4, 4)).with_styles(StyleSet::uniform(style));
        let mut element = Element::from(spacer);
        element.set_position(Point::new(2, 2));

        let mut display = canvas(10, 10);
        element.draw(&mut display).unwrap();

        assert_eq!(display.count_color(Rgb565::WHITE), 4);
        assert_eq!(display.count_color(Rgb565::RED), 12);
        assert_eq!(
            display.dirty_area(),
            Some(Rectangle::new(Point::new(2, 2), Size::new(4, 4)))
        );
    }

    #[test]
    fn outline_is_painted_over_contents() {
        let style = Style::new().with_outline(Rgb565::RED, 1);
        let mut button = Button::labeled(Size::new(20, 20), "")
            .with_styles(StyleSet::uniform(style))
            .with_color_cycle(&[Rgb565::GREEN]);
        button.set_position(Point::zero());

        let mut display = canvas(20, 20);
        button.draw(&mut display).unwrap();

        assert_eq!(display.count_color(Rgb565::RED), 76);
        assert_eq!(display.count_color(Rgb565::GREEN), 324);
    }

    #[test]
    fn key_codes_from_chars() {
        assert_eq!(KeyCode::from('a'), KeyCode(97));
    }
}
