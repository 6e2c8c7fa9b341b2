//! Concrete UI element enum.
//!
//! Layout containers own heterogeneous children *without* trait objects.
//!
//! In embedded-graphics, `DrawTarget` is generic, which makes [`Component`]
//! **not object-safe**. This enum is the pragmatic alternative: one variant
//! per widget kind, with every [`Component`] method forwarded to the wrapped
//! widget so container overrides (child forwarding, scrolling) still apply.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::{
    Button, Checkbox, Counter, FormattedText, GridLines, ImageView, ProgressBar, StaticText,
    TextArea, TextField,
};
use crate::ui::core::{Component, KeyCode};
use crate::ui::frame::Frame;
use crate::ui::layouts::{
    AbsolutePosContainer, EvenSpacingContainer, GridContainer, ListContainer, Orientation,
    ScrollContainer,
};
use crate::ui::styling::{StyleSet, StyleState};

/// A layout-only component that draws nothing but its style.
#[derive(Debug, Clone, Default)]
pub struct Spacer {
    frame: Frame,
}

impl Spacer {
    pub fn new(size: Size) -> Self {
        Self {
            frame: Frame::new(size),
        }
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }
}

impl Component for Spacer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

/// A concrete, layout-friendly UI element.
pub enum Element {
    Text(StaticText),
    Formatted(FormattedText),
    TextArea(TextArea),
    TextField(TextField),
    Button(Button),
    Checkbox(Checkbox),
    Counter(Counter),
    Image(ImageView),
    Progress(ProgressBar),
    GridLines(GridLines),
    Spacer(Spacer),
    Absolute(AbsolutePosContainer),
    List(ListContainer),
    EvenSpacing(EvenSpacingContainer),
    Grid(GridContainer),
    Scroll(ScrollContainer),
}

macro_rules! forward {
    ($element:expr, $widget:ident => $body:expr) => {
        match $element {
            Element::Text($widget) => $body,
            Element::Formatted($widget) => $body,
            Element::TextArea($widget) => $body,
            Element::TextField($widget) => $body,
            Element::Button($widget) => $body,
            Element::Checkbox($widget) => $body,
            Element::Counter($widget) => $body,
            Element::Image($widget) => $body,
            Element::Progress($widget) => $body,
            Element::GridLines($widget) => $body,
            Element::Spacer($widget) => $body,
            Element::Absolute($widget) => $body,
            Element::List($widget) => $body,
            Element::EvenSpacing($widget) => $body,
            Element::Grid($widget) => $body,
            Element::Scroll($widget) => $body,
        }
    };
}

macro_rules! element_kinds {
    ($($variant:ident($widget:ty), $as_ref:ident, $as_mut:ident;)*) => {
        $(
            impl From<$widget> for Element {
                fn from(widget: $widget) -> Self {
                    Element::$variant(widget)
                }
            }
        )*

        impl Element {
            $(
                pub fn $as_ref(&self) -> Option<&$widget> {
                    match self {
                        Element::$variant(widget) => Some(widget),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $widget> {
                    match self {
                        Element::$variant(widget) => Some(widget),
                        _ => None,
                    }
                }
            )*
        }
    };
}

element_kinds! {
    Text(StaticText), as_text, as_text_mut;
    Formatted(FormattedText), as_formatted, as_formatted_mut;
    TextArea(TextArea), as_text_area, as_text_area_mut;
    TextField(TextField), as_text_field, as_text_field_mut;
    Button(Button), as_button, as_button_mut;
    Checkbox(Checkbox), as_checkbox, as_checkbox_mut;
    Counter(Counter), as_counter, as_counter_mut;
    Image(ImageView), as_image, as_image_mut;
    Progress(ProgressBar), as_progress, as_progress_mut;
    GridLines(GridLines), as_grid_lines, as_grid_lines_mut;
    Spacer(Spacer), as_spacer, as_spacer_mut;
    Absolute(AbsolutePosContainer), as_absolute, as_absolute_mut;
    List(ListContainer), as_list, as_list_mut;
    EvenSpacing(EvenSpacingContainer), as_even_spacing, as_even_spacing_mut;
    Grid(GridContainer), as_grid, as_grid_mut;
    Scroll(ScrollContainer), as_scroll, as_scroll_mut;
}

impl Element {
    /// Convenience constructor: spacer.
    pub fn spacer(size: Size) -> Self {
        Self::Spacer(Spacer::new(size))
    }

    /// Asks the parent list to stretch this element along `orientation`.
    pub fn filling(mut self, orientation: Orientation) -> Self {
        self.frame_mut().set_fill(orientation, true);
        self
    }
}

impl Component for Element {
    fn frame(&self) -> &Frame {
        forward!(self, w => w.frame())
    }

    fn frame_mut(&mut self) -> &mut Frame {
        forward!(self, w => w.frame_mut())
    }

    fn size(&self) -> Size {
        forward!(self, w => w.size())
    }

    fn set_size(&mut self, size: Size) {
        forward!(self, w => w.set_size(size))
    }

    fn fills(&self, orientation: Orientation) -> bool {
        forward!(self, w => w.fills(orientation))
    }

    fn set_position(&mut self, origin: Point) {
        forward!(self, w => w.set_position(origin))
    }

    fn is_visible(&self) -> bool {
        forward!(self, w => w.is_visible())
    }

    fn set_visible(&mut self, visible: bool) {
        forward!(self, w => w.set_visible(visible))
    }

    fn style_state(&self) -> StyleState {
        forward!(self, w => w.style_state())
    }

    fn handle_pointer_down(&mut self, pos: Point) {
        forward!(self, w => w.handle_pointer_down(pos))
    }

    fn handle_pointer_up(&mut self) {
        forward!(self, w => w.handle_pointer_up())
    }

    fn handle_pointer_move(&mut self, pos: Point) {
        forward!(self, w => w.handle_pointer_move(pos))
    }

    fn track_hover(&mut self, pos: Point) {
        forward!(self, w => w.track_hover(pos))
    }

    fn blur(&mut self) {
        forward!(self, w => w.blur())
    }

    fn handle_key_down(&mut self, key: KeyCode) {
        forward!(self, w => w.handle_key_down(key))
    }

    fn handle_key_up(&mut self, key: KeyCode) {
        forward!(self, w => w.handle_key_up(key))
    }

    fn update(&mut self, dt_ms: u32) {
        forward!(self, w => w.update(dt_ms))
    }

    fn on_click(&mut self, pos: Point) {
        forward!(self, w => w.on_click(pos))
    }

    fn on_release(&mut self) {
        forward!(self, w => w.on_release())
    }

    fn on_hover(&mut self, pos: Point) {
        forward!(self, w => w.on_hover(pos))
    }

    fn on_blur(&mut self) {
        forward!(self, w => w.on_blur())
    }

    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        forward!(self, w => w.draw(display))
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        forward!(self, w => w.draw_contents(display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::TextSize;

    #[test]
    fn forwards_to_wrapped_widget() {
        let mut element = Element::from(StaticText::new("AB", TextSize::Medium));
        assert_eq!(element.size(), Size::new(12, 10));

        element.set_position(Point::new(2, 3));
        assert_eq!(element.as_text().map(|t| t.frame().origin()), Some(Point::new(2, 3)));
        assert!(element.as_button().is_none());
    }

    #[test]
    fn filling_sets_fill_request() {
        let element = Element::spacer(Size::new(4, 4)).filling(Orientation::Horizontal);
        assert!(element.fills(Orientation::Horizontal));
        assert!(!element.fills(Orientation::Vertical));
    }
}
