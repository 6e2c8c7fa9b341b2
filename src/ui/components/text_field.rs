//! Single-line editable field

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::text::{StaticText, TextSize};
use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Fixed-size box holding at most `max_length` characters on one line.
///
/// The text is drawn at `origin + (p, p)` and is never wrapped.
#[derive(Debug, Clone)]
pub struct TextField {
    frame: Frame,
    text: StaticText,
    padding: u32,
    max_length: usize,
}

impl TextField {
    pub fn new(size: Size, padding: u32, max_length: usize, text_size: TextSize) -> Self {
        Self {
            frame: Frame::new(size),
            text: StaticText::new("", text_size),
            padding,
            max_length,
        }
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.text.set_color(color);
        self
    }

    pub fn text(&self) -> &str {
        self.text.text()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Appends `text`, dropping whatever goes past `max_length` characters.
    pub fn append(&mut self, text: &str) {
        let mut contents = alloc::string::String::from(self.text.text());
        let room = self.max_length.saturating_sub(contents.chars().count());
        contents.extend(text.chars().take(room));
        self.text.set_text(&contents);
    }

    pub fn backspace(&mut self) {
        let mut contents = alloc::string::String::from(self.text.text());
        if contents.pop().is_some() {
            self.text.set_text(&contents);
        }
    }

    pub fn clear(&mut self) {
        self.text.set_text("");
    }
}

impl Component for TextField {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        let padding = self.padding as i32;
        self.text.set_position(origin + Point::new(padding, padding));
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text.draw(display)
    }
}
