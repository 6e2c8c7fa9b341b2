//! Numeric counter display

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::center_in;
use super::text::FormattedText;
use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Box showing a signed count through a [`FormattedText`], centered.
#[derive(Debug, Clone)]
pub struct Counter {
    frame: Frame,
    text: FormattedText,
    count: i64,
}

impl Counter {
    /// Starts at zero.
    pub fn new(size: Size, text: FormattedText) -> Self {
        let mut counter = Self {
            frame: Frame::new(size),
            text,
            count: 0,
        };
        counter.refresh();
        counter
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn text(&self) -> &FormattedText {
        &self.text
    }

    pub fn increment(&mut self) {
        self.count += 1;
        self.refresh();
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.text.format(self.count);
        if let Some(origin) = self.frame.try_origin() {
            let position = center_in(origin, self.frame.size(), self.text.size());
            self.text.set_position(position);
        }
    }
}

impl Component for Counter {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        self.refresh();
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text.draw(display)
    }
}
