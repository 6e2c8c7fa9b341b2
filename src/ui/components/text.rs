//! Single-line text labels

use alloc::string::String;
use core::fmt::{Display, Write};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::WHITE;

/// Text size variants
///
/// Provides three preset text sizes with corresponding embedded-graphics fonts:
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }

    pub fn style(&self, color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(self.font(), color)
    }

    /// Rendered size of `text` on one line.
    pub fn measure(&self, text: &str) -> Size {
        self.style(WHITE)
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
    }

    /// Draws `text` with its top-left corner at `position`.
    pub fn draw_line<D>(
        &self,
        text: &str,
        position: Point,
        color: Rgb565,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Text::with_baseline(text, position, self.style(color), Baseline::Top).draw(display)?;
        Ok(())
    }
}

/// Text label sized to its contents
///
/// Changing the text or font re-measures the label and keeps its origin.
///
/// # Examples
/// ```ignore
/// let mut label = StaticText::new("Temperature", TextSize::Medium);
/// label.set_position(Point::new(20, 60));
/// label.set_text("Humidity");
/// ```
#[derive(Debug, Clone)]
pub struct StaticText {
    frame: Frame,
    text: String,
    text_size: TextSize,
    color: Rgb565,
}

impl StaticText {
    pub fn new(text: &str, text_size: TextSize) -> Self {
        Self {
            frame: Frame::new(text_size.measure(text)),
            text: String::from(text),
            text_size,
            color: WHITE,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.remeasure();
        }
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    pub fn set_text_size(&mut self, text_size: TextSize) {
        self.text_size = text_size;
        self.remeasure();
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    fn remeasure(&mut self) {
        let size = self.text_size.measure(&self.text);
        self.frame.resize_keeping_origin(size);
    }
}

impl Component for StaticText {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text_size
            .draw_line(&self.text, self.frame.origin(), self.color, display)
    }
}

/// Maximum rendered length of a value substituted into a [`FormattedText`].
pub const VALUE_CAPACITY: usize = 32;

/// Label rendered from a template with one `{}` placeholder
///
/// # Examples
/// ```ignore
/// let mut count = FormattedText::new("Count: {}", TextSize::Medium);
/// count.format(42);
/// assert_eq!(count.text(), "Count: 42");
/// ```
#[derive(Debug, Clone)]
pub struct FormattedText {
    label: StaticText,
    template: String,
}

impl FormattedText {
    /// Creates the label showing the template with an empty value.
    pub fn new(template: &str, text_size: TextSize) -> Self {
        let mut formatted = Self {
            label: StaticText::new("", text_size),
            template: String::from(template),
        };
        formatted.format("");
        formatted
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.label.set_color(color);
        self
    }

    /// Substitutes `value` for the placeholder and re-measures.
    ///
    /// Values longer than [`VALUE_CAPACITY`] bytes are cut short.
    pub fn format<T: Display>(&mut self, value: T) {
        let mut rendered = heapless::String::<VALUE_CAPACITY>::new();
        write!(rendered, "{}", value).ok();

        let text = self.template.replacen("{}", &rendered, 1);
        self.label.set_text(&text);
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.label.set_color(color);
    }
}

impl Component for FormattedText {
    fn frame(&self) -> &Frame {
        self.label.frame()
    }

    fn frame_mut(&mut self) -> &mut Frame {
        self.label.frame_mut()
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.label.draw_contents(display)
    }
}
