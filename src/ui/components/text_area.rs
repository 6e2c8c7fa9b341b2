//! Multi-line text box with character wrapping and an optional blinking caret

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::text::TextSize;
use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::{StyleSet, WHITE};

/// Glyph appended to the last line while the caret is shown.
pub const CARET_GLYPH: char = '_';

/// Caret that flips between shown and hidden every `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkingCaret {
    interval_ms: u32,
    elapsed: u32,
    visible: bool,
}

impl BlinkingCaret {
    /// Starts visible.
    ///
    /// # Panics
    ///
    /// If `interval_ms` is zero.
    pub fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0, "caret interval must be non-zero");
        Self {
            interval_ms,
            elapsed: 0,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advances the blink timer, toggling once per elapsed interval.
    /// Returns whether the caret visibility changed.
    pub fn update(&mut self, dt_ms: u32) -> bool {
        self.elapsed += dt_ms;
        let toggles = self.elapsed / self.interval_ms;
        self.elapsed %= self.interval_ms;

        let changed = toggles % 2 == 1;
        if changed {
            self.visible = !self.visible;
        }
        changed
    }
}

/// Splits `text` into display lines no wider than `max_width`.
///
/// Newlines always end a line. Otherwise a line ends right before the first
/// character that would make it overflow, and that character starts the next
/// line. A single character wider than `max_width` still gets its own line.
/// The tail is always emitted, so the result is never empty.
pub fn wrap_lines(text: &str, max_width: u32, text_size: TextSize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            lines.push(String::from(&text[line_start..i]));
            line_start = i + c.len_utf8();
            continue;
        }

        let end = i + c.len_utf8();
        if i > line_start && text_size.measure(&text[line_start..end]).width > max_width {
            lines.push(String::from(&text[line_start..i]));
            line_start = i;
        }
    }

    lines.push(String::from(&text[line_start..]));
    lines
}

/// Fixed-size text box that wraps its contents into lines
///
/// Lines are recomputed wholesale whenever the text, the box size or the
/// caret visibility changes, and drawn top to bottom from `origin + (p, p)`.
///
/// # Examples
/// ```ignore
/// let mut console = TextArea::new(Size::new(200, 80), 4, TextSize::Medium)
///     .with_caret(BlinkingCaret::new(800));
/// console.append("hello");
/// ```
#[derive(Debug, Clone)]
pub struct TextArea {
    frame: Frame,
    text: String,
    lines: Vec<String>,
    text_size: TextSize,
    color: Rgb565,
    padding: u32,
    caret: Option<BlinkingCaret>,
}

impl TextArea {
    pub fn new(size: Size, padding: u32, text_size: TextSize) -> Self {
        let mut area = Self {
            frame: Frame::new(size),
            text: String::new(),
            lines: Vec::new(),
            text_size,
            color: WHITE,
            padding,
            caret: None,
        };
        area.rewrap();
        area
    }

    pub fn with_caret(mut self, caret: BlinkingCaret) -> Self {
        self.caret = Some(caret);
        self.rewrap();
        self
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display lines, caret glyph included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn caret(&self) -> Option<&BlinkingCaret> {
        self.caret.as_ref()
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
        self.rewrap();
    }

    /// Drops the last character, if any.
    pub fn backspace(&mut self) {
        if self.text.pop().is_some() {
            self.rewrap();
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.rewrap();
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    fn rewrap(&mut self) {
        let max_width = self.frame.size().width.saturating_sub(2 * self.padding);
        self.lines = wrap_lines(&self.text, max_width, self.text_size);

        if self.caret.is_some_and(|caret| caret.is_visible()) {
            if let Some(last) = self.lines.last_mut() {
                last.push(CARET_GLYPH);
            }
        }
    }
}

impl Component for TextArea {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_size(&mut self, size: Size) {
        self.frame.set_size(size);
        self.rewrap();
    }

    fn update(&mut self, dt_ms: u32) {
        let toggled = self
            .caret
            .as_mut()
            .is_some_and(|caret| caret.update(dt_ms));
        if toggled {
            self.rewrap();
        }
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let padding = self.padding as i32;
        let mut position = self.frame.origin() + Point::new(padding, padding);

        for line in &self.lines {
            self.text_size
                .draw_line(line, position, self.color, display)?;
            position.y += self.text_size.measure(line).height as i32;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::canvas;

    const PADDING: u32 = 3;

    fn area_fitting(text: &str) -> TextArea {
        let width = TextSize::Medium.measure(text).width + 2 * PADDING;
        TextArea::new(Size::new(width, 60), PADDING, TextSize::Medium)
    }

    #[test]
    fn wraps_at_first_overflowing_character() {
        let mut area = area_fitting("ABCDE");
        area.append("ABCDEF");
        assert_eq!(area.lines(), ["ABCDE", "F"]);
    }

    #[test]
    fn newline_ends_line_and_tail_is_kept() {
        let lines = wrap_lines("AB\n\nC\n", 100, TextSize::Medium);
        assert_eq!(lines, ["AB", "", "C", ""]);
        assert_eq!(wrap_lines("", 100, TextSize::Medium), [""]);
    }

    #[test]
    fn oversized_character_gets_its_own_line() {
        let lines = wrap_lines("AB", 2, TextSize::Medium);
        assert_eq!(lines, ["A", "B"]);
    }

    #[test]
    fn caret_goes_on_last_line_and_blinks() {
        let mut area = area_fitting("ABCDE").with_caret(BlinkingCaret::new(800));
        area.set_text("ABCDEF");
        assert_eq!(area.lines(), ["ABCDE", "F_"]);

        area.update(799);
        assert_eq!(area.lines(), ["ABCDE", "F_"]);
        area.update(1);
        assert_eq!(area.lines(), ["ABCDE", "F"]);
        area.update(800);
        assert_eq!(area.lines(), ["ABCDE", "F_"]);
    }

    #[test]
    fn caret_update_reports_net_change() {
        let mut caret = BlinkingCaret::new(100);
        assert!(!caret.update(200));
        assert!(caret.is_visible());
        assert!(caret.update(150));
        assert!(!caret.is_visible());
        assert!(caret.update(50));
        assert!(caret.is_visible());
    }

    #[test]
    fn backspace_and_resize_rewrap() {
        let mut area = area_fitting("ABCDE");
        area.set_text("ABCDEF");
        area.backspace();
        assert_eq!(area.lines(), ["ABCDE"]);
        assert_eq!(area.text(), "ABCDE");

        area.set_size(Size::new(2 * PADDING + 12, 60));
        assert_eq!(area.lines(), ["AB", "CD", "E"]);

        area.set_text("");
        area.backspace();
        assert_eq!(area.lines(), [""]);
    }

    #[test]
    fn lines_are_drawn_inside_padding() {
        let mut area = area_fitting("AB").with_color(Rgb565::RED);
        area.set_text("ABAB");
        area.set_position(Point::new(10, 10));

        let mut display = canvas(60, 60);
        area.draw(&mut display).unwrap();

        let drawn = display.dirty_area().unwrap();
        assert!(drawn.top_left.x >= 13 && drawn.top_left.y >= 13);
        // Second line starts one font height lower.
        assert!(drawn.bottom_right().unwrap().y >= 23);
    }
}
