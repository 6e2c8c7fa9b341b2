//! Labelled toggle

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::behavior::{ButtonEvent, SingleClick};
use super::center_in;
use super::text::{FormattedText, TextSize};
use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Toggle showing `"<label>  [x]"` when checked and `"<label>  [_]"` when not.
///
/// A click toggles the state, reformats and re-centers the label, invokes
/// the callback with the new state and keeps the active style for one
/// click cooldown.
pub struct Checkbox {
    frame: Frame,
    label: FormattedText,
    checked: bool,
    callback: Option<Box<dyn FnMut(bool)>>,
    click: SingleClick,
}

impl Checkbox {
    pub fn new(size: Size, label: &str, checked: bool) -> Self {
        let mut template = alloc::string::String::from(label);
        template.push_str("  [{}]");

        let mut checkbox = Self {
            frame: Frame::new(size),
            label: FormattedText::new(&template, TextSize::Medium),
            checked,
            callback: None,
            click: SingleClick::new(),
        };
        checkbox.refresh_label();
        checkbox
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(bool) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &FormattedText {
        &self.label
    }

    fn refresh_label(&mut self) {
        self.label.format(if self.checked { 'x' } else { '_' });
        if let Some(origin) = self.frame.try_origin() {
            let position = center_in(origin, self.frame.size(), self.label.size());
            self.label.set_position(position);
        }
    }
}

impl Component for Checkbox {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        self.refresh_label();
    }

    fn on_click(&mut self, _pos: Point) {
        self.checked = !self.checked;
        self.refresh_label();
        if let Some(callback) = &mut self.callback {
            callback(self.checked);
        }

        if let Some(event) = self.click.press() {
            self.frame.apply(event);
        }
    }

    fn update(&mut self, dt_ms: u32) {
        if let Some(event @ ButtonEvent::Release) = self.click.tick(dt_ms) {
            self.frame.apply(event);
        }
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.label.draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::behavior::CLICK_COOLDOWN_MS;
    use crate::ui::styling::{ButtonVariant, ColorPalette, StyleState};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn click_toggles_and_reports_state() {
        let last = Rc::new(Cell::new(None));
        let seen = last.clone();
        let mut checkbox = Checkbox::new(Size::new(120, 20), "Sound", false)
            .with_styles(ButtonVariant::Primary.styles(&ColorPalette::dark()))
            .with_callback(move |checked| seen.set(Some(checked)));
        checkbox.set_position(Point::new(0, 0));
        assert_eq!(checkbox.label().text(), "Sound  [_]");

        checkbox.handle_pointer_down(Point::new(5, 5));
        assert!(checkbox.is_checked());
        assert_eq!(checkbox.label().text(), "Sound  [x]");
        assert_eq!(last.get(), Some(true));
        assert_eq!(checkbox.style_state(), StyleState::Active);

        checkbox.update(CLICK_COOLDOWN_MS);
        assert_eq!(checkbox.style_state(), StyleState::Normal);

        checkbox.handle_pointer_down(Point::new(5, 5));
        assert_eq!(last.get(), Some(false));
    }

    #[test]
    fn label_is_centered() {
        let mut checkbox = Checkbox::new(Size::new(120, 20), "On", true);
        checkbox.set_position(Point::new(10, 0));
        // "On  [x]" is 7 glyphs of 6x10.
        assert_eq!(checkbox.label().frame().origin(), Point::new(49, 5));
    }
}
