//! Push button with a centered label and pluggable press semantics

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use log::debug;

use super::behavior::{ButtonBehavior, ButtonEvent};
use super::center_in;
use super::text::{StaticText, TextSize};
use crate::ui::core::{Component, KeyCode};
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Most colors a button can cycle through.
pub const MAX_CYCLE_COLORS: usize = 8;

/// Body colors a button steps through, one per fire.
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    colors: heapless::Vec<Rgb565, MAX_CYCLE_COLORS>,
    index: usize,
}

impl ColorCycle {
    /// Keeps the first [`MAX_CYCLE_COLORS`] colors.
    pub fn new(colors: &[Rgb565]) -> Self {
        let mut cycle = Self::default();
        for color in colors.iter().take(MAX_CYCLE_COLORS) {
            cycle.colors.push(*color).ok();
        }
        cycle
    }

    pub fn current(&self) -> Option<Rgb565> {
        self.colors.get(self.index).copied()
    }

    pub fn advance(&mut self) {
        if !self.colors.is_empty() {
            self.index = (self.index + 1) % self.colors.len();
        }
    }
}

/// Button component with label, hotkey and callback
///
/// Pointer presses inside the button and presses of its hotkey go through
/// the button's [`ButtonBehavior`]. On every fire the button turns active,
/// advances its color cycle and invokes the callback. On release it goes
/// back to hovered or normal.
///
/// # Examples
/// ```ignore
/// let mut play = Button::new(
///     Size::new(80, 24),
///     StaticText::new("Play", TextSize::Medium),
///     ButtonBehavior::single_click(),
/// )
/// .with_styles(ButtonVariant::Primary.styles(&palette))
/// .with_hotkey(KeyCode::from('p'))
/// .with_callback(|| debug!("play"));
/// ```
pub struct Button {
    frame: Frame,
    label: StaticText,
    hotkey: Option<KeyCode>,
    callback: Option<Box<dyn FnMut()>>,
    behavior: ButtonBehavior,
    colors: Option<ColorCycle>,
}

impl Button {
    pub fn new(size: Size, label: StaticText, behavior: ButtonBehavior) -> Self {
        Self {
            frame: Frame::new(size),
            label,
            hotkey: None,
            callback: None,
            behavior,
            colors: None,
        }
    }

    /// Single-click button with a medium label.
    pub fn labeled(size: Size, text: &str) -> Self {
        Self::new(
            size,
            StaticText::new(text, TextSize::Medium),
            ButtonBehavior::single_click(),
        )
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn with_hotkey(mut self, key: KeyCode) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Paints the body with `colors`, stepping to the next one on every fire.
    pub fn with_color_cycle(mut self, colors: &[Rgb565]) -> Self {
        self.colors = Some(ColorCycle::new(colors));
        self
    }

    pub fn label(&self) -> &StaticText {
        &self.label
    }

    /// Replaces the label text and centers it again.
    pub fn set_label(&mut self, text: &str) {
        self.label.set_text(text);
        self.center_label();
    }

    pub fn set_label_color(&mut self, color: Rgb565) {
        self.label.set_color(color);
    }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn set_hotkey(&mut self, key: Option<KeyCode>) {
        self.hotkey = key;
    }

    pub fn behavior(&self) -> &ButtonBehavior {
        &self.behavior
    }

    /// Current body color of the color cycle, if the button has one.
    pub fn cycle_color(&self) -> Option<Rgb565> {
        self.colors.as_ref().and_then(ColorCycle::current)
    }

    fn center_label(&mut self) {
        let Some(origin) = self.frame.try_origin() else {
            return;
        };
        let position = center_in(origin, self.frame.size(), self.label.size());
        self.label.set_position(position);
    }

    fn react(&mut self, event: Option<ButtonEvent>) {
        let Some(event) = event else {
            return;
        };

        self.frame.apply(event);
        if event == ButtonEvent::Fire {
            debug!("Button '{}' fired", self.label.text());
            if let Some(colors) = &mut self.colors {
                colors.advance();
            }
            if let Some(callback) = &mut self.callback {
                callback();
            }
        }
    }

    fn is_hotkey(&self, key: KeyCode) -> bool {
        self.hotkey == Some(key)
    }
}

impl Component for Button {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_position(&mut self, origin: Point) {
        self.frame.place(origin);
        self.center_label();
    }

    fn on_click(&mut self, _pos: Point) {
        let event = self.behavior.press();
        self.react(event);
    }

    fn on_release(&mut self) {
        let event = self.behavior.release();
        self.react(event);
    }

    fn handle_key_down(&mut self, key: KeyCode) {
        if self.is_hotkey(key) && self.is_visible() {
            let event = self.behavior.press();
            self.react(event);
        }
    }

    /// Releases reach a hidden button so a held hotkey cannot keep firing.
    fn handle_key_up(&mut self, key: KeyCode) {
        if self.is_hotkey(key) {
            let event = self.behavior.release();
            self.react(event);
        }
    }

    fn update(&mut self, dt_ms: u32) {
        let event = self.behavior.tick(dt_ms);
        self.react(event);
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(color) = self.cycle_color() {
            self.frame
                .bounds()
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)?;
        }
        self.label.draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{canvas, primary_button};
    use crate::ui::components::behavior::CLICK_COOLDOWN_MS;
    use crate::ui::styling::StyleState;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counting_button(behavior: ButtonBehavior) -> (Button, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let seen = fired.clone();
        let mut button = primary_button(Size::new(40, 20), behavior)
            .with_hotkey(KeyCode::from('a'))
            .with_callback(move || seen.set(seen.get() + 1));
        button.set_position(Point::new(10, 10));
        (button, fired)
    }

    #[test]
    fn label_is_centered() {
        let mut button = Button::labeled(Size::new(40, 20), "AB");
        button.set_position(Point::new(10, 10));
        assert_eq!(button.label().frame().origin(), Point::new(24, 15));

        button.set_label("ABCD");
        assert_eq!(button.label().frame().origin(), Point::new(18, 15));
    }

    #[test]
    fn single_click_fires_then_reverts_after_cooldown() {
        let (mut button, fired) = counting_button(ButtonBehavior::single_click());

        button.handle_pointer_move(Point::new(15, 15));
        button.handle_pointer_down(Point::new(15, 15));
        assert_eq!(fired.get(), 1);
        assert_eq!(button.style_state(), StyleState::Active);

        button.handle_pointer_up();
        button.update(CLICK_COOLDOWN_MS - 1);
        assert_eq!(button.style_state(), StyleState::Active);

        button.update(1);
        assert_eq!(button.style_state(), StyleState::Hovered);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn press_outside_does_nothing() {
        let (mut button, fired) = counting_button(ButtonBehavior::single_click());
        button.handle_pointer_down(Point::new(50, 30));
        button.handle_pointer_down(Point::new(9, 15));
        assert_eq!(fired.get(), 0);
        assert_eq!(button.style_state(), StyleState::Normal);
    }

    #[test]
    fn hidden_button_ignores_press_and_hotkey() {
        let (mut button, fired) = counting_button(ButtonBehavior::single_click());
        button.set_visible(false);
        button.handle_pointer_down(Point::new(15, 15));
        button.handle_key_down(KeyCode::from('a'));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn hotkey_hold_repeats() {
        let (mut button, fired) = counting_button(ButtonBehavior::hold_to_repeat(400, 30));

        button.handle_key_down(KeyCode::from('b'));
        assert_eq!(fired.get(), 0);

        button.handle_key_down(KeyCode::from('a'));
        button.update(1000);
        assert_eq!(fired.get(), 2);
        assert_eq!(button.style_state(), StyleState::Active);

        button.handle_key_up(KeyCode::from('a'));
        assert_eq!(button.style_state(), StyleState::Normal);
        button.update(1000);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn hotkey_release_reaches_hidden_button() {
        let (mut button, fired) = counting_button(ButtonBehavior::hold_to_repeat(400, 30));

        button.handle_key_down(KeyCode::from('a'));
        assert_eq!(fired.get(), 1);

        button.set_visible(false);
        button.handle_key_up(KeyCode::from('a'));
        for _ in 0..10 {
            button.update(100);
        }

        assert_eq!(fired.get(), 1);
        assert!(matches!(button.behavior(), ButtonBehavior::HoldToRepeat(h) if !h.is_held()));
    }

    #[test]
    fn color_cycle_advances_per_fire() {
        let mut button = Button::labeled(Size::new(20, 20), "")
            .with_color_cycle(&[Rgb565::RED, Rgb565::GREEN]);
        button.set_position(Point::zero());
        assert_eq!(button.cycle_color(), Some(Rgb565::RED));

        button.handle_pointer_down(Point::new(1, 1));
        assert_eq!(button.cycle_color(), Some(Rgb565::GREEN));
        button.handle_pointer_down(Point::new(1, 1));
        assert_eq!(button.cycle_color(), Some(Rgb565::RED));

        let mut display = canvas(20, 20);
        button.draw(&mut display).unwrap();
        assert_eq!(display.count_color(Rgb565::RED), 400);
    }
}
