//! Frame driver
//!
//! One frame drains the pending input events in arrival order, advances
//! timers once with the elapsed time, then draws the whole tree.
//!
//! ```ignore
//! let mut ui = Ui::new(root, Point::zero()).with_background(BLACK);
//! loop {
//!     let events = poll_input();
//!     ui.run_frame(events, elapsed_ms(), &mut display)?;
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::trace;

use crate::ui::core::{Component, InputEvent};
use crate::ui::elements::Element;

/// Owns the root of a widget tree and drives it frame by frame.
pub struct Ui {
    root: Element,
    background: Option<Rgb565>,
}

impl Ui {
    /// Places `root` at `origin`.
    pub fn new(mut root: Element, origin: Point) -> Self {
        root.set_position(origin);
        Self {
            root,
            background: None,
        }
    }

    /// Clears the display with `color` before every draw.
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background = Some(color);
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Routes one raw event to the root.
    pub fn dispatch(&mut self, event: InputEvent) {
        trace!("Dispatching {:?}", event);
        match event {
            InputEvent::PointerMoved(pos) => self.root.handle_pointer_move(pos),
            InputEvent::PointerDown(pos) => self.root.handle_pointer_down(pos),
            InputEvent::PointerUp => self.root.handle_pointer_up(),
            InputEvent::KeyDown(key) => self.root.handle_key_down(key),
            InputEvent::KeyUp(key) => self.root.handle_key_up(key),
        }
    }

    /// Advances every timer in the tree by `dt_ms`.
    pub fn update(&mut self, dt_ms: u32) {
        self.root.update(dt_ms);
    }

    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(color) = self.background {
            display.clear(color)?;
        }
        self.root.draw(display)
    }

    /// Runs one frame: dispatch `events`, update once, draw once.
    pub fn run_frame<I, D>(&mut self, events: I, dt_ms: u32, display: &mut D) -> Result<(), D::Error>
    where
        I: IntoIterator<Item = InputEvent>,
        D: DrawTarget<Color = Rgb565>,
    {
        for event in events {
            self.dispatch(event);
        }
        self.update(dt_ms);
        self.draw(display)
    }
}
