//! Leaf widgets and the behaviors that drive them

pub mod behavior;
pub mod button;
pub mod checkbox;
pub mod counter;
pub mod grid_lines;
pub mod image;
pub mod progress;
pub mod text;
pub mod text_area;
pub mod text_field;

pub use behavior::{ButtonBehavior, ButtonEvent, CLICK_COOLDOWN_MS, HoldToRepeat, SingleClick};
pub use button::{Button, ColorCycle};
pub use checkbox::Checkbox;
pub use counter::Counter;
pub use grid_lines::GridLines;
pub use image::ImageView;
pub use progress::ProgressBar;
pub use text::{FormattedText, StaticText, TextSize};
pub use text_area::{BlinkingCaret, TextArea, wrap_lines};
pub use text_field::TextField;

use embedded_graphics::prelude::*;

/// Origin that centers an `inner` box inside the box at `origin` of size
/// `outer`. Negative offsets are kept when `inner` is larger.
pub(crate) fn center_in(origin: Point, outer: Size, inner: Size) -> Point {
    origin
        + Point::new(
            (outer.width as i32 - inner.width as i32) / 2,
            (outer.height as i32 - inner.height as i32) / 2,
        )
}
