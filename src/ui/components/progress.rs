//! Countdown progress bar

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::{COLOR_CYAN, DARK_GRAY};

/// Gap between the track and the inner bar.
const BAR_INSET: u32 = 2;

/// Track with an inner bar that grows as a countdown runs out.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    frame: Frame,
    total_ms: u32,
    remaining_ms: u32,
    track_color: Rgb565,
    bar_color: Rgb565,
}

impl ProgressBar {
    pub fn new(size: Size) -> Self {
        Self {
            frame: Frame::new(size),
            total_ms: 0,
            remaining_ms: 0,
            track_color: DARK_GRAY,
            bar_color: COLOR_CYAN,
        }
    }

    pub fn with_colors(mut self, track: Rgb565, bar: Rgb565) -> Self {
        self.track_color = track;
        self.bar_color = bar;
        self
    }

    /// Restarts the countdown from `total_ms`.
    pub fn start(&mut self, total_ms: u32) {
        self.total_ms = total_ms;
        self.remaining_ms = total_ms;
    }

    /// Elapsed share of the countdown in `[0, 1]`; 0 before any start.
    pub fn progress(&self) -> f32 {
        if self.total_ms == 0 {
            return 0.0;
        }
        1.0 - self.remaining_ms as f32 / self.total_ms as f32
    }

    fn bar_area(&self) -> Rectangle {
        let size = self.frame.size();
        let inner_width = size.width.saturating_sub(2 * BAR_INSET);
        let inset = BAR_INSET as i32;
        Rectangle::new(
            self.frame.origin() + Point::new(inset, inset),
            Size::new(
                (inner_width as f32 * self.progress()) as u32,
                size.height.saturating_sub(2 * BAR_INSET),
            ),
        )
    }
}

impl Component for ProgressBar {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn update(&mut self, dt_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.frame
            .bounds()
            .into_styled(PrimitiveStyle::with_fill(self.track_color))
            .draw(display)?;
        self.bar_area()
            .into_styled(PrimitiveStyle::with_fill(self.bar_color))
            .draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::canvas;

    #[test]
    fn counts_down_and_fills() {
        let mut bar = ProgressBar::new(Size::new(24, 10));
        assert_eq!(bar.progress(), 0.0);

        bar.start(1000);
        bar.update(250);
        assert_eq!(bar.progress(), 0.25);
        bar.update(5000);
        assert_eq!(bar.progress(), 1.0);

        bar.start(1000);
        bar.update(500);
        bar.set_position(Point::zero());
        let mut display = canvas(24, 10);
        bar.draw(&mut display).unwrap();

        // Inner bar is half of 20x6.
        assert_eq!(display.count_color(COLOR_CYAN), 60);
        assert_eq!(display.count_color(DARK_GRAY), 240 - 60);
    }
}
