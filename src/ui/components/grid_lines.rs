//! Background grid of evenly spaced lines

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::ui::core::Component;
use crate::ui::frame::Frame;

/// Draws one-pixel lines every `cell` pixels across its box, starting at
/// the top-left edge.
#[derive(Debug, Clone)]
pub struct GridLines {
    frame: Frame,
    cell: u32,
    color: Rgb565,
}

impl GridLines {
    /// # Panics
    ///
    /// If `cell` is zero.
    pub fn new(size: Size, cell: u32, color: Rgb565) -> Self {
        assert!(cell > 0, "grid cell must be non-zero");
        Self {
            frame: Frame::new(size),
            cell,
            color,
        }
    }
}

impl Component for GridLines {
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
        let bounds = self.frame.bounds();
        let Some(bottom_right) = bounds.bottom_right() else {
            return Ok(());
        };
        let top_left = bounds.top_left;
        let style = PrimitiveStyle::with_stroke(self.color, 1);

        for x in (top_left.x..=bottom_right.x).step_by(self.cell as usize) {
            Line::new(Point::new(x, top_left.y), Point::new(x, bottom_right.y))
                .into_styled(style)
                .draw(display)?;
        }
        for y in (top_left.y..=bottom_right.y).step_by(self.cell as usize) {
            Line::new(Point::new(top_left.x, y), Point::new(bottom_right.x, y))
                .into_styled(style)
                .draw(display)?;
        }
        Ok(())
    }
}
