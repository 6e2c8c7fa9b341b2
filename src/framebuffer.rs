//! Heap-backed offscreen surface with transparency and change tracking.
//!
//! A [`FrameBuffer`] is a `DrawTarget<Color = Rgb565>` whose pixels start out
//! transparent. Widgets that need clipping (the scroll container) draw their
//! children into one and then blit it onto the real display; only the
//! bounding box of pixels written since the last reset is copied, and
//! transparent pixels leave the destination untouched.
//!
//! It doubles as a plain in-memory canvas, e.g. for rendering a whole UI
//! before pushing it to a hardware display.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last reset.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Offscreen surface implementing `DrawTarget<Color = Rgb565>`.
///
/// `None` pixels are transparent. Out-of-bounds drawing is silently clipped.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a fully transparent surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; size.width as usize * size.height as usize],
            dirty: None,
        }
    }

    /// Make every pixel transparent again, reallocating if `size` differs
    /// from the current one.
    pub fn reset(&mut self, size: Size) {
        if size != self.size {
            debug!(
                "Reallocating framebuffer {}x{} -> {}x{}",
                self.size.width, self.size.height, size.width, size.height
            );
            *self = Self::new(size);
            return;
        }

        if let Some(rect) = self.dirty.take() {
            let stride = self.size.width as usize;
            for y in rect.min_y..=rect.max_y {
                let row_start = y * stride;
                self.pixels[row_start + rect.min_x..=row_start + rect.max_x].fill(None);
            }
        }
    }

    /// Color at `point`, or `None` when transparent or out of bounds.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let (x, y) = self.index_of(point)?;
        self.pixels[y * self.size.width as usize + x]
    }

    /// Area written since the last reset, in buffer coordinates.
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(DirtyRect::to_rectangle)
    }

    /// Number of opaque pixels with the given color.
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Copy every opaque pixel onto `display`, shifted by `offset`.
    ///
    /// Only the dirty region is visited. The buffer's own bounds act as the
    /// clip rectangle, so nothing outside `offset + size` is touched.
    pub fn blit<D>(&self, display: &mut D, offset: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty else {
            return Ok(());
        };

        let pixels = &self.pixels;
        let stride = self.size.width as usize;
        let opaque = (rect.min_y..=rect.max_y).flat_map(move |y| {
            (rect.min_x..=rect.max_x).filter_map(move |x| {
                pixels[y * stride + x].map(|color| {
                    Pixel(offset + Point::new(x as i32, y as i32), color)
                })
            })
        });

        display.draw_iter(opaque)
    }

    fn index_of(&self, point: Point) -> Option<(usize, usize)> {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        if point.x >= 0 && point.y >= 0 && point.x < w && point.y < h {
            Some((point.x as usize, point.y as usize))
        } else {
            None
        }
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.size.width as usize + x;
        if self.pixels[idx] != Some(color) {
            self.pixels[idx] = Some(color);
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some((x, y)) = self.index_of(coord) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.size.width as i32;
        let h = self.size.height as i32;

        let x_start = area.top_left.x.clamp(0, w);
        let y_start = area.top_left.y.clamp(0, h);
        let x_end = area
            .top_left
            .x
            .saturating_add(area.size.width as i32)
            .clamp(0, w);
        let y_end = area
            .top_left
            .y
            .saturating_add(area.size.height as i32)
            .clamp(0, h);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&Rectangle::new(Point::zero(), self.size), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_transparent() {
        let fb = FrameBuffer::new(Size::new(4, 3));
        assert_eq!(fb.pixel(Point::new(0, 0)), None);
        assert_eq!(fb.dirty_area(), None);
    }

    #[test]
    fn tracks_dirty_area_and_clips_out_of_bounds() {
        let mut fb = FrameBuffer::new(Size::new(10, 10));
        fb.fill_solid(
            &Rectangle::new(Point::new(8, 8), Size::new(5, 5)),
            Rgb565::RED,
        )
        .unwrap();

        assert_eq!(fb.count_color(Rgb565::RED), 4);
        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(8, 8), Size::new(2, 2)))
        );
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut src = FrameBuffer::new(Size::new(4, 4));
        Pixel(Point::new(1, 1), Rgb565::GREEN).draw(&mut src).unwrap();

        let mut dst = FrameBuffer::new(Size::new(10, 10));
        dst.clear(Rgb565::BLUE).unwrap();
        src.blit(&mut dst, Point::new(5, 5)).unwrap();

        assert_eq!(dst.pixel(Point::new(6, 6)), Some(Rgb565::GREEN));
        assert_eq!(dst.pixel(Point::new(5, 5)), Some(Rgb565::BLUE));
        assert_eq!(dst.count_color(Rgb565::GREEN), 1);
    }

    #[test]
    fn reset_clears_or_reallocates() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.clear(Rgb565::WHITE).unwrap();
        fb.reset(Size::new(4, 4));
        assert_eq!(fb.count_color(Rgb565::WHITE), 0);
        assert_eq!(fb.dirty_area(), None);

        fb.reset(Size::new(8, 2));
        assert_eq!(fb.size(), Size::new(8, 2));
        assert_eq!(fb.pixel(Point::new(7, 1)), None);
    }
}
