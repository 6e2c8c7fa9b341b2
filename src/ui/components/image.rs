//! Raw image display

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::Component;
use crate::ui::frame::Frame;
use crate::ui::styling::StyleSet;

/// Draws raw `Rgb565` pixel data at its origin, sized to the image.
///
/// An empty view has zero size and draws only its style.
#[derive(Debug, Clone)]
pub struct ImageView {
    frame: Frame,
    image: Option<ImageRaw<'static, Rgb565>>,
}

impl ImageView {
    pub fn new(image: Option<ImageRaw<'static, Rgb565>>) -> Self {
        let size = image.as_ref().map_or(Size::zero(), |raw| raw.size());
        Self {
            frame: Frame::new(size),
            image,
        }
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    pub fn image(&self) -> Option<&ImageRaw<'static, Rgb565>> {
        self.image.as_ref()
    }

    /// Swaps the image and resizes to it, keeping the placement.
    pub fn set_image(&mut self, image: Option<ImageRaw<'static, Rgb565>>) {
        let size = image.as_ref().map_or(Size::zero(), |raw| raw.size());
        self.image = image;
        self.frame.resize_keeping_origin(size);
    }
}

impl Component for ImageView {
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
        match &self.image {
            Some(raw) => Image::new(raw, self.frame.origin()).draw(display),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{canvas, solid_image};

    #[test]
    fn sized_to_image_and_drawn_at_origin() {
        let mut view = ImageView::new(Some(solid_image(3, 2)));
        assert_eq!(view.size(), Size::new(3, 2));

        view.set_position(Point::new(4, 4));
        let mut display = canvas(10, 10);
        view.draw(&mut display).unwrap();

        assert_eq!(display.count_color(Rgb565::WHITE), 6);
        assert_eq!(display.pixel(Point::new(4, 4)), Some(Rgb565::WHITE));
        assert_eq!(display.pixel(Point::new(7, 4)), None);
    }

    #[test]
    fn swapping_image_keeps_origin() {
        let mut view = ImageView::new(None);
        assert_eq!(view.size(), Size::zero());

        view.set_position(Point::new(1, 1));
        view.set_image(Some(solid_image(2, 2)));
        assert_eq!(view.size(), Size::new(2, 2));
        assert_eq!(view.frame().try_origin(), Some(Point::new(1, 1)));
    }
}
