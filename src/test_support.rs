//! Shared fixtures for unit tests

use alloc::vec;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::ui::components::{Button, ButtonBehavior, StaticText, TextSize};
use crate::ui::styling::{ButtonVariant, ColorPalette};

/// Routes `log` output to the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transparent canvas to draw widgets onto.
pub fn canvas(width: u32, height: u32) -> FrameBuffer {
    FrameBuffer::new(Size::new(width, height))
}

/// White image of the given size.
pub fn solid_image(width: u32, height: u32) -> ImageRaw<'static, Rgb565> {
    let data = vec![0xFF_u8; (width * height * 2) as usize].leak();
    ImageRaw::new(data, width)
}

/// Button labelled "OK" with the primary dark-palette styles.
pub fn primary_button(size: Size, behavior: ButtonBehavior) -> Button {
    Button::new(size, StaticText::new("OK", TextSize::Medium), behavior)
        .with_styles(ButtonVariant::Primary.styles(&ColorPalette::dark()))
}
