//! Color definitions and palette management
//!
//! Colors are RGB565, the native format of most small SPI displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Light gray - for secondary text and resting outlines
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(180 >> 3, 180 >> 2, 180 >> 3);

/// Medium gray - for idle outlines
pub const GRAY: Rgb565 = Rgb565::new(150 >> 3, 150 >> 2, 150 >> 3);

/// Dark gray - for key caps and scrollbar tracks
pub const DARK_GRAY: Rgb565 = Rgb565::new(50 >> 3, 50 >> 2, 50 >> 3);

// ============================================================================
// Accent Colors
// ============================================================================

/// Deep indigo button body
pub const COLOR_INDIGO: Rgb565 = Rgb565::new(50 >> 3, 50 >> 2, 100 >> 3);

/// Lighter indigo used while hovering
pub const COLOR_INDIGO_LIGHT: Rgb565 = Rgb565::new(80 >> 3, 80 >> 2, 120 >> 3);

/// Pale green outline of a pressed button
pub const COLOR_MINT: Rgb565 = Rgb565::new(200 >> 3, 255 >> 2, 200 >> 3);

/// Terminal green
pub const MATRIX_GREEN: Rgb565 = Rgb565::new(32 >> 3, 194 >> 2, 14 >> 3);

/// Progress bar fill
pub const COLOR_CYAN: Rgb565 = Rgb565::new(200 >> 3, 255 >> 2, 255 >> 3);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent widget styling.
///
/// [`ButtonVariant`](super::ButtonVariant) derives its normal, hovered and
/// active styles from a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Resting body color of interactive widgets
    pub primary: Rgb565,

    /// Body color while hovered
    pub primary_hovered: Rgb565,

    /// Body color of key caps and secondary widgets
    pub secondary: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast
    pub text_secondary: Rgb565,

    /// Resting outline color
    pub border: Rgb565,

    /// Outline color while hovered
    pub border_hovered: Rgb565,

    /// Outline color while pressed
    pub accent: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Creates a dark palette (default): light text on indigo widgets.
    pub fn dark() -> Self {
        Self {
            primary: COLOR_INDIGO,
            primary_hovered: COLOR_INDIGO_LIGHT,
            secondary: DARK_GRAY,
            background: BLACK,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: GRAY,
            border_hovered: LIGHT_GRAY,
            accent: COLOR_MINT,
        }
    }

    /// Creates a terminal palette: gray key caps with green highlights.
    pub fn terminal() -> Self {
        Self {
            primary: DARK_GRAY,
            primary_hovered: DARK_GRAY,
            secondary: Rgb565::new(100 >> 3, 100 >> 2, 100 >> 3),
            background: BLACK,
            text_primary: WHITE,
            text_secondary: MATRIX_GREEN,
            border: GRAY,
            border_hovered: Rgb565::new(210 >> 3, 210 >> 2, 210 >> 3),
            accent: MATRIX_GREEN,
        }
    }
}
