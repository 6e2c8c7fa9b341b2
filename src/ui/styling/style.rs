//! Style configuration for UI elements
//!
//! A [`Style`] is an immutable set of visual attributes: a background fill
//! (solid color or image, never both), an outline color and an outline width.
//! Every component carries a [`StyleSet`] with up to three styles, and its
//! [`StyleState`] picks which one is painted.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

use super::colors::ColorPalette;

// ============================================================================
// Style
// ============================================================================

/// Background fill of a component.
#[derive(Debug, Clone)]
pub enum Fill {
    /// Solid color covering the component's rectangle
    Color(Rgb565),
    /// Raw image blitted at the component's origin, clipped to its rectangle
    Image(ImageRaw<'static, Rgb565>),
}

/// Visual style of a component in one interaction state
///
/// # Examples
///
/// ```ignore
/// // Indigo body with a 2px mint outline
/// let pressed = Style::new()
///     .with_fill_color(COLOR_INDIGO)
///     .with_outline(COLOR_MINT, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    /// Background fill (if any)
    pub fill: Option<Fill>,

    /// Outline color (if any)
    pub outline: Option<Rgb565>,

    /// Outline width in pixels (0 = no outline)
    pub outline_width: u32,
}

impl Style {
    /// Creates an empty style that paints nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a solid background color, replacing any fill image.
    pub fn with_fill_color(mut self, color: Rgb565) -> Self {
        self.fill = Some(Fill::Color(color));
        self
    }

    /// Sets a background image, replacing any fill color.
    pub fn with_fill_image(mut self, image: ImageRaw<'static, Rgb565>) -> Self {
        self.fill = Some(Fill::Image(image));
        self
    }

    /// Sets the outline color and width
    ///
    /// A width of 0 effectively disables the outline.
    pub fn with_outline(mut self, color: Rgb565, width: u32) -> Self {
        self.outline = Some(color);
        self.outline_width = width;
        self
    }

    /// Background color, if the fill is a solid color.
    pub fn fill_color(&self) -> Option<Rgb565> {
        match self.fill {
            Some(Fill::Color(color)) => Some(color),
            _ => None,
        }
    }

    /// Primitive style for the outline, drawn inside the component's rectangle.
    pub fn outline_style(&self) -> Option<PrimitiveStyle<Rgb565>> {
        let color = self.outline?;
        if self.outline_width == 0 {
            return None;
        }

        Some(
            PrimitiveStyleBuilder::new()
                .stroke_color(color)
                .stroke_width(self.outline_width)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
        )
    }
}

// ============================================================================
// Style sets and states
// ============================================================================

/// Interaction state selecting which style of a [`StyleSet`] is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleState {
    #[default]
    Normal,
    Hovered,
    Active,
}

/// The normal, hovered and active styles of a component.
///
/// Each slot is optional; an empty slot paints no background or outline.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    pub normal: Option<Style>,
    pub hovered: Option<Style>,
    pub active: Option<Style>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that paints `style` in every state.
    pub fn uniform(style: Style) -> Self {
        Self {
            normal: Some(style.clone()),
            hovered: Some(style.clone()),
            active: Some(style),
        }
    }

    pub fn with_normal(mut self, style: Style) -> Self {
        self.normal = Some(style);
        self
    }

    pub fn with_hovered(mut self, style: Style) -> Self {
        self.hovered = Some(style);
        self
    }

    pub fn with_active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Style painted in `state`, if that slot is filled.
    pub fn get(&self, state: StyleState) -> Option<&Style> {
        match state {
            StyleState::Normal => self.normal.as_ref(),
            StyleState::Hovered => self.hovered.as_ref(),
            StyleState::Active => self.active.as_ref(),
        }
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Predefined style sets for interactive widgets
///
/// # Examples
///
/// ```ignore
/// let palette = ColorPalette::default();
/// let button = Button::new(size, label, ButtonBehavior::single_click())
///     .with_styles(ButtonVariant::Primary.styles(&palette));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled body whose color lightens on hover, accent outline when pressed
    Primary,

    /// Secondary body; hover thickens the outline instead of recoloring
    Secondary,

    /// Outline only, no body
    Outline,

    /// Keyboard key cap: constant body, outline width grows with interaction
    Key,
}

impl ButtonVariant {
    /// Converts the variant to normal, hovered and active styles
    pub fn styles(&self, palette: &ColorPalette) -> StyleSet {
        match self {
            ButtonVariant::Primary => StyleSet::new()
                .with_normal(
                    Style::new()
                        .with_fill_color(palette.primary)
                        .with_outline(palette.border, 1),
                )
                .with_hovered(
                    Style::new()
                        .with_fill_color(palette.primary_hovered)
                        .with_outline(palette.border_hovered, 1),
                )
                .with_active(
                    Style::new()
                        .with_fill_color(palette.primary_hovered)
                        .with_outline(palette.accent, 2),
                ),

            ButtonVariant::Secondary => StyleSet::new()
                .with_normal(Style::new().with_fill_color(palette.secondary))
                .with_hovered(
                    Style::new()
                        .with_fill_color(palette.secondary)
                        .with_outline(palette.border_hovered, 1),
                )
                .with_active(
                    Style::new()
                        .with_fill_color(palette.secondary)
                        .with_outline(palette.accent, 3),
                ),

            ButtonVariant::Outline => StyleSet::new()
                .with_normal(Style::new().with_outline(palette.border, 1))
                .with_hovered(Style::new().with_outline(palette.border_hovered, 1))
                .with_active(Style::new().with_outline(palette.accent, 2)),

            ButtonVariant::Key => StyleSet::new()
                .with_normal(
                    Style::new()
                        .with_fill_color(palette.primary)
                        .with_outline(palette.border, 1),
                )
                .with_hovered(
                    Style::new()
                        .with_fill_color(palette.primary)
                        .with_outline(palette.border_hovered, 2),
                )
                .with_active(
                    Style::new()
                        .with_fill_color(palette.primary)
                        .with_outline(palette.accent, 3),
                ),
        }
    }
}
