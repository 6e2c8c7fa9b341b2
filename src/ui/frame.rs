//! Per-component base state: geometry, visibility and style state

use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::error::NOT_POSITIONED;
use crate::ui::components::ButtonEvent;
use crate::ui::core::Hover;
use crate::ui::layouts::Orientation;
use crate::ui::styling::{Fill, Style, StyleSet, StyleState};

/// Geometry, visibility and style state shared by every widget.
///
/// The origin is absolute and stays unset until the widget is placed.
/// Anything that needs it (hit-testing, pointer motion, drawing) panics when
/// called before placement.
///
/// The style state only moves through hover tracking and behavior events;
/// there is no public setter.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    size: Size,
    origin: Option<Point>,
    hidden: bool,
    fill_width: bool,
    fill_height: bool,
    styles: StyleSet,
    state: StyleState,
    hovered: bool,
}

impl Frame {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the normal, hovered and active styles.
    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.styles = styles;
        self
    }

    /// Asks the parent list to stretch this frame along `orientation`.
    pub fn with_fill(mut self, orientation: Orientation) -> Self {
        self.set_fill(orientation, true);
        self
    }

    pub fn set_fill(&mut self, orientation: Orientation, fill: bool) {
        match orientation {
            Orientation::Horizontal => self.fill_width = fill,
            Orientation::Vertical => self.fill_height = fill,
        }
    }

    pub fn fills(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.fill_width,
            Orientation::Vertical => self.fill_height,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes and forgets the origin; the owner must be placed again.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.origin = None;
    }

    /// Resizes after a content change without losing the placement.
    pub fn resize_keeping_origin(&mut self, size: Size) {
        self.size = size;
    }

    pub fn place(&mut self, origin: Point) {
        self.origin = Some(origin);
    }

    /// Absolute top-left corner.
    ///
    /// # Panics
    ///
    /// If the frame was never placed.
    pub fn origin(&self) -> Point {
        self.origin.expect(NOT_POSITIONED)
    }

    pub fn try_origin(&self) -> Option<Point> {
        self.origin
    }

    pub fn is_positioned(&self) -> bool {
        self.origin.is_some()
    }

    /// Absolute bounding rectangle. Panics if never placed.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin(), self.size)
    }

    /// Whether `pos` lies in `[origin, origin + size)`. Panics if never placed.
    pub fn hit(&self, pos: Point) -> bool {
        self.bounds().contains(pos)
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.hidden = !visible;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn style_state(&self) -> StyleState {
        self.state
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Style painted right now, if the current slot is filled.
    pub fn current_style(&self) -> Option<&Style> {
        self.styles.get(self.state)
    }

    /// Runs one step of hover tracking for a pointer at `pos`.
    ///
    /// Returns which hook the owner should fire, if any. An active frame
    /// stays active; only its hovered flag follows the pointer.
    ///
    /// # Panics
    ///
    /// If the frame was never placed.
    pub fn track_pointer(&mut self, pos: Point) -> Option<Hover> {
        let hit = self.hit(pos);
        match (self.hovered, hit) {
            (false, true) => {
                if self.state != StyleState::Active && self.styles.hovered.is_some() {
                    self.state = StyleState::Hovered;
                }
                self.hovered = true;
                Some(Hover::Entered)
            }
            (true, false) => {
                self.clear_hover();
                Some(Hover::Left)
            }
            _ => None,
        }
    }

    /// Drops the hover as if the pointer had left. Returns whether the frame
    /// was hovered.
    pub fn clear_hover(&mut self) -> bool {
        if !self.hovered {
            return false;
        }
        if self.state != StyleState::Active {
            self.state = StyleState::Normal;
        }
        self.hovered = false;
        true
    }

    /// Moves the style state for a behavior event.
    pub fn apply(&mut self, event: ButtonEvent) {
        self.state = match event {
            ButtonEvent::Fire => StyleState::Active,
            ButtonEvent::Release => self.resting_state(),
        };
    }

    fn resting_state(&self) -> StyleState {
        if self.hovered && self.styles.hovered.is_some() {
            StyleState::Hovered
        } else {
            StyleState::Normal
        }
    }

    /// Paints the background of the current style.
    ///
    /// Fill images are drawn at the origin and clipped to the frame.
    pub fn draw_background<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(style) = self.current_style() else {
            return Ok(());
        };
        let bounds = self.bounds();

        match &style.fill {
            Some(Fill::Color(color)) => bounds
                .into_styled(PrimitiveStyle::with_fill(*color))
                .draw(display),
            Some(Fill::Image(raw)) => {
                Image::new(raw, bounds.top_left).draw(&mut display.clipped(&bounds))
            }
            None => Ok(()),
        }
    }

    /// Paints the outline of the current style inside the frame.
    pub fn draw_outline<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.current_style().and_then(Style::outline_style) {
            Some(style) => self.bounds().into_styled(style).draw(display),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::{COLOR_INDIGO, COLOR_MINT, WHITE};

    fn styled_frame(with_hover: bool) -> Frame {
        let mut styles = StyleSet::new()
            .with_normal(Style::new().with_fill_color(COLOR_INDIGO))
            .with_active(Style::new().with_fill_color(COLOR_MINT));
        if with_hover {
            styles = styles.with_hovered(Style::new().with_fill_color(WHITE));
        }
        let mut frame = Frame::new(Size::new(10, 10)).with_styles(styles);
        frame.place(Point::new(5, 5));
        frame
    }

    #[test]
    fn hover_table() {
        let mut frame = styled_frame(true);
        let inside = Point::new(6, 6);
        let outside = Point::new(0, 0);

        assert_eq!(frame.track_pointer(outside), None);
        assert_eq!(frame.style_state(), StyleState::Normal);

        assert_eq!(frame.track_pointer(inside), Some(Hover::Entered));
        assert_eq!(frame.style_state(), StyleState::Hovered);
        assert!(frame.is_hovered());

        assert_eq!(frame.track_pointer(Point::new(14, 14)), None);
        assert_eq!(frame.style_state(), StyleState::Hovered);

        assert_eq!(frame.track_pointer(Point::new(15, 15)), Some(Hover::Left));
        assert_eq!(frame.style_state(), StyleState::Normal);
        assert!(!frame.is_hovered());
    }

    #[test]
    fn hover_without_hovered_style_keeps_state() {
        let mut frame = styled_frame(false);
        assert_eq!(frame.track_pointer(Point::new(6, 6)), Some(Hover::Entered));
        assert!(frame.is_hovered());
        assert_eq!(frame.style_state(), StyleState::Normal);
    }

    #[test]
    fn active_wins_until_release() {
        let mut frame = styled_frame(true);
        frame.apply(ButtonEvent::Fire);
        frame.track_pointer(Point::new(6, 6));
        assert_eq!(frame.style_state(), StyleState::Active);

        frame.apply(ButtonEvent::Release);
        assert_eq!(frame.style_state(), StyleState::Hovered);

        frame.apply(ButtonEvent::Fire);
        frame.track_pointer(Point::new(40, 40));
        assert_eq!(frame.style_state(), StyleState::Active);
        frame.apply(ButtonEvent::Release);
        assert_eq!(frame.style_state(), StyleState::Normal);
    }

    #[test]
    fn hit_is_half_open() {
        let frame = styled_frame(false);
        assert!(frame.hit(Point::new(5, 5)));
        assert!(frame.hit(Point::new(14, 14)));
        assert!(!frame.hit(Point::new(15, 14)));
        assert!(!frame.hit(Point::new(4, 5)));
    }

    #[test]
    fn set_size_forgets_origin() {
        let mut frame = styled_frame(false);
        frame.resize_keeping_origin(Size::new(3, 3));
        assert_eq!(frame.try_origin(), Some(Point::new(5, 5)));

        frame.set_size(Size::new(20, 20));
        assert_eq!(frame.try_origin(), None);
    }

    #[test]
    #[should_panic(expected = "set_position")]
    fn hit_before_placement_panics() {
        Frame::new(Size::new(1, 1)).hit(Point::zero());
    }
}
