//! Scrollable container for content that exceeds visible bounds

use alloc::vec::Vec;
use core::cell::RefCell;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use super::children::Children;
use super::sizing::Orientation;
use crate::error::LayoutError;
use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Component, KeyCode};
use crate::ui::elements::Element;
use crate::ui::frame::Frame;
use crate::ui::styling::{DARK_GRAY, GRAY, LIGHT_GRAY, StyleSet};

/// Width of the scrollbar strip on the right edge.
pub const SCROLLBAR_WIDTH: u32 = 12;

/// Pixels scrolled per update while an arrow is held.
pub const SCROLL_STEP_PX: i32 = 4;

/// Smallest drawn thumb height.
const MIN_THUMB_HEIGHT: u32 = 6;

/// Configuration of a [`ScrollContainer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLayout {
    pub padding: u32,
    /// Gap between stacked children
    pub margin: u32,
}

/// Vertical stack clipped to a fixed viewport
///
/// Children live in the container's local space, stacked from
/// `(padding, padding - offset)`. They are drawn into an offscreen
/// [`FrameBuffer`] the size of the container, which is then blitted at the
/// container's origin. Pointer positions are translated into local space
/// before reaching the children.
///
/// The right edge holds a scrollbar with an arrow zone at each end. Holding
/// an arrow scrolls [`SCROLL_STEP_PX`] per update until the pointer is
/// released.
pub struct ScrollContainer {
    frame: Frame,
    layout: ScrollLayout,
    offset: u32,
    velocity: i32,
    children: Children,
    canvas: RefCell<FrameBuffer>,
}

impl ScrollContainer {
    /// Children asking to fill the width are stretched to the viewport,
    /// children asking to fill the height are rejected.
    pub fn new(
        size: Size,
        layout: ScrollLayout,
        children: Vec<Element>,
    ) -> Result<Self, LayoutError> {
        let mut container = Self {
            frame: Frame::new(size),
            layout,
            offset: 0,
            velocity: 0,
            children: Children::default(),
            canvas: RefCell::new(FrameBuffer::new(size)),
        };
        for child in children {
            container.push(child)?;
        }
        Ok(container)
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.frame = self.frame.with_styles(styles);
        self
    }

    /// Appends a child at the bottom of the stack.
    pub fn push(&mut self, mut child: Element) -> Result<(), LayoutError> {
        if child.fills(Orientation::Vertical) {
            return Err(LayoutError::FillAlongListAxis {
                orientation: Orientation::Vertical,
                index: self.children.len(),
            });
        }
        if child.fills(Orientation::Horizontal) {
            child.set_size(Size::new(self.child_width(), child.size().height));
        }
        self.children.push(child);
        self.layout_children();
        Ok(())
    }

    pub fn scroll_offset(&self) -> u32 {
        self.offset
    }

    /// Furthest the content can scroll; 0 when it fits.
    pub fn max_scroll(&self) -> u32 {
        let count = self.children.len() as u32;
        let content = self.children.total(|s| s.height)
            + 2 * self.layout.padding
            + self.layout.margin * count.saturating_sub(1);
        content.saturating_sub(self.frame.size().height)
    }

    /// Scrolls by `dy` pixels, clamped to `[0, max_scroll]`.
    pub fn scroll(&mut self, dy: i32) {
        let target = (i64::from(self.offset) + i64::from(dy)).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    /// Scrolls to `offset`, clamped to `max_scroll`.
    pub fn scroll_to(&mut self, offset: u32) {
        let offset = offset.min(self.max_scroll());
        if offset != self.offset {
            self.offset = offset;
            self.layout_children();
        }
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    fn child_width(&self) -> u32 {
        self.frame
            .size()
            .width
            .saturating_sub(2 * self.layout.padding + SCROLLBAR_WIDTH)
    }

    fn layout_children(&mut self) {
        let padding = self.layout.padding as i32;
        let mut y = padding - self.offset as i32;
        for child in self.children.iter_mut() {
            child.set_position(Point::new(padding, y));
            y += child.size().height as i32 + self.layout.margin as i32;
        }
    }

    /// Scrollbar strip in local coordinates.
    fn scrollbar(&self) -> Rectangle {
        let size = self.frame.size();
        let width = SCROLLBAR_WIDTH.min(size.width);
        Rectangle::new(
            Point::new((size.width - width) as i32, 0),
            Size::new(width, size.height),
        )
    }

    fn up_arrow(&self) -> Rectangle {
        let bar = self.scrollbar();
        Rectangle::new(bar.top_left, Size::new(bar.size.width, SCROLLBAR_WIDTH))
    }

    fn down_arrow(&self) -> Rectangle {
        let bar = self.scrollbar();
        let height = SCROLLBAR_WIDTH.min(bar.size.height);
        Rectangle::new(
            bar.top_left + Point::new(0, (bar.size.height - height) as i32),
            Size::new(bar.size.width, height),
        )
    }

    fn viewport(&self) -> Rectangle {
        let size = self.frame.size();
        Rectangle::new(
            Point::zero(),
            Size::new(size.width.saturating_sub(SCROLLBAR_WIDTH), size.height),
        )
    }

    /// Thumb inside the track between the arrows, in local coordinates.
    fn thumb(&self) -> Rectangle {
        let bar = self.scrollbar();
        let track_height = bar.size.height.saturating_sub(2 * SCROLLBAR_WIDTH);
        let view = u64::from(self.frame.size().height);
        let content = view + u64::from(self.max_scroll());

        // view <= content, so the ratio fits back into the track
        let thumb_height = ((u64::from(track_height) * view / content.max(1)) as u32)
            .max(MIN_THUMB_HEIGHT)
            .min(track_height);
        let travel = track_height - thumb_height;
        let thumb_y = match self.max_scroll() {
            0 => 0,
            max => (u64::from(travel) * u64::from(self.offset) / u64::from(max)) as u32,
        };

        Rectangle::new(
            bar.top_left + Point::new(2, (SCROLLBAR_WIDTH + thumb_y) as i32),
            Size::new(bar.size.width.saturating_sub(4), thumb_height),
        )
    }

    fn draw_scrollbar<D>(&self, display: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.scrollbar()
            .translate(origin)
            .into_styled(PrimitiveStyle::with_fill(DARK_GRAY))
            .draw(display)?;
        self.thumb()
            .translate(origin)
            .into_styled(PrimitiveStyle::with_fill(GRAY))
            .draw(display)?;

        let arrow_style = PrimitiveStyleBuilder::new()
            .stroke_color(LIGHT_GRAY)
            .stroke_width(1)
            .build();
        for (zone, tip_at_top) in [(self.up_arrow(), true), (self.down_arrow(), false)] {
            let zone = zone.translate(origin);
            let Some(bottom_right) = zone.bottom_right() else {
                continue;
            };
            let center = zone.center();
            let (tip_y, base_y) = if tip_at_top {
                (zone.top_left.y + 3, bottom_right.y - 3)
            } else {
                (bottom_right.y - 3, zone.top_left.y + 3)
            };
            let tip = Point::new(center.x, tip_y);
            Line::new(Point::new(zone.top_left.x + 2, base_y), tip)
                .into_styled(arrow_style)
                .draw(display)?;
            Line::new(tip, Point::new(bottom_right.x - 2, base_y))
                .into_styled(arrow_style)
                .draw(display)?;
        }
        Ok(())
    }
}

impl Component for ScrollContainer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn set_size(&mut self, size: Size) {
        self.frame.set_size(size);
        let width = self.child_width();
        for child in self.children.iter_mut() {
            if child.fills(Orientation::Horizontal) {
                let height = child.size().height;
                child.set_size(Size::new(width, height));
            }
        }
        self.offset = self.offset.min(self.max_scroll());
        self.layout_children();
    }

    fn handle_pointer_move(&mut self, pos: Point) {
        self.track_hover(pos);
        let local = pos - self.frame.origin();
        self.children.pointer_move(local);
    }

    fn handle_key_down(&mut self, key: KeyCode) {
        if self.is_visible() {
            self.children.key_down(key);
        }
    }

    fn handle_key_up(&mut self, key: KeyCode) {
        self.children.key_up(key);
    }

    fn update(&mut self, dt_ms: u32) {
        if self.velocity != 0 {
            self.scroll(self.velocity);
        }
        self.children.update(dt_ms);
    }

    fn on_click(&mut self, pos: Point) {
        let local = pos - self.frame.origin();
        if self.up_arrow().contains(local) {
            self.velocity = -SCROLL_STEP_PX;
        } else if self.down_arrow().contains(local) {
            self.velocity = SCROLL_STEP_PX;
        } else if self.viewport().contains(local) {
            self.children.pointer_down(local);
        }
    }

    fn on_release(&mut self) {
        self.velocity = 0;
        self.children.pointer_up();
    }

    fn on_blur(&mut self) {
        self.children.blur();
    }

    fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let origin = self.frame.origin();
        {
            let mut canvas = self.canvas.borrow_mut();
            canvas.reset(self.frame.size());
            let Ok(()) = self.children.draw(&mut *canvas);
            canvas.blit(display, origin)?;
        }
        self.draw_scrollbar(display, origin)
    }
}
