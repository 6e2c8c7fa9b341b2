//! Ordered child list shared by the containers

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::{Component, KeyCode};
use crate::ui::elements::Element;

/// Children of a container, visited in insertion order.
///
/// Every call goes to every child. Children hit-test pointer presses
/// themselves, so overlapping siblings all see the same press.
#[derive(Default)]
pub struct Children {
    elements: Vec<Element>,
}

impl Children {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Sum of child extents picked by `extent`.
    pub fn total(&self, extent: impl Fn(Size) -> u32) -> u32 {
        self.elements.iter().map(|c| extent(c.size())).sum()
    }

    /// Largest child extent picked by `extent`, 0 when empty.
    pub fn largest(&self, extent: impl Fn(Size) -> u32) -> u32 {
        self.elements
            .iter()
            .map(|c| extent(c.size()))
            .max()
            .unwrap_or(0)
    }

    pub fn pointer_down(&mut self, pos: Point) {
        for child in &mut self.elements {
            child.handle_pointer_down(pos);
        }
    }

    pub fn pointer_up(&mut self) {
        for child in &mut self.elements {
            child.handle_pointer_up();
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        for child in &mut self.elements {
            child.handle_pointer_move(pos);
        }
    }

    pub fn blur(&mut self) {
        for child in &mut self.elements {
            child.blur();
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        for child in &mut self.elements {
            child.handle_key_down(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        for child in &mut self.elements {
            child.handle_key_up(key);
        }
    }

    pub fn update(&mut self, dt_ms: u32) {
        for child in &mut self.elements {
            child.update(dt_ms);
        }
    }

    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        for child in &self.elements {
            child.draw(display)?;
        }
        Ok(())
    }
}

impl Deref for Children {
    type Target = [Element];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl DerefMut for Children {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elements
    }
}

/// Implements the child-forwarding half of [`Component`] for a container
/// whose children live in a `children: Children` field.
///
/// Presses reach the children only after the container's own hit test.
/// Hidden containers do not pass key presses on, but key releases always
/// reach the children so a held hotkey can end.
macro_rules! forward_to_children {
    () => {
        fn handle_pointer_move(&mut self, pos: Point) {
            self.track_hover(pos);
            self.children.pointer_move(pos);
        }

        fn handle_key_down(&mut self, key: $crate::ui::core::KeyCode) {
            if self.is_visible() {
                self.children.key_down(key);
            }
        }

        fn handle_key_up(&mut self, key: $crate::ui::core::KeyCode) {
            self.children.key_up(key);
        }

        fn update(&mut self, dt_ms: u32) {
            self.children.update(dt_ms);
        }

        fn on_click(&mut self, pos: Point) {
            self.children.pointer_down(pos);
        }

        fn on_release(&mut self) {
            self.children.pointer_up();
        }

        fn on_blur(&mut self) {
            self.children.blur();
        }

        fn draw_contents<D>(&self, display: &mut D) -> Result<(), D::Error>
        where
            D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>,
        {
            self.children.draw(display)
        }
    };
}

pub(crate) use forward_to_children;
