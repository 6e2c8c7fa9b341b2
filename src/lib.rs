//! Retained-mode widget toolkit for `embedded-graphics` targets.
//!
//! A UI is a tree of [`ui::Element`]s: leaf widgets (text, buttons,
//! checkboxes, counters, images) composed inside layout containers
//! (absolute, list, even spacing, grid, scroll). The tree is positioned once,
//! then driven frame by frame: raw input events are dispatched, timers are
//! advanced with `update`, and the whole tree is drawn onto any
//! `DrawTarget<Color = Rgb565>`.
//!
//! The crate is `no_std` with `alloc` so the same widgets run on a
//! microcontroller framebuffer and on a desktop simulator.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod framebuffer;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::LayoutError;
pub use framebuffer::FrameBuffer;
