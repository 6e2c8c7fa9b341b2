//! Widget toolkit
//!
//! - [`core`] - the [`Component`] contract and raw input types
//! - [`frame`] - geometry, visibility and style state shared by every widget
//! - [`components`] - leaf widgets and button behaviors
//! - [`layouts`] - containers and sizing rules
//! - [`elements`] - the [`Element`] enum containers own their children as
//! - [`styling`] - colors, styles and presets
//! - [`driver`] - the per-frame [`Ui`] driver

pub mod components;
pub mod core;
pub mod driver;
pub mod elements;
pub mod frame;
pub mod layouts;
pub mod styling;

// Re-export commonly used items
pub use components::{
    BlinkingCaret, Button, ButtonBehavior, ButtonEvent, CLICK_COOLDOWN_MS, Checkbox, Counter,
    FormattedText, GridLines, HoldToRepeat, ImageView, ProgressBar, SingleClick, StaticText,
    TextArea, TextField, TextSize,
};
pub use self::core::{Component, Hover, InputEvent, KeyCode};
pub use driver::Ui;
pub use elements::{Element, Spacer};
pub use frame::Frame;
pub use layouts::{
    AbsolutePosContainer, EvenSpacingContainer, GridContainer, GridLayout, Length, ListContainer,
    ListLayout, Margin, Orientation, SCROLLBAR_WIDTH, ScrollContainer, ScrollLayout,
};
pub use styling::{ButtonVariant, ColorPalette, Fill, Style, StyleSet, StyleState};
