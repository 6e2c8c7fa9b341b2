//! Press/release state machines for buttons
//!
//! A behavior turns raw press, release and elapsed-time signals into at most
//! one semantic [`ButtonEvent`] per call. Widgets own a behavior value and
//! react to its events; the behavior knows nothing about the widget.

use log::trace;

/// How long a single click keeps a button active, in milliseconds.
pub const CLICK_COOLDOWN_MS: u32 = 150;

/// Semantic events emitted by a [`ButtonBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The button was activated
    Fire,
    /// The active period ended
    Release,
}

/// Fires on press and releases itself after [`CLICK_COOLDOWN_MS`].
///
/// Physical releases are ignored; the cooldown decides how long the button
/// stays active. Pressing again while cooling fires again and restarts the
/// cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleClick {
    cooldown: u32,
}

impl SingleClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cooling(&self) -> bool {
        self.cooldown > 0
    }

    pub fn press(&mut self) -> Option<ButtonEvent> {
        self.cooldown = CLICK_COOLDOWN_MS;
        Some(ButtonEvent::Fire)
    }

    pub fn tick(&mut self, dt_ms: u32) -> Option<ButtonEvent> {
        if self.cooldown == 0 {
            return None;
        }

        self.cooldown = self.cooldown.saturating_sub(dt_ms);
        (self.cooldown == 0).then_some(ButtonEvent::Release)
    }
}

/// Fires on press, then every `repeat_interval` once `initial_delay` has
/// passed, for as long as the press is held.
///
/// Several intervals elapsing within one tick collapse into a single
/// [`ButtonEvent::Fire`], while [`fire_count`](HoldToRepeat::fire_count)
/// counts every one of them. The timer carries the remainder over, so the
/// count does not depend on how elapsed time is split into ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldToRepeat {
    initial_delay: u32,
    repeat_interval: u32,
    timer: i64,
    held: bool,
    fire_count: u32,
}

impl HoldToRepeat {
    /// # Panics
    ///
    /// If `repeat_interval` is zero.
    pub fn new(initial_delay: u32, repeat_interval: u32) -> Self {
        assert!(repeat_interval > 0, "repeat interval must be non-zero");
        Self {
            initial_delay,
            repeat_interval,
            timer: 0,
            held: false,
            fire_count: 0,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Fires since the last press, including the press itself.
    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    pub fn press(&mut self) -> Option<ButtonEvent> {
        if self.held {
            return None;
        }

        self.held = true;
        self.timer = i64::from(self.initial_delay);
        self.fire_count = 1;
        Some(ButtonEvent::Fire)
    }

    pub fn release(&mut self) -> Option<ButtonEvent> {
        if !self.held {
            return None;
        }

        self.held = false;
        Some(ButtonEvent::Release)
    }

    pub fn tick(&mut self, dt_ms: u32) -> Option<ButtonEvent> {
        if !self.held {
            return None;
        }

        self.timer -= i64::from(dt_ms);
        if self.timer > 0 {
            return None;
        }

        let interval = i64::from(self.repeat_interval);
        let elapsed = -self.timer / interval + 1;
        self.timer += elapsed * interval;

        if elapsed > 1 {
            trace!("Collapsing {} repeat intervals into one fire", elapsed);
        }
        self.fire_count = self
            .fire_count
            .saturating_add(u32::try_from(elapsed).unwrap_or(u32::MAX));
        Some(ButtonEvent::Fire)
    }
}

/// Press semantics of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonBehavior {
    SingleClick(SingleClick),
    HoldToRepeat(HoldToRepeat),
}

impl Default for ButtonBehavior {
    fn default() -> Self {
        Self::single_click()
    }
}

impl ButtonBehavior {
    pub fn single_click() -> Self {
        ButtonBehavior::SingleClick(SingleClick::new())
    }

    pub fn hold_to_repeat(initial_delay: u32, repeat_interval: u32) -> Self {
        ButtonBehavior::HoldToRepeat(HoldToRepeat::new(initial_delay, repeat_interval))
    }

    pub fn press(&mut self) -> Option<ButtonEvent> {
        match self {
            ButtonBehavior::SingleClick(b) => b.press(),
            ButtonBehavior::HoldToRepeat(b) => b.press(),
        }
    }

    pub fn release(&mut self) -> Option<ButtonEvent> {
        match self {
            ButtonBehavior::SingleClick(_) => None,
            ButtonBehavior::HoldToRepeat(b) => b.release(),
        }
    }

    pub fn tick(&mut self, dt_ms: u32) -> Option<ButtonEvent> {
        match self {
            ButtonBehavior::SingleClick(b) => b.tick(dt_ms),
            ButtonBehavior::HoldToRepeat(b) => b.tick(dt_ms),
        }
    }
}
