//! Press classification state machine.
//!
//! Each [`update`](PressClassifier::update) samples the button once and
//! counts how many consecutive ticks it has stayed down. A press released
//! before [`LONG_PRESS_THRESHOLD`] still-pressed ticks is a short press; a
//! press that reaches the threshold is a long press, reported on the tick it
//! gets there rather than on release.
//!
//! The result is parked in a single slot until
//! [`dispatch`](PressClassifier::dispatch) runs the matching callback. A
//! second result arriving before that overwrites the first.

use crate::config::LONG_PRESS_THRESHOLD;
use crate::hardware::traits::PressInput;

/// Outcome of a completed press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Level change between two consecutive ticks, encoded `now | (prev << 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Transition {
    StillReleased = 0,
    JustPressed = 1,
    JustReleased = 2,
    StillPressed = 3,
}

impl Transition {
    pub const fn from_levels(prev: bool, now: bool) -> Self {
        match (now as u8) | ((prev as u8) << 1) {
            0 => Self::StillReleased,
            1 => Self::JustPressed,
            2 => Self::JustReleased,
            _ => Self::StillPressed,
        }
    }
}

pub struct PressClassifier<I, S, L> {
    pin: I,
    raw_level_last: bool,
    tick_count: u32,
    threshold: u32,
    pending: Option<PressKind>,
    on_short_press: S,
    on_long_press: L,
}

impl<I, S, L> PressClassifier<I, S, L>
where
    I: PressInput,
    S: FnMut(),
    L: FnMut(),
{
    pub fn new(pin: I, on_short_press: S, on_long_press: L) -> Self {
        Self::with_threshold(pin, LONG_PRESS_THRESHOLD, on_short_press, on_long_press)
    }

    /// Like [`new`](Self::new) with a custom long-press threshold in ticks.
    ///
    /// A threshold of zero is treated as one: the first still-pressed tick
    /// already counts as a long press.
    pub fn with_threshold(pin: I, threshold: u32, on_short_press: S, on_long_press: L) -> Self {
        Self {
            pin,
            raw_level_last: false,
            tick_count: 0,
            threshold: threshold.max(1),
            pending: None,
            on_short_press,
            on_long_press,
        }
    }

    /// Sets up the input line. Call once before the first [`update`](Self::update).
    pub fn configure(&mut self) -> Result<(), I::Error> {
        self.pin.configure_as_input()
    }

    /// Samples the line once and advances the state machine by one tick.
    ///
    /// Returns the transition that was applied. A read error leaves the
    /// state untouched.
    pub fn update(&mut self) -> Result<Transition, I::Error> {
        let is_pressed = self.pin.is_pressed()?;
        let transition = Transition::from_levels(self.raw_level_last, is_pressed);

        match transition {
            Transition::StillReleased => {}
            Transition::JustPressed => {
                self.raw_level_last = true;
                self.tick_count = 0;
            }
            Transition::JustReleased => {
                self.raw_level_last = false;
                if self.tick_count < self.threshold {
                    self.post(PressKind::Short);
                }
            }
            Transition::StillPressed => {
                self.tick_count = self.tick_count.saturating_add(1);
                if self.tick_count == self.threshold {
                    self.post(PressKind::Long);
                }
            }
        }

        Ok(transition)
    }

    /// Runs the callback for the pending press, if any, and clears it.
    pub fn dispatch(&mut self) -> Option<PressKind> {
        let kind = self.pending.take()?;
        match kind {
            PressKind::Short => (self.on_short_press)(),
            PressKind::Long => (self.on_long_press)(),
        }
        Some(kind)
    }

    fn post(&mut self, kind: PressKind) {
        #[cfg(feature = "defmt")]
        {
            if let Some(lost) = self.pending {
                defmt::warn!("{} press overwritten by {} before dispatch", lost, kind);
            }
            defmt::debug!("{} press after {} ticks", kind, self.tick_count);
        }

        self.pending = Some(kind);
    }

    pub fn pending(&self) -> Option<PressKind> {
        self.pending
    }

    /// Level seen by the most recent [`update`](Self::update).
    pub fn is_pressed(&self) -> bool {
        self.raw_level_last
    }

    /// Still-pressed ticks of the current (or last) press.
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Gives back the input and both callbacks.
    pub fn release(self) -> (I, S, L) {
        (self.pin, self.on_short_press, self.on_long_press)
    }
}
