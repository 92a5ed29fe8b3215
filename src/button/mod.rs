//! Momentary switch-button subsystem.
//!
//! Turns a stream of raw physical samples into classified logical
//! events without blocking and without timers or interrupts being
//! required for correctness:
//!
//! - [`ButtonTracker`] - the poll-driven state machine (debounce,
//!   edge detection, short/long press classification).
//! - [`Button`] - convenience wrapper owning an `embedded-hal` input
//!   pin, for callers that want a one-call poll.
//! - [`RawStateLatch`] - atomic cell for feeding samples from an
//!   edge-interrupt context into the polling context.
//!
//! Raw physical state ([`RawState`]) and classified event
//! ([`ButtonEvent`]) are deliberately separate types; one can never
//! be mistaken for the other.

pub mod latch;
pub mod pin;
pub mod tracker;


pub use latch::RawStateLatch;
pub use pin::Button;
pub use tracker::ButtonTracker;

/// Raw physical button state, as sampled from the pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawState {
    /// Button not pressed.
    Released,
    /// Button pressed.
    Pressed,
    /// Button never sampled.
    Unknown,
}

/// Classified logical button event, one per poll.
///
/// Terminal per call: the emitted symbol is derived on each
/// classification, it is not a persistent machine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button is not pressed and is idle.
    Idle,
    /// Button was short pressed.
    ShortPressed,
    /// Button was long pressed.
    LongPressed,
    /// Button was released after a long press.
    LongPressedReleased,
    /// Button press is in progress.
    InProgress,
    /// Press exceeded the long-press threshold but the dead-time gate
    /// prevented any `LongPressed` emission before release.
    Missed,
    /// Button is blocked for debouncing.
    Debouncing,
}

/// Wiring convention of the switch: which rail the pin rests at.
///
/// Determines how a digital level maps to pressed/released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Pull-up resistor (or `INPUT_PULLUP`): low level means pressed.
    Up,
    /// Pull-down resistor: high level means pressed.
    Down,
}

impl Default for Pull {
    fn default() -> Self {
        Pull::Up
    }
}

impl RawState {
    /// Map a digital input level to a raw state under a pull convention.
    pub fn from_level(is_high: bool, pull: Pull) -> Self {
        let pressed = match pull {
            Pull::Up => !is_high,
            Pull::Down => is_high,
        };
        if pressed {
            RawState::Pressed
        } else {
            RawState::Released
        }
    }
}
