//! Momentary switch-button tracker.
//!
//! Classifies the physical state of a momentary switch, sampled at
//! arbitrary polling intervals, into logical events (idle, short
//! press, long press, long-press-released, in-progress, missed,
//! debouncing) - nonblocking, and without timers or interrupts being
//! required for correctness. Also answers when it is safe to enter a
//! deep, event-unaware sleep state.
//!
//! All logic is `no_std` and free of hardware dependencies: the clock
//! is a millisecond tick passed into every call, and the digital
//! input is an injected `embedded-hal` pin (or a raw sample handed in
//! directly). Host testing is plain `cargo test` - no embedded
//! toolchain required.
//!
//! The embedded demo binary (`main.rs`, behind the `embedded`
//! feature) wires the tracker to an nRF52840 pin with an
//! edge-interrupt producer and a System OFF power path.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod power_logic;

#[cfg(feature = "embedded")]
pub mod power;

pub use button::{Button, ButtonEvent, ButtonTracker, Pull, RawState, RawStateLatch};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module surface
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ════════════════════════════════════════════════════════════════════════
    // Level mapping
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn pulled_up_low_level_is_pressed() {
        assert_eq!(RawState::from_level(false, Pull::Up), RawState::Pressed);
        assert_eq!(RawState::from_level(true, Pull::Up), RawState::Released);
    }

    #[test]
    fn pulled_down_high_level_is_pressed() {
        assert_eq!(RawState::from_level(true, Pull::Down), RawState::Pressed);
        assert_eq!(RawState::from_level(false, Pull::Down), RawState::Released);
    }

    #[test]
    fn pull_defaults_to_up() {
        assert_eq!(Pull::default(), Pull::Up);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Deep-sleep policy
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn deep_sleep_needs_idle_button() {
        assert!(!power_logic::deep_sleep_allowed(false, 60_000, 30_000));
        assert!(power_logic::deep_sleep_allowed(true, 60_000, 30_000));
    }

    #[test]
    fn deep_sleep_needs_elapsed_timeout() {
        assert!(!power_logic::deep_sleep_allowed(true, 29_999, 30_000));
        assert!(power_logic::deep_sleep_allowed(true, 30_000, 30_000));
    }

    #[test]
    fn deep_sleep_zero_timeout_only_needs_idle() {
        assert!(power_logic::deep_sleep_allowed(true, 0, 0));
        assert!(!power_logic::deep_sleep_allowed(false, 0, 0));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Raw-state latch
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn latch_starts_unknown() {
        let latch = RawStateLatch::new();
        assert_eq!(latch.load(), RawState::Unknown);
    }

    #[test]
    fn latch_last_writer_wins() {
        let latch = RawStateLatch::new();
        latch.store(RawState::Pressed);
        latch.store(RawState::Released);
        assert_eq!(latch.load(), RawState::Released);
    }

    #[test]
    fn latch_feeds_tracker_across_contexts() {
        // Producer side latches a press; the polling side transfers
        // it into the tracker on its next iteration.
        let latch = RawStateLatch::new();
        let mut tracker = ButtonTracker::new();

        tracker.set_raw_state(RawState::Released);
        assert_eq!(tracker.classify(0), ButtonEvent::Idle);

        latch.store(RawState::Pressed);
        tracker.set_raw_state(latch.load());
        assert_eq!(tracker.classify(200), ButtonEvent::InProgress);
        assert_eq!(tracker.raw_state(), RawState::Pressed);
    }
}
