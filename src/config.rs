//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments and timing parameters live here so
//! they can be tuned in one place.

// Button timing

/// Default debounce window after a rising or falling signal edge (ms).
///
/// Mutable per tracker via [`ButtonTracker::set_debounce_ms`].
///
/// [`ButtonTracker::set_debounce_ms`]: crate::button::ButtonTracker::set_debounce_ms
pub const DEBOUNCE_MS: u32 = 100;

/// Press duration beyond which a press counts as a long press (ms).
pub const LONG_PRESS_MS: u32 = 1000;

/// Minimum spacing between successive long-press emissions while the
/// button stays held (ms). A sustained hold emits one `LongPressed`
/// per dead-time interval instead of one per poll.
pub const LONG_PRESS_DEAD_TIME_MS: u32 = 500;

// Polling

/// Poll cadence of the demo firmware's classification loop (ms).
///
/// Must stay well below [`DEBOUNCE_MS`] and [`LONG_PRESS_MS`]; the
/// tracker degrades gracefully when polls are missed, but edges that
/// rise and fall entirely between polls are lost.
pub const BUTTON_POLL_MS: u64 = 10;

// Power

/// Continuous idle time before the demo firmware enters System OFF (ms).
pub const DEEP_SLEEP_IDLE_TIMEOUT_MS: u64 = 30_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*`
// value is selected in `main.rs`. Adjust for your custom PCB.
//
//   Button → P0.11 (active-low, internal pull-up)

/// Port-0 pin number of the demo button, used to arm sense wake
/// before System OFF.
pub const BUTTON_PIN: u8 = 11;
