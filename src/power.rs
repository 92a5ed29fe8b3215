//! Power management module - deep sleep for battery operation.
//!
//! Implements:
//! - Inactivity tracking for the classification loop
//! - GPIO sense wake configuration
//! - System OFF entry
//!
//! nRF52840 power modes:
//! - System ON: Normal operation, poll loop running (~1 mA)
//! - System ON Idle: CPU sleeping between polls (~3 µA)
//! - System OFF: Deep sleep, wake on GPIO sense (~0.3 µA)
//!
//! System ON Idle comes for free from the executor; this module only
//! deals with the deeper state. System OFF is event-unaware - the
//! tracker must report idle before entry, or a press in flight is
//! lost (see `ButtonTracker::ready_for_deep_sleep`).

use crate::{config, power_logic};
use defmt::info;
use embassy_nrf::pac;
use embassy_time::Instant;

/// Tracks button activity and decides when System OFF is allowed.
pub struct SleepGate {
    last_activity: Instant,
}

impl SleepGate {
    /// Create a gate, treating "now" as the last activity.
    pub fn new() -> Self {
        Self {
            last_activity: Instant::now(),
        }
    }

    /// Record button activity (any non-idle classification).
    pub fn activity(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Whether deep sleep is allowed right now.
    ///
    /// `button_idle` is the latest classification outcome; the
    /// inactivity span is measured since the last [`activity`] call.
    ///
    /// [`activity`]: SleepGate::activity
    pub fn allows_sleep(&self, button_idle: bool) -> bool {
        power_logic::deep_sleep_allowed(
            button_idle,
            self.last_activity.elapsed().as_millis(),
            config::DEEP_SLEEP_IDLE_TIMEOUT_MS,
        )
    }
}

impl Default for SleepGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Arm GPIO sense on a port-0 pin so a low level wakes the chip from
/// System OFF.
///
/// The pin must already be configured as an input with pull-up; sense
/// is an additional flag on the same PIN_CNF register, so this does
/// not disturb the input configuration.
pub fn arm_wake_on_low(pin: u8) {
    pac::P0
        .pin_cnf(pin as usize)
        .modify(|w| w.set_sense(pac::gpio::vals::Sense::LOW));
}

/// Enter System OFF. Execution ends here; the chip resets on wake.
pub fn enter_system_off() -> ! {
    info!("Power: entering System OFF");
    pac::POWER.systemoff().write(|w| w.set_systemoff(true));

    // The write takes effect on the next event boundary.
    loop {
        cortex_m::asm::wfe();
    }
}
