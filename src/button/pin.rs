//! Pin-owning convenience wrapper.
//!
//! [`Button`] binds a tracker to an injected `embedded-hal` input pin
//! and a wiring convention, so a polling loop is one call per
//! iteration. The pin stays fully opaque to the state machine; any
//! `InputPin` implementation works, including a scripted fake on the
//! host.

use embedded_hal::digital::InputPin;

use super::{ButtonEvent, ButtonTracker, Pull, RawState};

/// A momentary switch on a digital input pin.
pub struct Button<P> {
    pin: P,
    pull: Pull,
    tracker: ButtonTracker,
}

impl<P: InputPin> Button<P> {
    /// Bind `pin` with the given wiring convention.
    pub fn new(pin: P, pull: Pull) -> Self {
        Self {
            pin,
            pull,
            tracker: ButtonTracker::new(),
        }
    }

    /// Read the pin, record the sample, classify.
    ///
    /// The only fallible step is the level read; its error propagates
    /// unchanged.
    pub fn poll(&mut self, now_ms: u32) -> Result<ButtonEvent, P::Error> {
        let is_high = self.pin.is_high()?;
        Ok(self.tracker.sample_level(now_ms, is_high, self.pull))
    }

    /// Whether it is safe to enter deep sleep.
    ///
    /// Reads the pin and classifies; see
    /// [`ButtonTracker::ready_for_deep_sleep`] for the side-effect
    /// caveat.
    pub fn ready_for_deep_sleep(&mut self, now_ms: u32) -> Result<bool, P::Error> {
        Ok(self.poll(now_ms)? == ButtonEvent::Idle)
    }

    /// Last recorded raw physical state.
    pub fn raw_state(&self) -> RawState {
        self.tracker.raw_state()
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &ButtonTracker {
        &self.tracker
    }

    /// The underlying tracker, mutably (e.g. to change the debounce
    /// window).
    pub fn tracker_mut(&mut self) -> &mut ButtonTracker {
        &mut self.tracker
    }
}
