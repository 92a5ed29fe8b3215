//! Poll-driven button state machine.
//!
//! The tracker consumes a monotonic, wrapping millisecond tick
//! (supplied by the caller on every entry point) and the most recent
//! raw sample, and emits one [`ButtonEvent`] per classification. It
//! never blocks and never sleeps; correctness depends only on the
//! caller polling often enough relative to the debounce window and
//! the long-press threshold.
//!
//! All elapsed-time math uses `wrapping_sub`, and reference ticks are
//! rebased after each accepted event so a free-running counter can
//! roll over without ever producing a stuck or spurious window.

use crate::config::{DEBOUNCE_MS, LONG_PRESS_DEAD_TIME_MS, LONG_PRESS_MS};

use super::{ButtonEvent, Pull, RawState};

/// State tracker for a single momentary switch.
///
/// One instance per physical button, owned by the context that
/// performs classification. Raw samples may be produced elsewhere
/// (see [`RawStateLatch`]) and handed in via [`set_raw_state`].
///
/// [`RawStateLatch`]: super::RawStateLatch
/// [`set_raw_state`]: ButtonTracker::set_raw_state
#[derive(Clone, Debug)]
pub struct ButtonTracker {
    /// Debounce window in ms; edges inside it are ignored.
    debounce_ms: u32,
    /// Most recent raw sample.
    raw: RawState,
    /// Raw state last accepted as stable.
    last_stable: RawState,
    /// Tick of the last accepted stable change (or rebase point).
    last_change_ms: u32,
    /// Tick at which the current press began (rebased after each
    /// long-press emission).
    press_start_ms: u32,
    /// Tick of the most recent `LongPressed` emission.
    last_long_press_ms: u32,
    /// A rising edge was accepted and its release is still pending.
    awaiting_release: bool,
    /// A `LongPressed` has been emitted for the ongoing press.
    long_press_fired: bool,
}

impl ButtonTracker {
    /// Create a tracker with the default debounce window.
    pub const fn new() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            raw: RawState::Unknown,
            last_stable: RawState::Unknown,
            last_change_ms: 0,
            press_start_ms: 0,
            last_long_press_ms: 0,
            awaiting_release: false,
            long_press_fired: false,
        }
    }

    /// Record a raw physical sample.
    ///
    /// [`RawState::Unknown`] is not a sample and is ignored silently;
    /// prior state stays untouched. May be called from a different
    /// execution context than [`classify`] (e.g. an edge-interrupt
    /// handler) through a [`RawStateLatch`].
    ///
    /// [`classify`]: ButtonTracker::classify
    /// [`RawStateLatch`]: super::RawStateLatch
    pub fn set_raw_state(&mut self, state: RawState) {
        match state {
            RawState::Pressed | RawState::Released => self.raw = state,
            RawState::Unknown => {}
        }
    }

    /// Last recorded raw physical state.
    pub fn raw_state(&self) -> RawState {
        self.raw
    }

    /// Change the debounce window for all subsequent classifications.
    ///
    /// Not retroactive: a window already in progress keeps running
    /// against the new value on the next classification.
    pub fn set_debounce_ms(&mut self, debounce_ms: u32) {
        self.debounce_ms = debounce_ms;
    }

    /// Classify the current state at tick `now_ms`.
    ///
    /// Deterministic given state and time; mutates internal state as
    /// a side effect. `now_ms` comes from a free-running millisecond
    /// counter and may wrap.
    pub fn classify(&mut self, now_ms: u32) -> ButtonEvent {
        // Inside the debounce window nothing is accepted.
        if self.last_stable != RawState::Unknown
            && now_ms.wrapping_sub(self.last_change_ms) <= self.debounce_ms
        {
            return ButtonEvent::Debouncing;
        }

        // Rebase so a wrapped counter cannot land back inside the
        // window before the next real edge.
        self.last_change_ms = now_ms.wrapping_sub(self.debounce_ms).wrapping_sub(1);

        // Very first classification with a released button: adopt it.
        if self.raw == RawState::Released && self.last_stable == RawState::Unknown {
            self.last_stable = self.raw;
            return ButtonEvent::Idle;
        }

        if self.raw != self.last_stable {
            // Accepted edge.
            if self.raw == RawState::Pressed {
                // Rising edge: a new press starts here.
                self.awaiting_release = true;
                self.long_press_fired = false;
                self.press_start_ms = now_ms;
            }
            self.last_change_ms = now_ms;
            self.last_stable = self.raw;
        }

        if self.last_stable == RawState::Pressed {
            if self.awaiting_release
                && now_ms.wrapping_sub(self.press_start_ms) > LONG_PRESS_MS
                && now_ms.wrapping_sub(self.last_long_press_ms) > LONG_PRESS_DEAD_TIME_MS
            {
                // Rebase the press start past the threshold so the
                // dead-time gate alone paces further emissions.
                self.press_start_ms = now_ms.wrapping_sub(LONG_PRESS_MS).wrapping_sub(1);
                self.last_long_press_ms = now_ms;
                self.long_press_fired = true;
                ButtonEvent::LongPressed
            } else {
                ButtonEvent::InProgress
            }
        } else if self.awaiting_release {
            // Falling edge accepted above, or release observed on a
            // later poll: the press is over either way.
            self.awaiting_release = false;
            if now_ms.wrapping_sub(self.press_start_ms) <= LONG_PRESS_MS {
                ButtonEvent::ShortPressed
            } else if self.long_press_fired {
                self.long_press_fired = false;
                ButtonEvent::LongPressedReleased
            } else {
                // Crossed the threshold, but no poll landed while the
                // dead-time gate was open: the long press was lost.
                ButtonEvent::Missed
            }
        } else {
            ButtonEvent::Idle
        }
    }

    /// Derive a raw sample from a digital level under `pull`, record
    /// it, and classify.
    ///
    /// This is the composition used by [`Button::poll`]; the digital
    /// read itself stays with the caller.
    ///
    /// [`Button::poll`]: super::Button::poll
    pub fn sample_level(&mut self, now_ms: u32, is_high: bool, pull: Pull) -> ButtonEvent {
        self.set_raw_state(RawState::from_level(is_high, pull));
        self.classify(now_ms)
    }

    /// Whether it is safe to enter a sleep state deeper than the
    /// event-aware idle mode.
    ///
    /// True iff the classification performed by this call is
    /// [`ButtonEvent::Idle`]. This is a side-effecting query: it runs
    /// [`classify`] and advances the machine exactly as a poll does.
    /// Calling it repeatedly without feeding fresh samples can
    /// consume a pending edge that the regular poll loop then never
    /// observes, so treat it as the poll of record when you call it.
    ///
    /// [`classify`]: ButtonTracker::classify
    pub fn ready_for_deep_sleep(&mut self, now_ms: u32) -> bool {
        self.classify(now_ms) == ButtonEvent::Idle
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new()
    }
}
