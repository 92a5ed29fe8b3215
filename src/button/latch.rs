//! Cross-context raw-state hand-off.
//!
//! The classification loop owns the tracker, but the raw sample may
//! be produced somewhere else entirely - typically an edge-triggered
//! wake interrupt that fires while the poll loop sleeps. The latch is
//! the single shared word between the two contexts: the producer
//! stores the level it observed, the poll loop loads it and feeds
//! [`ButtonTracker::set_raw_state`]. Last writer wins; there is no
//! queueing and none is needed, classification only ever cares about
//! the most recent sample.
//!
//! [`ButtonTracker::set_raw_state`]: super::ButtonTracker::set_raw_state

use core::sync::atomic::{AtomicU8, Ordering};

use super::RawState;

const RELEASED: u8 = 0;
const PRESSED: u8 = 1;
const UNKNOWN: u8 = 2;

/// Atomic cell holding the most recent raw button sample.
///
/// A single byte, so loads and stores are uninterruptible on any
/// target with byte-wide atomics - which is exactly the access-width
/// requirement the interrupt-producer split has. Relaxed ordering is
/// sufficient: one writer, one reader, no data published alongside.
pub struct RawStateLatch(AtomicU8);

impl RawStateLatch {
    /// Create a latch holding [`RawState::Unknown`].
    pub const fn new() -> Self {
        Self(AtomicU8::new(UNKNOWN))
    }

    /// Store a raw sample. Intended for the interrupt context.
    pub fn store(&self, state: RawState) {
        let v = match state {
            RawState::Released => RELEASED,
            RawState::Pressed => PRESSED,
            RawState::Unknown => UNKNOWN,
        };
        self.0.store(v, Ordering::Relaxed);
    }

    /// Load the most recent raw sample.
    ///
    /// [`RawState::Unknown`] until the first store; feeding that into
    /// [`ButtonTracker::set_raw_state`] is a harmless no-op.
    ///
    /// [`ButtonTracker::set_raw_state`]: super::ButtonTracker::set_raw_state
    pub fn load(&self) -> RawState {
        match self.0.load(Ordering::Relaxed) {
            RELEASED => RawState::Released,
            PRESSED => RawState::Pressed,
            _ => RawState::Unknown,
        }
    }
}

impl Default for RawStateLatch {
    fn default() -> Self {
        Self::new()
    }
}
