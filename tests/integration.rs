//! Integration tests for the public button API.
//!
//! Drives [`momentary::Button`] over scripted fake pins - the same
//! injected `embedded-hal` seam the firmware uses, with the level
//! controlled by the test instead of a solder joint.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{Error as _, ErrorKind, ErrorType, InputPin};
use momentary::{Button, ButtonEvent, Pull, RawState};

/// Fake input pin whose level is set by the test.
#[derive(Clone)]
struct FakePin(Rc<Cell<bool>>);

impl FakePin {
    fn new(is_high: bool) -> Self {
        Self(Rc::new(Cell::new(is_high)))
    }

    fn set_high(&self, is_high: bool) {
        self.0.set(is_high);
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Pin whose reads always fail, for the error-propagation path.
struct BrokenPin;

#[derive(Debug, PartialEq, Eq)]
struct BrokenWire;

impl embedded_hal::digital::Error for BrokenWire {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenWire;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenWire)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenWire)
    }
}

#[test]
fn full_press_timeline_on_pulled_up_pin() {
    // Pull-up wiring: pin rests high, low means pressed.
    let pin = FakePin::new(true);
    let handle = pin.clone();
    let mut button = Button::new(pin, Pull::Up);

    assert_eq!(button.poll(0), Ok(ButtonEvent::Idle));

    // Press lands at t=50.
    handle.set_high(false);
    assert_eq!(button.poll(50), Ok(ButtonEvent::InProgress));
    assert_eq!(button.poll(150), Ok(ButtonEvent::Debouncing));
    assert_eq!(button.poll(160), Ok(ButtonEvent::InProgress));
    assert_eq!(button.poll(1000), Ok(ButtonEvent::InProgress));

    // Threshold exceeded: one long press, then dead-time pacing.
    assert_eq!(button.poll(1051), Ok(ButtonEvent::LongPressed));
    assert_eq!(button.poll(1100), Ok(ButtonEvent::InProgress));
    assert_eq!(button.poll(1552), Ok(ButtonEvent::LongPressed));

    // Release after the long press.
    handle.set_high(true);
    assert_eq!(button.poll(1700), Ok(ButtonEvent::LongPressedReleased));
    assert_eq!(button.poll(1850), Ok(ButtonEvent::Idle));

    assert_eq!(button.ready_for_deep_sleep(1900), Ok(true));
    assert_eq!(button.raw_state(), RawState::Released);
}

#[test]
fn short_press_on_pulled_down_pin() {
    // Pull-down wiring: pin rests low, high means pressed.
    let pin = FakePin::new(false);
    let handle = pin.clone();
    let mut button = Button::new(pin, Pull::Down);

    assert_eq!(button.poll(0), Ok(ButtonEvent::Idle));

    handle.set_high(true);
    assert_eq!(button.poll(50), Ok(ButtonEvent::InProgress));

    handle.set_high(false);
    assert_eq!(button.poll(300), Ok(ButtonEvent::ShortPressed));
    assert_eq!(button.poll(450), Ok(ButtonEvent::Idle));
}

#[test]
fn debounce_window_tunable_through_tracker() {
    let pin = FakePin::new(true);
    let handle = pin.clone();
    let mut button = Button::new(pin, Pull::Up);

    assert_eq!(button.poll(0), Ok(ButtonEvent::Idle));
    button.tracker_mut().set_debounce_ms(20);

    handle.set_high(false);
    assert_eq!(button.poll(50), Ok(ButtonEvent::InProgress));
    assert_eq!(button.poll(60), Ok(ButtonEvent::Debouncing));
    assert_eq!(button.poll(71), Ok(ButtonEvent::InProgress));
}

#[test]
fn pin_read_error_propagates() {
    let mut button = Button::new(BrokenPin, Pull::Up);
    let err = button.poll(0).unwrap_err();
    assert_eq!(err, BrokenWire);
    assert_eq!(err.kind(), ErrorKind::Other);

    // Nothing was recorded.
    assert_eq!(button.raw_state(), RawState::Unknown);
}
