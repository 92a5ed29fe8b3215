//! Demo firmware: one momentary switch on an nRF52840, with deep sleep.
//!
//! Three tasks realize the producer/consumer split the tracker is
//! built for:
//!
//! - `edge_task` owns the pin; every GPIO edge latches the observed
//!   level into a [`RawStateLatch`], so a press that lands between
//!   polls is not lost.
//! - `poll_task` owns the tracker; it classifies on a fixed cadence,
//!   forwards terminal events to the channel, and - after a long
//!   enough idle span - arms sense wake and enters System OFF.
//! - `event_task` stands in for an application: it logs the events.
//!
//! Wake from System OFF is a reset; the press that woke the chip is
//! then picked up by `edge_task`'s initial level read.

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Pin, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use momentary::button::{self, ButtonEvent, ButtonTracker, RawState, RawStateLatch};
use momentary::{config, power};

/// Most recent raw sample, written by `edge_task`, read by `poll_task`.
static RAW_STATE: RawStateLatch = RawStateLatch::new();

/// Classified events on their way to the application.
static EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, 4> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    info!("momentary demo up, button on P0.{}", config::BUTTON_PIN);

    unwrap!(spawner.spawn(edge_task(p.P0_11.degrade())));
    unwrap!(spawner.spawn(poll_task(EVENTS.sender())));
    unwrap!(spawner.spawn(event_task(EVENTS.receiver())));
}

/// Latch the pin level on every edge (and once at startup, so the
/// level that woke the chip is seen before the first edge).
#[embassy_executor::task]
async fn edge_task(pin: AnyPin) {
    let mut btn = Input::new(pin, Pull::Up);

    RAW_STATE.store(RawState::from_level(btn.is_high(), button::Pull::Up));

    loop {
        btn.wait_for_any_edge().await;
        RAW_STATE.store(RawState::from_level(btn.is_high(), button::Pull::Up));
    }
}

/// Classify on a fixed cadence; decide when System OFF is safe.
#[embassy_executor::task]
async fn poll_task(tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, 4>) {
    let mut tracker = ButtonTracker::new();
    let mut gate = power::SleepGate::new();
    let mut ticker = Ticker::every(Duration::from_millis(config::BUTTON_POLL_MS));

    loop {
        ticker.next().await;

        let now = Instant::now().as_millis() as u32;
        tracker.set_raw_state(RAW_STATE.load());

        let event = tracker.classify(now);
        match event {
            ButtonEvent::ShortPressed
            | ButtonEvent::LongPressed
            | ButtonEvent::LongPressedReleased
            | ButtonEvent::Missed => {
                gate.activity();
                tx.send(event).await;
            }
            ButtonEvent::InProgress | ButtonEvent::Debouncing => gate.activity(),
            ButtonEvent::Idle => {}
        }

        if gate.allows_sleep(event == ButtonEvent::Idle) {
            // Re-poll immediately before the event-unaware state; this
            // is the poll of record for any last-instant edge.
            let now = Instant::now().as_millis() as u32;
            tracker.set_raw_state(RAW_STATE.load());
            if tracker.ready_for_deep_sleep(now) {
                power::arm_wake_on_low(config::BUTTON_PIN);
                power::enter_system_off();
            }
            gate.activity();
        }
    }
}

/// Application stand-in: log every classified event.
#[embassy_executor::task]
async fn event_task(rx: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, 4>) {
    loop {
        let event = rx.receive().await;
        info!("Button: {}", event);
    }
}
