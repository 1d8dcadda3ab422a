//! STM32F103 Blue Pill Short/Long Press Demo
//! =============================================================================================
//!
//! Polls one push button every 10ms and classifies each press as short or long.
//!
//! Hardware Connections:
//!   Button -> Blue Pill
//!      one leg   -> PB15 (internal pull-down)
//!      other leg -> 3V3
//!
//!   Onboard LED: PC13 (active low, no external connection needed)
//!
//! Expected Behavior:
//!   - Short press (under 250ms): LED toggles
//!   - Long press (held 250ms): LED blinks three times, fired while still held
//!   - Every press is logged via defmt RTT
//!
//! Build and flash with `cargo flash`.

#![no_std]
#![no_main]

use defmt::{info, trace, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Flex, Level, Output, Speed};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel};
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use press_classifier::config::{
    BLINK_INTERVAL_MS, LONG_PRESS_BLINKS, POLL_INTERVAL_MS, PRESS_QUEUE_DEPTH, STATUS_INTERVAL_MS,
};
use press_classifier::hardware::gpio_button::GpioButton;
use press_classifier::hardware::gpio_led::GpioLed;
use press_classifier::hardware::traits::Led;
use press_classifier::{PressClassifier, PressKind, Transition};

// Classified presses, from the button task to the LED task
static PRESS_CHANNEL: Channel<ThreadModeRawMutex, PressKind, PRESS_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("Press demo starting");

    let button = GpioButton::new(Flex::new(p.PB15));
    let led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low));

    spawner.spawn(button_task(button)).unwrap();
    spawner.spawn(led_task(led)).unwrap();

    let mut ticker = Ticker::every(Duration::from_millis(STATUS_INTERVAL_MS));
    loop {
        ticker.next().await;
        info!("System status: operational");
    }
}

/// Called from inside `dispatch`, so it must not block the polling loop.
fn report(kind: PressKind) {
    if PRESS_CHANNEL.try_send(kind).is_err() {
        warn!("Press queue full, dropping {}", kind);
    }
}

/// Button Polling Task
///
/// One tick per `POLL_INTERVAL_MS`: sample, then dispatch whatever press
/// completed on this tick.
#[embassy_executor::task]
async fn button_task(button: GpioButton<'static>) {
    let mut classifier = PressClassifier::new(
        button,
        || report(PressKind::Short),
        || report(PressKind::Long),
    );
    let Ok(()) = classifier.configure();

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        let Ok(transition) = classifier.update();
        match transition {
            Transition::JustPressed => trace!("Button down"),
            Transition::JustReleased => trace!("Button up after {} ticks", classifier.tick_count()),
            Transition::StillPressed | Transition::StillReleased => {}
        }

        if let Some(kind) = classifier.dispatch() {
            info!("{} press", kind);
        }

        ticker.next().await;
    }
}

/// LED Feedback Task
///
/// Short press toggles the LED; long press blinks it and restores its state.
#[embassy_executor::task]
async fn led_task(mut led: GpioLed<'static>) {
    loop {
        match PRESS_CHANNEL.receive().await {
            PressKind::Short => led.toggle(),
            PressKind::Long => {
                for _ in 0..LONG_PRESS_BLINKS {
                    led.toggle();
                    Timer::after_millis(BLINK_INTERVAL_MS).await;
                    led.toggle();
                    Timer::after_millis(BLINK_INTERVAL_MS).await;
                }
            }
        }
    }
}
