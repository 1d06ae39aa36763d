//! heaterctl firmware entry point
//!
//! Hexagonal architecture around a single cooperative polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareInputs    RelayBank     LogEventSink   Esp32Time      │
//! │  (InputPort)       (RelayPort)   (EventSink)    (Clock)        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          ControllerService (pure logic)                │    │
//! │  │  RelayLogic · RemoteTimer · TimerGates                 │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};

use heaterctl::adapters::hardware::{HardwareInputs, RelayBank};
use heaterctl::adapters::log_sink::LogEventSink;
use heaterctl::adapters::time::Esp32TimeAdapter;
use heaterctl::app::ports::{Clock, RelayPort};
use heaterctl::app::service::ControllerService;
use heaterctl::config::ControllerConfig;
use heaterctl::control::RelayCommand;
use heaterctl::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  heaterctl v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = ControllerConfig::default();
    config.validate()?;

    // ── 2. Relay outputs, forced off before anything else ─────
    // SAFETY: each GPIO number in `pins` is claimed exactly once, here,
    // and no other driver in the firmware touches these pins.
    let (gas, heater, led) = unsafe {
        (
            AnyOutputPin::new(pins::RELAY_GAS_GPIO),
            AnyOutputPin::new(pins::RELAY_HEATER_GPIO),
            AnyOutputPin::new(pins::STATUS_LED_GPIO),
        )
    };
    let mut relays = RelayBank::new(
        PinDriver::output(gas)?,
        PinDriver::output(heater)?,
        PinDriver::output(led)?,
    );
    if let Err(e) = relays.apply(RelayCommand::OFF) {
        warn!("Initial relay reset failed: {}", e);
    }

    // ── 3. Inputs ─────────────────────────────────────────────
    // SAFETY: as above, one claim per input GPIO.
    let (manual, cold, engine, remote) = unsafe {
        (
            AnyIOPin::new(pins::INPUT_MANUAL_GAS_SWITCH_GPIO),
            AnyIOPin::new(pins::INPUT_HEATER_COLD_MODE_GPIO),
            AnyIOPin::new(pins::INPUT_ENGINE_RUNNING_GPIO),
            AnyIOPin::new(pins::INPUT_REMOTE_SIGNAL_GPIO),
        )
    };
    let mut manual = PinDriver::input(manual)?;
    manual.set_pull(Pull::Up)?;
    let mut inputs = HardwareInputs::new(
        manual,
        PinDriver::input(cold)?,
        PinDriver::input(engine)?,
        PinDriver::input(remote)?,
    );

    // ── 4. Let the inputs settle ──────────────────────────────
    FreeRtos::delay_ms(config.startup_delay_ms);

    // ── 5. Construct app service ──────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();
    let mut app = ControllerService::new(config, clock.now_ms());
    app.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut inputs, &mut relays, &mut log_sink, clock.now_ms());

        // One FreeRTOS tick so the idle task (and its watchdog) runs.
        FreeRtos::delay_ms(1);
    }
}
