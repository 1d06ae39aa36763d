//! GPIO pin assignments for the heater controller board.
//!
//! Single source of truth: the hardware adapters reference this module
//! rather than hard-coding pin numbers.

use crate::drivers::digital_input::Polarity;

// ---------------------------------------------------------------------------
// Relay outputs (active HIGH)
// ---------------------------------------------------------------------------

/// Gas valve relay.
pub const RELAY_GAS_GPIO: i32 = 7;
/// Heater relay (the channel closest to the power input).
pub const RELAY_HEATER_GPIO: i32 = 8;
/// Status LED, mirrors the gas relay.
pub const STATUS_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Dashboard gas switch, pulls the line to ground.  Internal pull-up.
pub const INPUT_MANUAL_GAS_SWITCH_GPIO: i32 = 6;
pub const MANUAL_GAS_SWITCH_POLARITY: Polarity = Polarity::ActiveLow;

/// Cold-mode output of the heater's own controller.
pub const INPUT_HEATER_COLD_MODE_GPIO: i32 = 5;
pub const HEATER_COLD_MODE_POLARITY: Polarity = Polarity::ActiveHigh;

/// Ignition sense.
pub const INPUT_ENGINE_RUNNING_GPIO: i32 = 4;
pub const ENGINE_RUNNING_POLARITY: Polarity = Polarity::ActiveHigh;

/// Remote receiver output.
pub const INPUT_REMOTE_SIGNAL_GPIO: i32 = 11;
pub const REMOTE_SIGNAL_POLARITY: Polarity = Polarity::ActiveHigh;
