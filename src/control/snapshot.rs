//! Per-cycle value types exchanged between the input adapters, the
//! decision engine, and the relay outputs.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sensor snapshot (written by the input adapter; read-only to the logic)
// ---------------------------------------------------------------------------

/// A point-in-time sample of every digital input.
///
/// Values are logical: `true` means the condition is asserted, whatever
/// the electrical level on the pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Dashboard switch requesting gas on.
    pub manual_gas_switch: bool,
    /// Heater controller reports cold mode (no hot run allowed).
    pub heater_cold_mode: bool,
    /// Ignition / engine running.
    pub engine_running: bool,
    /// Remote activation receiver output.
    pub remote_signal: bool,
}

impl SensorSnapshot {
    /// Build a snapshot from the four inputs, in wiring order.
    pub const fn new(
        manual_gas_switch: bool,
        heater_cold_mode: bool,
        engine_running: bool,
        remote_signal: bool,
    ) -> Self {
        Self {
            manual_gas_switch,
            heater_cold_mode,
            engine_running,
            remote_signal,
        }
    }
}

// ---------------------------------------------------------------------------
// Relay command (written by the logic; consumed by the relay outputs)
// ---------------------------------------------------------------------------

/// Desired relay states for one cycle.  `Default` is all off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCommand {
    /// Gas valve relay.
    pub gas: bool,
    /// Heater unit relay.
    pub heater: bool,
}

impl RelayCommand {
    /// Both relays off, the safe default.
    pub const OFF: Self = Self {
        gas: false,
        heater: false,
    };

    pub const fn new(gas: bool, heater: bool) -> Self {
        Self { gas, heater }
    }

    /// True if either relay is energised.
    pub const fn any_on(&self) -> bool {
        self.gas || self.heater
    }
}
