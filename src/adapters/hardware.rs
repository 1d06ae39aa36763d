//! Hardware adapter: bridges GPIO pins to the domain port traits.
//!
//! [`HardwareInputs`] owns the four input drivers and exposes them through
//! [`InputPort`]; [`RelayBank`] owns the relay drivers and exposes them
//! through [`RelayPort`].  Both are generic over `embedded_hal` pins, so
//! the same code runs on `esp-idf-hal` `PinDriver`s and on test doubles.

use embedded_hal::digital::{InputPin, OutputPin};
use log::info;

use crate::app::ports::{InputPort, RelayPort};
use crate::control::{RelayCommand, SensorSnapshot};
use crate::drivers::digital_input::DigitalInput;
use crate::drivers::relay::Relay;
use crate::error::{InputChannel, OutputChannel, Result};
use crate::pins;

// ── Inputs ────────────────────────────────────────────────────

/// The four digital inputs, sampled together once per cycle.
pub struct HardwareInputs<M, C, E, R> {
    manual_gas_switch: DigitalInput<M>,
    heater_cold_mode: DigitalInput<C>,
    engine_running: DigitalInput<E>,
    remote_signal: DigitalInput<R>,
}

impl<M, C, E, R> HardwareInputs<M, C, E, R>
where
    M: InputPin,
    C: InputPin,
    E: InputPin,
    R: InputPin,
{
    /// Wrap raw pins using the board polarities from [`pins`].
    pub fn new(manual_gas_switch: M, heater_cold_mode: C, engine_running: E, remote_signal: R) -> Self {
        Self {
            manual_gas_switch: DigitalInput::new(
                manual_gas_switch,
                InputChannel::ManualGasSwitch,
                pins::MANUAL_GAS_SWITCH_POLARITY,
            ),
            heater_cold_mode: DigitalInput::new(
                heater_cold_mode,
                InputChannel::HeaterColdMode,
                pins::HEATER_COLD_MODE_POLARITY,
            ),
            engine_running: DigitalInput::new(
                engine_running,
                InputChannel::EngineRunning,
                pins::ENGINE_RUNNING_POLARITY,
            ),
            remote_signal: DigitalInput::new(
                remote_signal,
                InputChannel::RemoteSignal,
                pins::REMOTE_SIGNAL_POLARITY,
            ),
        }
    }
}

impl<M, C, E, R> InputPort for HardwareInputs<M, C, E, R>
where
    M: InputPin,
    C: InputPin,
    E: InputPin,
    R: InputPin,
{
    fn sample(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            manual_gas_switch: self.manual_gas_switch.sample(),
            heater_cold_mode: self.heater_cold_mode.sample(),
            engine_running: self.engine_running.sample(),
            remote_signal: self.remote_signal.sample(),
        }
    }
}

// ── Relays ────────────────────────────────────────────────────

/// Gas relay, heater relay and the status LED that mirrors gas.
pub struct RelayBank<G, H, L> {
    gas: Relay<G>,
    heater: Relay<H>,
    status_led: Relay<L>,
    applied: Option<RelayCommand>,
}

impl<G, H, L> RelayBank<G, H, L>
where
    G: OutputPin,
    H: OutputPin,
    L: OutputPin,
{
    pub fn new(gas: G, heater: H, status_led: L) -> Self {
        Self {
            gas: Relay::new(gas, OutputChannel::GasRelay),
            heater: Relay::new(heater, OutputChannel::HeaterRelay),
            status_led: Relay::new(status_led, OutputChannel::StatusLed),
            applied: None,
        }
    }
}

impl<G, H, L> RelayPort for RelayBank<G, H, L>
where
    G: OutputPin,
    H: OutputPin,
    L: OutputPin,
{
    fn apply(&mut self, cmd: RelayCommand) -> Result<()> {
        // Every output is attempted even if an earlier one fails, so a
        // stuck gas pin never prevents the heater from being switched off.
        let gas = self.gas.set(cmd.gas);
        let heater = self.heater.set(cmd.heater);
        let led = self.status_led.set(cmd.gas);
        gas.and(heater).and(led)?;

        if self.applied != Some(cmd) {
            info!(
                "RELAYS | gas={} heater={}",
                if cmd.gas { "ON" } else { "OFF" },
                if cmd.heater { "ON" } else { "OFF" }
            );
        }
        self.applied = Some(cmd);
        Ok(())
    }

    fn applied(&self) -> Option<RelayCommand> {
        self.applied
    }
}
