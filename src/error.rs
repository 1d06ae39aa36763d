//! Error types for the hardware-facing side of the controller.
//!
//! The decision core is total and never fails.  Only the adapters that
//! touch GPIO can, and their failures funnel into [`Error`].  All variants
//! are `Copy` so they pass through the control loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible hardware operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input could not be sampled.
    Sensor(SensorError),
    /// A relay output could not be driven.
    Actuator(ActuatorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// Which digital input a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChannel {
    ManualGasSwitch,
    HeaterColdMode,
    EngineRunning,
    RemoteSignal,
}

impl fmt::Display for InputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualGasSwitch => write!(f, "manual gas switch"),
            Self::HeaterColdMode => write!(f, "heater cold mode"),
            Self::EngineRunning => write!(f, "engine running"),
            Self::RemoteSignal => write!(f, "remote signal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// GPIO level read returned an error.
    GpioReadFailed(InputChannel),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed(ch) => write!(f, "GPIO read failed ({ch})"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

/// Which output a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    GasRelay,
    HeaterRelay,
    StatusLed,
}

impl fmt::Display for OutputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GasRelay => write!(f, "gas relay"),
            Self::HeaterRelay => write!(f, "heater relay"),
            Self::StatusLed => write!(f, "status LED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO level write returned an error.
    GpioWriteFailed(OutputChannel),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed(ch) => write!(f, "GPIO write failed ({ch})"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
