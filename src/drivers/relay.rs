//! Relay driver over an `embedded_hal` [`OutputPin`].
//!
//! Active-high: the pin goes HIGH to energise the relay coil.
//! This is a dumb actuator; the interlocks live in the relay logic.

use embedded_hal::digital::{OutputPin, PinState};
use log::debug;

use crate::error::{ActuatorError, OutputChannel};

pub struct Relay<P> {
    pin: P,
    channel: OutputChannel,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Wrap `pin`.  The relay is assumed off until the first [`set`](Self::set).
    pub fn new(pin: P, channel: OutputChannel) -> Self {
        Self {
            pin,
            channel,
            on: false,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.pin
            .set_state(PinState::from(on))
            .map_err(|_| ActuatorError::GpioWriteFailed(self.channel))?;
        if on != self.on {
            debug!("{} -> {}", self.channel, if on { "ON" } else { "OFF" });
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
