//! Digital input with polarity and last-good-value retention.
//!
//! Wraps any `embedded_hal` [`InputPin`] and converts the electrical level
//! into a logical "asserted" flag, so the relay logic never has to know
//! that e.g. the manual switch pulls its line to ground.
//!
//! A failed read returns an error from [`DigitalInput::read`]; the
//! infallible [`DigitalInput::sample`] falls back to the previous good
//! level instead.  A flaky pin must not stall the control loop.

use embedded_hal::digital::{Error as _, InputPin};
use log::{info, warn};

use crate::error::{InputChannel, Result, SensorError};

/// Electrical level that means "asserted".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    /// Asserted when the line is pulled low (switch to ground, pull-up).
    ActiveLow,
}

impl Polarity {
    const fn is_asserted(self, high: bool) -> bool {
        match self {
            Self::ActiveHigh => high,
            Self::ActiveLow => !high,
        }
    }
}

pub struct DigitalInput<P> {
    pin: P,
    channel: InputChannel,
    polarity: Polarity,
    /// Last successfully read logical level.  Starts deasserted.
    last: bool,
    failing: bool,
}

impl<P: InputPin> DigitalInput<P> {
    pub fn new(pin: P, channel: InputChannel, polarity: Polarity) -> Self {
        Self {
            pin,
            channel,
            polarity,
            last: false,
            failing: false,
        }
    }

    /// Read the pin.  Logs once per failure streak.
    pub fn read(&mut self) -> Result<bool> {
        match self.pin.is_high() {
            Ok(high) => {
                if self.failing {
                    info!("{}: reads recovered", self.channel);
                    self.failing = false;
                }
                self.last = self.polarity.is_asserted(high);
                Ok(self.last)
            }
            Err(e) => {
                if !self.failing {
                    warn!(
                        "{}: read failed ({:?}), holding last level {}",
                        self.channel,
                        e.kind(),
                        self.last
                    );
                    self.failing = true;
                }
                Err(SensorError::GpioReadFailed(self.channel).into())
            }
        }
    }

    /// Read the pin, falling back to the last good level on error.
    pub fn sample(&mut self) -> bool {
        self.read().unwrap_or(self.last)
    }

    /// Last good logical level without touching the pin.
    pub fn level(&self) -> bool {
        self.last
    }

    pub fn channel(&self) -> InputChannel {
        self.channel
    }
}
