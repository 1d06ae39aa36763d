//! Controller configuration parameters
//!
//! Every timing threshold the controller depends on.  These are fixed at
//! build time; the struct exists so tests can shrink the intervals and so
//! the values travel together instead of as loose globals.

use serde::{Deserialize, Serialize};

/// Minimum spacing between two relay writes (relay chatter guard).
pub const RELAY_THROTTLE_MS: u32 = 50;
/// Spacing between two diagnostic reports.
pub const DIAGNOSTIC_INTERVAL_MS: u32 = 2_000;
/// Longest a remote-triggered run may keep the relays energised.
pub const REMOTE_RUN_DURATION_MS: u32 = 3_600 * 1_000;
/// Settle time after power-on before the first input sample.
pub const STARTUP_DELAY_MS: u32 = 2_000;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Relays ---
    /// Throttle interval for non-forced relay writes (milliseconds)
    pub relay_throttle_ms: u32,

    // --- Remote ---
    /// Remote run window (milliseconds)
    pub remote_run_duration_ms: u32,

    // --- Diagnostics ---
    /// Whether the periodic diagnostic report is emitted
    pub diagnostics_enabled: bool,
    /// Diagnostic report interval (milliseconds)
    pub diagnostic_interval_ms: u32,

    // --- Boot ---
    /// Delay before the control loop starts (milliseconds)
    pub startup_delay_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            relay_throttle_ms: RELAY_THROTTLE_MS,
            remote_run_duration_ms: REMOTE_RUN_DURATION_MS,
            diagnostics_enabled: cfg!(feature = "diagnostics"),
            diagnostic_interval_ms: DIAGNOSTIC_INTERVAL_MS,
            startup_delay_ms: STARTUP_DELAY_MS,
        }
    }
}

impl ControllerConfig {
    /// Reject values that would make the control loop misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay_throttle_ms == 0 {
            return Err(ConfigError::ValidationFailed("relay_throttle_ms must be > 0"));
        }
        if self.remote_run_duration_ms == 0 {
            return Err(ConfigError::ValidationFailed("remote_run_duration_ms must be > 0"));
        }
        // Wrapping u32 arithmetic is only unambiguous below 2^31 ms.
        if self.remote_run_duration_ms > i32::MAX as u32 {
            return Err(ConfigError::ValidationFailed(
                "remote_run_duration_ms exceeds clock wrap window",
            ));
        }
        if self.diagnostic_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("diagnostic_interval_ms must be > 0"));
        }
        if self.relay_throttle_ms >= self.diagnostic_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "relay_throttle_ms must be shorter than diagnostic_interval_ms",
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation; the message names it.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}
