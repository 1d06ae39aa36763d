//! Runtime diagnostics.
//!
//! A [`DiagnosticReport`] captures what the controller saw and decided on
//! its latest cycle.  The service emits one every diagnostic interval when
//! the `diagnostics` cargo feature is enabled; the log sink prints it on
//! the serial console.  Read-only: nothing here feeds back into control.

use core::fmt::Write;

use serde::Serialize;

use crate::control::{RelayCommand, SensorSnapshot};

/// Capacity of a rendered report line.
pub const REPORT_LINE_CAP: usize = 160;

/// Point-in-time view of inputs, outputs and the remote timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub uptime_ms: u32,
    pub cycles: u64,
    pub snapshot: SensorSnapshot,
    pub command: RelayCommand,
    pub timer_running: bool,
    pub timer_blocked: bool,
    pub timer_remaining_ms: u32,
}

impl DiagnosticReport {
    /// Render as a single log line.
    pub fn render(&self) -> heapless::String<REPORT_LINE_CAP> {
        let mut line = heapless::String::new();
        let _ = write!(
            line,
            "DIAG | up={}s cycles={} | in: manual={} cold={} engine={} remote={} | \
             out: gas={} heater={} | timer: running={} blocked={} left={}s",
            self.uptime_ms / 1000,
            self.cycles,
            u8::from(self.snapshot.manual_gas_switch),
            u8::from(self.snapshot.heater_cold_mode),
            u8::from(self.snapshot.engine_running),
            u8::from(self.snapshot.remote_signal),
            u8::from(self.command.gas),
            u8::from(self.command.heater),
            u8::from(self.timer_running),
            u8::from(self.timer_blocked),
            self.timer_remaining_ms / 1000,
        );
        line
    }
}
