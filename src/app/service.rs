//! Application service, the per-cycle orchestrator.
//!
//! [`ControllerService`] owns the decision engine and the two periodic
//! gates (relay throttle, diagnostic report).  All I/O flows through port
//! traits passed in at call sites, so the whole cycle is testable with
//! mock adapters and a fake clock.
//!
//! ```text
//!  InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                │   ControllerService     │
//!  RelayPort ◀── │ RelayLogic · TimerGates │
//!                └────────────────────────┘
//! ```
//!
//! One cycle is strictly: sample → decide → actuate → diagnose.

use log::{info, warn};

use crate::config::ControllerConfig;
use crate::control::{RelayCommand, RelayLogic, RemoteTimerState, SensorSnapshot};
use crate::diagnostics::DiagnosticReport;
use crate::timer::TimerGate;

use super::events::AppEvent;
use super::ports::{EventSink, InputPort, RelayPort};

// ───────────────────────────────────────────────────────────────
// ControllerService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one control cycle at a time.
pub struct ControllerService {
    config: ControllerConfig,
    logic: RelayLogic,
    /// Relay chatter guard.
    relay_gate: TimerGate,
    diagnostic_gate: TimerGate,
    snapshot: SensorSnapshot,
    command: RelayCommand,
    cycle_count: u64,
}

impl ControllerService {
    /// Construct the service.  Both gates take `now_ms` as their
    /// reference point.
    pub fn new(config: ControllerConfig, now_ms: u32) -> Self {
        Self {
            logic: RelayLogic::new(config.remote_run_duration_ms),
            relay_gate: TimerGate::new(config.relay_throttle_ms, now_ms),
            diagnostic_gate: TimerGate::new(config.diagnostic_interval_ms, now_ms),
            snapshot: SensorSnapshot::default(),
            command: RelayCommand::OFF,
            cycle_count: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let state = self.timer_state();
        sink.emit(&AppEvent::Started(state));
        info!(
            "ControllerService started (throttle={}ms, run window={}s, diagnostics={})",
            self.config.relay_throttle_ms,
            self.config.remote_run_duration_ms / 1000,
            self.config.diagnostics_enabled
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle and return the command it computed.
    ///
    /// The command reaches the relays immediately while the heater is in
    /// cold mode (hot and cold must never be requested together),
    /// otherwise at most once per throttle interval.
    pub fn tick(
        &mut self,
        inputs: &mut impl InputPort,
        relays: &mut impl RelayPort,
        sink: &mut impl EventSink,
        now_ms: u32,
    ) -> RelayCommand {
        self.cycle_count += 1;

        // 1. Sample inputs
        let snapshot = inputs.sample();
        self.snapshot = snapshot;

        // 2. Decide
        let before = self.timer_state();
        self.command = self.logic.evaluate(&snapshot, now_ms);
        let after = self.timer_state();
        if after != before {
            info!("Remote timer {:?} -> {:?}", before, after);
            sink.emit(&AppEvent::RemoteTimerChanged {
                from: before,
                to: after,
            });
        }

        // 3. Actuate
        let due = self.relay_gate.is_elapsed(now_ms);
        if snapshot.heater_cold_mode || due {
            self.actuate(relays, sink);
        }
        if due {
            self.relay_gate.reset(now_ms);
        }

        // 4. Diagnose
        if self.diagnostic_gate.poll(now_ms) && self.config.diagnostics_enabled {
            sink.emit(&AppEvent::Diagnostics(self.build_report(now_ms)));
        }

        self.command
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a diagnostic report from the latest cycle.
    pub fn build_report(&self, now_ms: u32) -> DiagnosticReport {
        let timer = self.logic.timer();
        DiagnosticReport {
            uptime_ms: now_ms,
            cycles: self.cycle_count,
            snapshot: self.snapshot,
            command: self.command,
            timer_running: timer.is_running(),
            timer_blocked: timer.is_blocked(),
            timer_remaining_ms: timer.remaining_ms(now_ms),
        }
    }

    pub fn timer_state(&self) -> RemoteTimerState {
        self.logic.timer().state()
    }

    /// Inputs seen by the latest cycle.
    pub fn last_snapshot(&self) -> SensorSnapshot {
        self.snapshot
    }

    /// Command computed by the latest cycle (applied or not).
    pub fn last_command(&self) -> RelayCommand {
        self.command
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn actuate(&self, relays: &mut impl RelayPort, sink: &mut impl EventSink) {
        let previous = relays.applied();
        match relays.apply(self.command) {
            Ok(()) => {
                if previous != Some(self.command) {
                    sink.emit(&AppEvent::RelaysApplied(self.command));
                }
            }
            Err(e) => {
                warn!("Relay write failed: {}", e);
                sink.emit(&AppEvent::ActuationFailed(e));
            }
        }
    }
}
