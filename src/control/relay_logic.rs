//! Relay decision engine.
//!
//! Runs **once per cycle** after the inputs are sampled.  Rules are applied
//! in a fixed order and later rules override earlier ones, so the order is
//! the safety priority:
//!
//! | # | Rule                 | Effect                                                   |
//! |---|----------------------|----------------------------------------------------------|
//! | 1 | Default              | gas off, heater off                                      |
//! | 2 | Remote activation    | start / expire the run window; on while counting down    |
//! | 3 | Manual override      | gas on                                                   |
//! | 4 | Cold-mode interlock  | heater off; gas off unless manual                        |
//! | 5 | Latch release        | remote low → clear latch, stop run                       |
//! | 6 | Engine cutoff        | everything off                                           |
//! | 7 | Driving/cold latch   | remote high while driving or cold → block                |
//!
//! Rule 7 never changes this cycle's outputs (rules 4 and 6 already forced
//! them off); it only latches the timer so the request cannot fire later,
//! e.g. the moment the engine stops inside the same run window.

use log::info;

use super::remote_timer::{RemoteTimer, RemoteTimerState};
use super::snapshot::{RelayCommand, SensorSnapshot};

/// Decision engine.  Sole owner of the [`RemoteTimer`].
#[derive(Debug, Clone)]
pub struct RelayLogic {
    timer: RemoteTimer,
}

impl RelayLogic {
    pub fn new(remote_run_duration_ms: u32) -> Self {
        Self {
            timer: RemoteTimer::new(remote_run_duration_ms),
        }
    }

    /// Read-only view of the remote timer.
    pub fn timer(&self) -> &RemoteTimer {
        &self.timer
    }

    /// Compute the relay command for `snap` and advance the remote timer.
    pub fn evaluate(&mut self, snap: &SensorSnapshot, now_ms: u32) -> RelayCommand {
        // 1. Default to off
        let mut cmd = RelayCommand::OFF;

        // 2. Remote activation
        if snap.remote_signal {
            if self.timer.is_running() {
                if self.timer.expired(now_ms) {
                    info!("Remote run window expired, latching off");
                    self.timer.block();
                }
            } else if !self.timer.is_blocked() {
                self.timer.start(now_ms);
            }

            if self.timer.is_running() {
                cmd.gas = true;
                cmd.heater = true;
            }
        }

        // 3. Manual switch turns gas on
        if snap.manual_gas_switch {
            cmd.gas = true;
        }

        // 4. Cold mode: heater never on, gas only with the manual switch
        if snap.heater_cold_mode {
            if !snap.manual_gas_switch {
                cmd.gas = false;
            }
            cmd.heater = false;
        }

        // 5. Remote released: ready for a fresh request
        if !snap.remote_signal && (self.timer.is_blocked() || self.timer.is_running()) {
            self.timer.reset(true);
        }

        // 6. Engine running: everything off
        if snap.engine_running {
            cmd = RelayCommand::OFF;
        }

        // 7. No remote runs armed while driving or in cold mode
        if snap.remote_signal && (snap.engine_running || snap.heater_cold_mode) {
            if self.timer.state() != RemoteTimerState::Blocked {
                info!(
                    "Remote request suppressed (engine={}, cold={})",
                    snap.engine_running, snap.heater_cold_mode
                );
            }
            self.timer.block();
        }

        cmd
    }
}
