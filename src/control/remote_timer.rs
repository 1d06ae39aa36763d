//! Remote-run timer with latching block.
//!
//! A remote request opens a bounded run window.  When the window runs
//! out, or when the request arrives while it must not be honoured, the
//! timer latches into `Blocked` and stays there until the remote signal
//! is observed low.
//!
//! ```text
//!            start()                 block()
//!   Idle ─────────────▶ CountingDown ────────▶ Blocked
//!    ▲                      │                     │
//!    │   reset(unlatch)     │                     │
//!    └──────────────────────┴─────────────────────┘
//!              (reset(true) only; reset(false) never clears the latch)
//! ```
//!
//! Transitions are `pub(crate)`: only the relay logic drives them.

use crate::timer::TimerGate;

/// Observable state, derived from the `running` / `blocked` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RemoteTimerState {
    /// No run in progress, remote may start one.
    Idle = 0,
    /// Run window open, relays allowed on.
    CountingDown = 1,
    /// Latched off until the remote signal drops.
    Blocked = 2,
}

/// Run-window timer owned by [`RelayLogic`](super::relay_logic::RelayLogic).
#[derive(Debug, Clone)]
pub struct RemoteTimer {
    running: bool,
    blocked: bool,
    /// Deadline: reset when a run starts, elapsed once the run is over.
    deadline: TimerGate,
}

impl RemoteTimer {
    /// New idle timer with the given run window.
    pub fn new(run_duration_ms: u32) -> Self {
        Self {
            running: false,
            blocked: false,
            deadline: TimerGate::new(run_duration_ms, 0),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> RemoteTimerState {
        match (self.running, self.blocked) {
            (true, _) => RemoteTimerState::CountingDown,
            (false, true) => RemoteTimerState::Blocked,
            (false, false) => RemoteTimerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Configured run window.
    pub fn run_duration_ms(&self) -> u32 {
        self.deadline.interval_ms()
    }

    /// Time left in the current run window; 0 when no run is open.
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        if self.running {
            self.deadline.remaining_ms(now_ms)
        } else {
            0
        }
    }

    /// True when the open run window has reached its deadline.
    pub(crate) fn expired(&self, now_ms: u32) -> bool {
        self.running && self.deadline.is_elapsed(now_ms)
    }

    // ── Transitions ───────────────────────────────────────────

    /// Open a run window.  Only legal from `Idle`.
    pub(crate) fn start(&mut self, now_ms: u32) {
        debug_assert!(!self.blocked, "remote timer started while blocked");
        self.running = true;
        self.deadline.reset(now_ms);
    }

    /// Latch off.  Idempotent.
    pub(crate) fn block(&mut self) {
        self.blocked = true;
        self.reset(false);
    }

    /// Stop any run; clear the latch too when `unlatch` is set.
    pub(crate) fn reset(&mut self, unlatch: bool) {
        self.running = false;
        if unlatch {
            self.blocked = false;
        }
    }
}
