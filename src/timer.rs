//! Periodic timer gate.
//!
//! A [`TimerGate`] answers one question: "has at least `interval_ms`
//! passed since I was last reset?"  It never fires callbacks and never
//! blocks; the main loop polls it every cycle.
//!
//! Time is a free-running `u32` millisecond counter supplied by the
//! caller (see [`Clock`](crate::app::ports::Clock)).  All comparisons use
//! `wrapping_sub`, so the counter rolling over after ~49.7 days does not
//! produce a spurious or missed expiry for any interval below 2^31 ms.

/// Interval gate over a wrapping millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerGate {
    interval_ms: u32,
    last_reset_ms: u32,
}

impl TimerGate {
    /// Create a gate whose reference point is `now_ms`.
    pub const fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            interval_ms,
            last_reset_ms: now_ms,
        }
    }

    /// Configured interval.
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds since the last reset.
    pub fn since_reset_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_reset_ms)
    }

    /// True once the configured interval has elapsed.
    pub fn is_elapsed(&self, now_ms: u32) -> bool {
        self.has_elapsed(self.interval_ms, now_ms)
    }

    /// True if at least `interval_ms` has passed since the last reset.
    pub fn has_elapsed(&self, interval_ms: u32, now_ms: u32) -> bool {
        self.since_reset_ms(now_ms) >= interval_ms
    }

    /// Move the reference point to `now_ms`.
    pub fn reset(&mut self, now_ms: u32) {
        self.last_reset_ms = now_ms;
    }

    /// Milliseconds left until the configured interval elapses (0 once it has).
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.interval_ms.saturating_sub(self.since_reset_ms(now_ms))
    }

    /// Check-and-rearm: returns `true` and resets when elapsed.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.is_elapsed(now_ms) {
            self.reset(now_ms);
            true
        } else {
            false
        }
    }
}
