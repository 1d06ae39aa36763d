//! Port traits: the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControllerService (domain)
//! ```
//!
//! Driven adapters (inputs, relays, clock, event sinks) implement these
//! traits.  The [`ControllerService`](super::service::ControllerService)
//! consumes them via generics, so the decision logic never touches
//! hardware directly and runs unchanged on the host under test.

use crate::control::{RelayCommand, SensorSnapshot};
use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
pub trait InputPort {
    /// Sample every input and return logical levels.
    ///
    /// Infallible by contract: an adapter that cannot read a pin reports
    /// its last good level for that pin.
    fn sample(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the relays.
pub trait RelayPort {
    /// Drive gas relay, heater relay and the status indicator.
    fn apply(&mut self, cmd: RelayCommand) -> Result<()>;

    /// Last command successfully written, if any.
    fn applied(&self) -> Option<RelayCommand>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter.  Wraps at `u32::MAX`; consumers must
/// compare with `wrapping_sub` (see [`TimerGate`](crate::timer::TimerGate)).
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.  Sinks are pure
/// observers: nothing they do feeds back into the relay logic.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
