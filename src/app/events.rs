//! Outbound application events.
//!
//! The [`ControllerService`](super::service::ControllerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::control::{RelayCommand, RemoteTimerState};
use crate::diagnostics::DiagnosticReport;
use crate::error::Error;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial timer state).
    Started(RemoteTimerState),

    /// The remote timer moved between states during a cycle.
    RemoteTimerChanged {
        from: RemoteTimerState,
        to: RemoteTimerState,
    },

    /// A relay command different from the previous one reached the outputs.
    RelaysApplied(RelayCommand),

    /// Writing the relays failed; the next due cycle retries.
    ActuationFailed(Error),

    /// Periodic diagnostic report.
    Diagnostics(DiagnosticReport),
}
