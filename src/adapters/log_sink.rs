//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (UART via `esp_idf_logger` on the device).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | remote_timer={:?}", state);
            }
            AppEvent::RemoteTimerChanged { from, to } => {
                info!("TIMER | {:?} -> {:?}", from, to);
            }
            AppEvent::RelaysApplied(cmd) => {
                info!("APPLY | gas={} heater={}", cmd.gas, cmd.heater);
            }
            AppEvent::ActuationFailed(e) => {
                warn!("APPLY | failed: {}", e);
            }
            AppEvent::Diagnostics(report) => {
                info!("{}", report.render());
            }
        }
    }
}
