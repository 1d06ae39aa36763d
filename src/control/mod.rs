//! Control core: pure decision logic, zero I/O.
//!
//! [`relay_logic`] turns a [`SensorSnapshot`] into a [`RelayCommand`] and
//! drives the [`remote_timer`] latch.  Nothing here touches hardware or
//! reads a clock; time arrives as a `now_ms` argument.

pub mod relay_logic;
pub mod remote_timer;
pub mod snapshot;

pub use relay_logic::RelayLogic;
pub use remote_timer::{RemoteTimer, RemoteTimerState};
pub use snapshot::{RelayCommand, SensorSnapshot};
