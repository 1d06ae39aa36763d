//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to                    |
//! |------------|------------|--------------------------------|
//! | `hardware` | InputPort  | GPIO inputs (embedded-hal)     |
//! |            | RelayPort  | GPIO relay outputs             |
//! | `log_sink` | EventSink  | Serial log output              |
//! | `time`     | Clock      | ESP32 high-resolution timer    |

pub mod hardware;
pub mod log_sink;
pub mod time;
