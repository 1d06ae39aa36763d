//! Application layer: orchestration around the control core.
//!
//! The decision rules live in [`crate::control`]; this module sequences
//! one control cycle and talks to the outside world only through the
//! **port traits** in [`ports`].

pub mod events;
pub mod ports;
pub mod service;
