//! GPIO drivers built on the `embedded-hal` digital traits.

pub mod digital_input;
pub mod relay;
