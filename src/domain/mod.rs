//! Pure formatting values and the ports the host platform provides.
//!
//! Nothing in this module performs I/O or fails: every edit maps to a
//! displayable value.

pub mod currency;
pub mod mask;
pub mod ports;
