//! Outer surfaces: CSV edit scripts in, CSV field states out, JSON field configs.

pub mod config;
pub mod csv;
