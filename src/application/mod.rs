//! Application layer: stateful fields built on the pure formatting domain.
//!
//! Each field owns its canonical value, its display string, and a
//! `CaretSyncController` bound to its own text input. Every handler runs to
//! completion synchronously: re-derive the value, re-render, write the caret
//! once, then notify the host.

pub mod caret;
pub mod currency_field;
pub mod masked_field;
pub mod session;
