//! Binary-local application orchestration.
//!
//! `main.rs` stays a thin entrypoint; wiring and check-mode reporting live
//! here.

pub(crate) mod check;
pub(crate) mod entry;
pub(crate) mod startup;
