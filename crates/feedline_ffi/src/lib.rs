//! Flutter-facing bridge over `feedline_core`.
//!
//! # Responsibility
//! - Hold the process-wide feed session for the UI shell.
//! - Translate UI calls into core commands and snapshots.

pub mod api;
