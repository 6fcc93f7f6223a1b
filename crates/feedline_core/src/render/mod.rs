//! Pure display mappings used by feed snapshots.
//!
//! # Responsibility
//! - Turn content lines into paragraph/link display forms.
//! - Format publication timestamps as absolute and relative labels.
//!
//! # Invariants
//! - Nothing in this module holds state or fails.

pub mod content;
pub mod date;
