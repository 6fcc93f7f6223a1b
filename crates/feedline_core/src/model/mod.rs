//! Feed domain model.
//!
//! # Responsibility
//! - Define the post and comment records the services operate on.
//!
//! # Invariants
//! - Posts are immutable once constructed and always carry content.
//! - Comments are identified by a stable `CommentId`, never by text.

pub mod comment;
pub mod post;
