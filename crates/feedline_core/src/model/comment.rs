//! Comment entry model.
//!
//! # Responsibility
//! - Hold one comment's text and like counter.
//! - Produce the delete request its owning thread acts on.
//!
//! # Invariants
//! - `id` is generated once and never reused.
//! - `like_count` never decreases; increments saturate at `u32::MAX`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable comment identifier within a thread.
pub type CommentId = Uuid;

/// Comment submission failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    /// Draft is empty (or blank under the default draft policy).
    EmptyInput,
}

impl Display for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "comment text must not be empty"),
        }
    }
}

impl Error for CommentError {}

/// Signal emitted upward when the user asks to remove a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub comment_id: CommentId,
    pub text: String,
}

/// One submitted comment with its like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEntry {
    id: CommentId,
    text: String,
    like_count: u32,
}

impl CommentEntry {
    /// Creates an entry with a generated id and zero likes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an entry with a caller-provided id and zero likes.
    pub fn with_id(id: CommentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            like_count: 0,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    /// Adds one like and returns the new count.
    pub fn like(&mut self) -> u32 {
        self.like_count = self.like_count.saturating_add(1);
        self.like_count
    }

    /// Builds the delete request for this entry without mutating it.
    pub fn request_delete(&self) -> DeleteRequest {
        DeleteRequest {
            comment_id: self.id,
            text: self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommentEntry;

    #[test]
    fn like_saturates_instead_of_wrapping() {
        let mut entry = CommentEntry::new("max");
        entry.like_count = u32::MAX - 1;
        assert_eq!(entry.like(), u32::MAX);
        assert_eq!(entry.like(), u32::MAX);
    }

    #[test]
    fn request_delete_leaves_entry_untouched() {
        let mut entry = CommentEntry::new("tchau");
        entry.like();
        let request = entry.request_delete();
        assert_eq!(request.comment_id, entry.id());
        assert_eq!(request.text, "tchau");
        assert_eq!(entry.like_count(), 1);
    }
}
