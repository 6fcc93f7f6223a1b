//! Per-post comment thread controller.
//!
//! # Responsibility
//! - Own one post's comment collection, draft and validation message.
//! - Validate submissions and apply add/like/delete mutations.
//!
//! # Invariants
//! - New comments are appended; submission order is display order.
//! - The collection never holds an entry rejected by the draft policy.
//! - Like and delete never fail; unknown ids are no-ops.
//! - Comment text never reaches the log, only ids and counts.

use crate::config::{DraftPolicy, FeedConfig};
use crate::locale::Locale;
use crate::model::comment::{CommentEntry, CommentError, CommentId};
use crate::model::post::PostId;
use log::{debug, info};

/// Comment thread state for one post.
#[derive(Debug, Clone)]
pub struct PostController {
    post_id: PostId,
    comments: Vec<CommentEntry>,
    draft: String,
    validation_message: Option<&'static str>,
    draft_policy: DraftPolicy,
    locale: Locale,
}

impl PostController {
    /// Creates a controller seeded with the configured seed comment.
    pub fn new(post_id: PostId, config: &FeedConfig) -> Self {
        let comments = config
            .seed_comment()
            .map(|text| vec![CommentEntry::new(text)])
            .unwrap_or_default();
        Self {
            post_id,
            comments,
            draft: String::new(),
            validation_message: None,
            draft_policy: config.draft_policy,
            locale: config.locale,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Replaces the draft and clears any validation message.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.validation_message = None;
    }

    /// Records the "field required" message for the input control.
    pub fn mark_draft_invalid(&mut self) {
        self.validation_message = Some(self.locale.required_field_message());
    }

    /// Appends the draft as a new comment and clears the draft.
    ///
    /// # Errors
    /// - `CommentError::EmptyInput` when the draft policy rejects the draft.
    ///   The collection and draft are left untouched and the validation
    ///   message is set.
    pub fn submit_comment(&mut self) -> Result<CommentId, CommentError> {
        if !self.draft_policy.accepts(&self.draft) {
            self.mark_draft_invalid();
            debug!(
                "event=comment_submit module=post status=rejected post_id={} reason=empty_input",
                self.post_id
            );
            return Err(CommentError::EmptyInput);
        }

        let entry = CommentEntry::new(std::mem::take(&mut self.draft));
        let comment_id = entry.id();
        self.comments.push(entry);
        self.validation_message = None;
        info!(
            "event=comment_submit module=post status=ok post_id={} comment_id={} count={}",
            self.post_id,
            comment_id,
            self.comments.len()
        );
        Ok(comment_id)
    }

    /// Removes the comment with `comment_id`; returns whether one was removed.
    pub fn delete_comment(&mut self, comment_id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|entry| entry.id() != comment_id);
        let removed = before != self.comments.len();
        info!(
            "event=comment_delete module=post status=ok post_id={} comment_id={} removed={}",
            self.post_id, comment_id, removed
        );
        removed
    }

    /// Removes every comment whose text equals `target` exactly.
    ///
    /// Text-identity deletion: duplicate comments are removed together.
    /// Prefer `delete_comment` for single-entry removal.
    pub fn delete_comments_with_text(&mut self, target: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|entry| entry.text() != target);
        let removed = before - self.comments.len();
        info!(
            "event=comment_delete_by_text module=post status=ok post_id={} removed={}",
            self.post_id, removed
        );
        removed
    }

    /// Likes one comment; returns the new count or `None` for an unknown id.
    pub fn like_comment(&mut self, comment_id: CommentId) -> Option<u32> {
        let count = self
            .comments
            .iter_mut()
            .find(|entry| entry.id() == comment_id)
            .map(CommentEntry::like);
        debug!(
            "event=comment_like module=post status={} post_id={} comment_id={}",
            if count.is_some() { "ok" } else { "missing" },
            self.post_id,
            comment_id
        );
        count
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Whether the current draft would be accepted by `submit_comment`.
    pub fn is_submit_enabled(&self) -> bool {
        self.draft_policy.accepts(&self.draft)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Comments in submission order.
    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }

    pub fn comment(&self, comment_id: CommentId) -> Option<&CommentEntry> {
        self.comments.iter().find(|entry| entry.id() == comment_id)
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation_message
    }
}

#[cfg(test)]
mod tests {
    use super::PostController;
    use crate::config::FeedConfig;

    #[test]
    fn failed_submit_keeps_draft_and_sets_message() {
        let mut controller = PostController::new(1, &FeedConfig::default());
        controller.update_draft("   ");

        assert!(controller.submit_comment().is_err());
        assert_eq!(controller.draft(), "   ");
        assert_eq!(
            controller.validation_message(),
            Some("Esse campo é obrigatório!")
        );
    }

    #[test]
    fn successful_submit_clears_message() {
        let mut controller = PostController::new(1, &FeedConfig::default());
        controller.validation_message = Some("stale");
        controller.draft = "direto".to_string();

        controller.submit_comment().unwrap();
        assert_eq!(controller.validation_message(), None);
    }
}
