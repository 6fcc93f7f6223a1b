//! Render contracts handed to UI shells.
//!
//! Snapshots are plain owned data; they never borrow feed state, so a shell
//! can keep one across dispatches.

use crate::locale::Locale;
use crate::model::comment::{CommentEntry, CommentId};
use crate::model::post::{Author, Post, PostId};
use crate::render::content::{render_content, RenderedLine};
use crate::render::date::{format_published, PublishedLabel};
use crate::service::post_controller::PostController;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whole-feed snapshot in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    pub posts: Vec<PostView>,
}

/// One post with its thread and comment form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: PostId,
    pub author: Author,
    pub published: PublishedLabel,
    pub lines: Vec<RenderedLine>,
    pub comments: Vec<CommentView>,
    pub draft: String,
    pub submit_enabled: bool,
    pub validation_message: Option<String>,
}

/// One comment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: CommentId,
    pub text: String,
    pub like_count: u32,
}

impl From<&CommentEntry> for CommentView {
    fn from(entry: &CommentEntry) -> Self {
        Self {
            id: entry.id(),
            text: entry.text().to_string(),
            like_count: entry.like_count(),
        }
    }
}

impl PostView {
    /// Builds the view for `post` from its controller state at `now`.
    pub fn build(
        post: &Post,
        controller: &PostController,
        now: DateTime<Utc>,
        locale: Locale,
    ) -> Self {
        Self {
            id: post.id(),
            author: post.author().clone(),
            published: format_published(post.published_at(), now, locale),
            lines: render_content(post.content()),
            comments: controller.comments().iter().map(CommentView::from).collect(),
            draft: controller.draft().to_string(),
            submit_enabled: controller.is_submit_enabled(),
            validation_message: controller.validation_message().map(str::to_string),
        }
    }
}
