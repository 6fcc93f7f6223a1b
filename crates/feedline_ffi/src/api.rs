//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the feed session to Dart via FRB as sync, use-case functions.
//! - Flatten core views into FRB-friendly records.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation runs under one process-wide lock, so calls from any
//!   isolate are applied one at a time.
//! - The session is created lazily from the built-in feed.

use chrono::Utc;
use feedline_core::{
    builtin_feed, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, CommandOutcome, CommentId, CommentView, Feed, FeedCommand, FeedConfig,
    PostId, PostView, RenderedLine,
};
use log::warn;
use std::sync::{Mutex, PoisonError};

static FEED: Mutex<Option<Feed>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLineItem {
    /// `paragraph|link`.
    pub kind: String,
    pub text: String,
    /// Link destination; `None` for paragraphs.
    pub href: Option<String>,
}

/// One comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCommentItem {
    pub comment_id: String,
    pub text: String,
    pub like_count: u32,
}

/// One post card with its comment form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPostItem {
    pub post_id: i64,
    pub author_name: String,
    pub author_role: String,
    pub avatar_url: String,
    /// Absolute label for the `title` tooltip.
    pub published_title: String,
    /// Relative label shown inline.
    pub published_relative: String,
    /// RFC 3339 value for the `datetime` attribute.
    pub published_iso: String,
    pub lines: Vec<FeedLineItem>,
    pub comments: Vec<FeedCommentItem>,
    pub draft: String,
    pub submit_enabled: bool,
    pub validation_message: Option<String>,
}

/// Snapshot envelope for the whole feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshotResponse {
    pub posts: Vec<FeedPostItem>,
    /// Empty on success; error description otherwise.
    pub message: String,
}

/// Generic action response envelope for feed commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created comment ID for submit calls.
    pub comment_id: Option<String>,
    /// New like count for like calls.
    pub like_count: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl FeedActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            comment_id: None,
            like_count: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            comment_id: None,
            like_count: None,
            message: message.into(),
        }
    }

    fn from_outcome(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::DraftUpdated => Self::success("Draft updated."),
            CommandOutcome::DraftMarkedInvalid => Self::success("Draft marked invalid."),
            CommandOutcome::CommentAdded(comment_id) => Self {
                comment_id: Some(comment_id.to_string()),
                ..Self::success("Comment added.")
            },
            CommandOutcome::CommentLiked(Some(count)) => Self {
                like_count: Some(count),
                ..Self::success("Comment liked.")
            },
            CommandOutcome::CommentLiked(None) => Self::failure("Comment not found."),
            CommandOutcome::CommentsRemoved(count) => {
                Self::success(format!("Removed {count} comment(s)."))
            }
        }
    }
}

/// Rebuilds the session from the built-in posts.
///
/// `config_toml` overrides the default feed config when provided.
///
/// # FFI contract
/// - Drops all comments, drafts and likes of the previous session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_reset(config_toml: Option<String>) -> FeedActionResponse {
    let config = match config_toml.as_deref().map(FeedConfig::from_toml_str) {
        Some(Ok(config)) => config,
        Some(Err(err)) => return FeedActionResponse::failure(format!("feed_reset failed: {err}")),
        None => FeedConfig::default(),
    };
    match builtin_feed(config) {
        Ok(feed) => {
            *lock_feed() = Some(feed);
            FeedActionResponse::success("Feed reset.")
        }
        Err(err) => FeedActionResponse::failure(format!("feed_reset failed: {err}")),
    }
}

/// Returns the render snapshot of every post, relative to the current time.
///
/// # FFI contract
/// - Read-only; relative labels are recomputed on every call.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_snapshot() -> FeedSnapshotResponse {
    match with_feed(|feed| Ok(feed.snapshot(Utc::now()))) {
        Ok(view) => FeedSnapshotResponse {
            posts: view.posts.into_iter().map(to_post_item).collect(),
            message: String::new(),
        },
        Err(err) => FeedSnapshotResponse {
            posts: Vec::new(),
            message: format!("feed_snapshot failed: {err}"),
        },
    }
}

/// Replaces one post's draft text.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_update_draft(post_id: i64, text: String) -> FeedActionResponse {
    run_command("feed_update_draft", post_id, |post_id| {
        Ok(FeedCommand::UpdateDraft { post_id, text })
    })
}

/// Records the "field required" message after an invalid submit attempt.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_mark_draft_invalid(post_id: i64) -> FeedActionResponse {
    run_command("feed_mark_draft_invalid", post_id, |post_id| {
        Ok(FeedCommand::MarkDraftInvalid { post_id })
    })
}

/// Submits one post's draft as a new comment.
///
/// # FFI contract
/// - Returns the created comment ID on success.
/// - Blank drafts fail with `ok=false`; the snapshot then carries the
///   validation message.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_submit_comment(post_id: i64) -> FeedActionResponse {
    run_command("feed_submit_comment", post_id, |post_id| {
        Ok(FeedCommand::SubmitComment { post_id })
    })
}

/// Likes one comment and returns the new count.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_like_comment(post_id: i64, comment_id: String) -> FeedActionResponse {
    run_command("feed_like_comment", post_id, |post_id| {
        Ok(FeedCommand::LikeComment {
            post_id,
            comment_id: parse_comment_id(&comment_id)?,
        })
    })
}

/// Deletes one comment by ID; unknown IDs remove nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_delete_comment(post_id: i64, comment_id: String) -> FeedActionResponse {
    run_command("feed_delete_comment", post_id, |post_id| {
        Ok(FeedCommand::DeleteComment {
            post_id,
            comment_id: parse_comment_id(&comment_id)?,
        })
    })
}

fn run_command(
    name: &str,
    post_id: PostId,
    build: impl FnOnce(PostId) -> Result<FeedCommand, String>,
) -> FeedActionResponse {
    let result = build(post_id).and_then(|command| {
        with_feed(|feed| feed.dispatch(command).map_err(|err| err.to_string()))
    });
    match result {
        Ok(outcome) => FeedActionResponse::from_outcome(outcome),
        Err(err) => FeedActionResponse::failure(format!("{name} failed: {err}")),
    }
}

fn lock_feed() -> std::sync::MutexGuard<'static, Option<Feed>> {
    FEED.lock().unwrap_or_else(|poisoned| {
        warn!("event=feed_lock module=ffi status=recovered reason=poisoned");
        PoisonError::into_inner(poisoned)
    })
}

fn with_feed<T>(f: impl FnOnce(&mut Feed) -> Result<T, String>) -> Result<T, String> {
    let mut guard = lock_feed();
    if guard.is_none() {
        let feed = builtin_feed(FeedConfig::default())
            .map_err(|err| format!("feed init failed: {err}"))?;
        *guard = Some(feed);
    }
    let feed = guard
        .as_mut()
        .ok_or_else(|| "feed session unavailable".to_string())?;
    f(feed)
}

fn parse_comment_id(raw: &str) -> Result<CommentId, String> {
    uuid::Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid comment id `{raw}`: {err}"))
}

fn to_post_item(view: PostView) -> FeedPostItem {
    FeedPostItem {
        post_id: view.id,
        author_name: view.author.name,
        author_role: view.author.role,
        avatar_url: view.author.avatar_url,
        published_title: view.published.absolute,
        published_relative: view.published.relative,
        published_iso: view.published.iso,
        lines: view.lines.into_iter().map(to_line_item).collect(),
        comments: view.comments.into_iter().map(to_comment_item).collect(),
        draft: view.draft,
        submit_enabled: view.submit_enabled,
        validation_message: view.validation_message,
    }
}

fn to_line_item(line: RenderedLine) -> FeedLineItem {
    match line {
        RenderedLine::Paragraph { text } => FeedLineItem {
            kind: "paragraph".to_string(),
            text,
            href: None,
        },
        RenderedLine::Link { text, href } => FeedLineItem {
            kind: "link".to_string(),
            text,
            href: Some(href),
        },
    }
}

fn to_comment_item(comment: CommentView) -> FeedCommentItem {
    FeedCommentItem {
        comment_id: comment.id.to_string(),
        text: comment.text,
        like_count: comment.like_count,
    }
}
