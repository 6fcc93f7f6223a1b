//! Feed assembly and command dispatch.
//!
//! # Responsibility
//! - Hold the session's ordered posts and one controller per post id.
//! - Route explicit UI commands to the owning controller.
//! - Assemble render snapshots.
//!
//! # Invariants
//! - Post order is the order supplied at construction.
//! - Post ids are unique; every post has exactly one controller.
//! - Commands never touch a post other than the one they name.

use crate::config::FeedConfig;
use crate::model::comment::{CommentError, CommentId};
use crate::model::post::{Post, PostId};
use crate::service::post_controller::PostController;
use crate::view::{FeedView, PostView};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// UI action addressed to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedCommand {
    UpdateDraft {
        post_id: PostId,
        text: String,
    },
    MarkDraftInvalid {
        post_id: PostId,
    },
    SubmitComment {
        post_id: PostId,
    },
    LikeComment {
        post_id: PostId,
        comment_id: CommentId,
    },
    DeleteComment {
        post_id: PostId,
        comment_id: CommentId,
    },
    /// Text-identity deletion; removes every comment with this exact text.
    DeleteCommentsWithText {
        post_id: PostId,
        text: String,
    },
}

impl FeedCommand {
    /// Post this command is addressed to.
    pub fn post_id(&self) -> PostId {
        match self {
            Self::UpdateDraft { post_id, .. }
            | Self::MarkDraftInvalid { post_id }
            | Self::SubmitComment { post_id }
            | Self::LikeComment { post_id, .. }
            | Self::DeleteComment { post_id, .. }
            | Self::DeleteCommentsWithText { post_id, .. } => *post_id,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::UpdateDraft { .. } => "update_draft",
            Self::MarkDraftInvalid { .. } => "mark_draft_invalid",
            Self::SubmitComment { .. } => "submit_comment",
            Self::LikeComment { .. } => "like_comment",
            Self::DeleteComment { .. } => "delete_comment",
            Self::DeleteCommentsWithText { .. } => "delete_comments_with_text",
        }
    }
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    DraftUpdated,
    DraftMarkedInvalid,
    CommentAdded(CommentId),
    /// New like count, or `None` when the comment was not in the thread.
    CommentLiked(Option<u32>),
    CommentsRemoved(usize),
}

/// Feed construction and dispatch errors.
#[derive(Debug)]
pub enum FeedError {
    /// Command named a post that is not in the feed.
    PostNotFound(PostId),
    /// Two supplied posts share one id.
    DuplicatePostId(PostId),
    /// Comment submission was rejected.
    Comment(CommentError),
    /// Post-list input could not be decoded or validated.
    Decode(String),
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
            Self::DuplicatePostId(id) => write!(f, "duplicate post id: {id}"),
            Self::Comment(err) => write!(f, "{err}"),
            Self::Decode(message) => write!(f, "invalid post list: {message}"),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Comment(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CommentError> for FeedError {
    fn from(value: CommentError) -> Self {
        Self::Comment(value)
    }
}

/// Session feed: ordered posts plus their comment controllers.
#[derive(Debug, Clone)]
pub struct Feed {
    posts: Vec<Post>,
    controllers: BTreeMap<PostId, PostController>,
    config: FeedConfig,
}

impl Feed {
    /// Creates a feed over `posts`, one controller per post.
    ///
    /// # Errors
    /// - `DuplicatePostId` when two posts share an id.
    pub fn new(posts: Vec<Post>, config: FeedConfig) -> Result<Self, FeedError> {
        let mut controllers = BTreeMap::new();
        for post in &posts {
            if controllers.contains_key(&post.id()) {
                return Err(FeedError::DuplicatePostId(post.id()));
            }
            controllers.insert(post.id(), PostController::new(post.id(), &config));
        }
        info!(
            "event=feed_init module=feed status=ok posts={} locale={}",
            posts.len(),
            config.locale
        );
        Ok(Self {
            posts,
            controllers,
            config,
        })
    }

    /// Applies one command to the post it names.
    ///
    /// # Errors
    /// - `PostNotFound` when the command names an unknown post.
    /// - `Comment(EmptyInput)` when a submit is rejected.
    pub fn dispatch(&mut self, command: FeedCommand) -> Result<CommandOutcome, FeedError> {
        let post_id = command.post_id();
        let Some(controller) = self.controllers.get_mut(&post_id) else {
            warn!(
                "event=feed_dispatch module=feed status=error command={} post_id={} reason=post_not_found",
                command.name(),
                post_id
            );
            return Err(FeedError::PostNotFound(post_id));
        };

        let outcome = match command {
            FeedCommand::UpdateDraft { text, .. } => {
                controller.update_draft(text);
                CommandOutcome::DraftUpdated
            }
            FeedCommand::MarkDraftInvalid { .. } => {
                controller.mark_draft_invalid();
                CommandOutcome::DraftMarkedInvalid
            }
            FeedCommand::SubmitComment { .. } => {
                CommandOutcome::CommentAdded(controller.submit_comment()?)
            }
            FeedCommand::LikeComment { comment_id, .. } => {
                CommandOutcome::CommentLiked(controller.like_comment(comment_id))
            }
            FeedCommand::DeleteComment { comment_id, .. } => {
                CommandOutcome::CommentsRemoved(usize::from(controller.delete_comment(comment_id)))
            }
            FeedCommand::DeleteCommentsWithText { text, .. } => {
                CommandOutcome::CommentsRemoved(controller.delete_comments_with_text(&text))
            }
        };
        Ok(outcome)
    }

    /// Builds the render snapshot for every post, relative to `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> FeedView {
        let posts = self
            .posts
            .iter()
            .filter_map(|post| {
                self.controllers
                    .get(&post.id())
                    .map(|controller| PostView::build(post, controller, now, self.config.locale))
            })
            .collect();
        FeedView { posts }
    }

    /// Posts in display order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == post_id)
    }

    pub fn controller(&self, post_id: PostId) -> Option<&PostController> {
        self.controllers.get(&post_id)
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
