//! Post domain model.
//!
//! # Responsibility
//! - Define the immutable post record and its tagged content lines.
//! - Validate posts on construction and on deserialization.
//!
//! # Invariants
//! - `content` is non-empty and kept in display order.
//! - `author.name` is not blank.
//! - Unknown content line tags decode to `ContentKind::Unrecognized`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Post identifier, unique within one feed.
///
/// Signed 64-bit so it crosses the Dart bridge unchanged.
pub type PostId = i64;

/// Post author card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Tag for one content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Paragraph,
    Link,
    /// Any tag this build does not know; skipped by the renderer.
    #[serde(other)]
    Unrecognized,
}

/// One displayable unit of a post body.
///
/// Serialized as `{ "type": ..., "content": ... }` to match feed input data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLine {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "content")]
    pub text: String,
}

impl ContentLine {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Paragraph,
            text: text.into(),
        }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Link,
            text: text.into(),
        }
    }
}

/// Post validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyContent(PostId),
    BlankAuthorName(PostId),
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent(id) => write!(f, "post {id} must have at least one content line"),
            Self::BlankAuthorName(id) => write!(f, "post {id} author name must not be blank"),
        }
    }
}

impl Error for PostValidationError {}

/// Immutable feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostRecord")]
pub struct Post {
    id: PostId,
    author: Author,
    published_at: DateTime<FixedOffset>,
    content: Vec<ContentLine>,
}

/// Unvalidated wire shape; every decoded `Post` passes through `Post::new`.
#[derive(Deserialize)]
struct PostRecord {
    id: PostId,
    author: Author,
    published_at: DateTime<FixedOffset>,
    content: Vec<ContentLine>,
}

impl TryFrom<PostRecord> for Post {
    type Error = PostValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        Self::new(value.id, value.author, value.published_at, value.content)
    }
}

impl Post {
    /// Creates a validated post.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` has no lines.
    /// - `BlankAuthorName` when the author name is blank after trim.
    pub fn new(
        id: PostId,
        author: Author,
        published_at: DateTime<FixedOffset>,
        content: Vec<ContentLine>,
    ) -> Result<Self, PostValidationError> {
        if content.is_empty() {
            return Err(PostValidationError::EmptyContent(id));
        }
        if author.name.trim().is_empty() {
            return Err(PostValidationError::BlankAuthorName(id));
        }
        Ok(Self {
            id,
            author,
            published_at,
            content,
        })
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Publication instant in the offset it was authored in.
    pub fn published_at(&self) -> &DateTime<FixedOffset> {
        &self.published_at
    }

    /// Content lines in display order.
    pub fn content(&self) -> &[ContentLine] {
        &self.content
    }
}
