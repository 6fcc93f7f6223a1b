//! Feed configuration.
//!
//! # Responsibility
//! - Define typed settings for locale, draft validation and thread seeding.
//! - Load settings from TOML with per-key defaults.
//!
//! # Invariants
//! - Every key is optional; omitted keys fall back to `FeedConfig::default()`.
//! - A `seed_comment` the draft policy rejects disables seeding, so a thread
//!   never starts with a comment its own submit path would refuse.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Comment every new thread starts with.
pub const DEFAULT_SEED_COMMENT: &str = "Post muito bacana, hein?!";

/// Rule deciding which drafts may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPolicy {
    /// Reject empty and whitespace-only drafts.
    #[default]
    RejectBlank,
    /// Reject only the empty string; whitespace is a valid comment.
    RejectEmpty,
}

impl DraftPolicy {
    /// Returns whether `draft` may be submitted under this policy.
    pub fn accepts(self, draft: &str) -> bool {
        match self {
            Self::RejectBlank => !draft.trim().is_empty(),
            Self::RejectEmpty => !draft.is_empty(),
        }
    }
}

/// Settings shared by every post controller of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub locale: Locale,
    pub draft_policy: DraftPolicy,
    pub seed_comment: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            draft_policy: DraftPolicy::default(),
            seed_comment: Some(DEFAULT_SEED_COMMENT.to_string()),
        }
    }
}

impl FeedConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seed comment text, or `None` when seeding is disabled or the text
    /// fails `draft_policy`.
    pub fn seed_comment(&self) -> Option<&str> {
        self.seed_comment
            .as_deref()
            .filter(|value| self.draft_policy.accepts(value))
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(message) => write!(f, "invalid feed config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(_) => None,
        }
    }
}
