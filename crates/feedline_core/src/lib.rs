//! Core state and rendering logic for the Feedline social feed.
//! UI shells dispatch commands here and render the returned snapshots.

pub mod config;
pub mod locale;
pub mod logging;
pub mod model;
pub mod render;
pub mod seed;
pub mod service;
pub mod view;

pub use config::{ConfigError, DraftPolicy, FeedConfig, DEFAULT_SEED_COMMENT};
pub use locale::{Locale, UnknownLocale};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::comment::{CommentEntry, CommentError, CommentId, DeleteRequest};
pub use model::post::{Author, ContentKind, ContentLine, Post, PostId, PostValidationError};
pub use render::content::{render_content, render_line, RenderedLine};
pub use render::date::{format_published, PublishedLabel};
pub use seed::{builtin_feed, builtin_posts, parse_posts_json};
pub use service::feed_service::{CommandOutcome, Feed, FeedCommand, FeedError};
pub use service::post_controller::PostController;
pub use view::{CommentView, FeedView, PostView};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
