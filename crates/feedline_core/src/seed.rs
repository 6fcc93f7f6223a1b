//! Built-in feed data and external post-list decoding.
//!
//! # Invariants
//! - Decoded posts pass the same validation as `Post::new`.
//! - The built-in feed keeps the original publication order and offsets.

use crate::config::FeedConfig;
use crate::model::post::Post;
use crate::service::feed_service::{Feed, FeedError};

const BUILTIN_FEED_JSON: &str = r#"[
  {
    "id": 1,
    "author": {
      "name": "Jean Michel Biz",
      "role": "Full Stack Developer",
      "avatar_url": "https://github.com/jeanmbiz.png"
    },
    "published_at": "2025-01-20T20:00:00-03:00",
    "content": [
      { "type": "paragraph", "content": "Fala galera 👋" },
      { "type": "paragraph", "content": "Acabei de subir mais um projeto no meu portifa. O nome do projeto é PostDate 🚀" }
    ]
  },
  {
    "id": 2,
    "author": {
      "name": "Edson Costa",
      "role": "Developer Support Engineer",
      "avatar_url": "https://github.com/edtech1985.png"
    },
    "published_at": "2025-01-22T20:00:00-03:00",
    "content": [
      { "type": "paragraph", "content": "🚀 Nova jornada profissional na Digibee!" },
      { "type": "paragraph", "content": "É com muita alegria que compartilho minha mais recente conquista: me juntei à Digibee como Engenheiro de Suporte ao Desenvolvedor! 🎉 Essa nova etapa tem sido desafiadora e empolgante, e eu não poderia estar mais feliz em contribuir para uma empresa tão inovadora e visionária." }
    ]
  }
]"#;

/// Decodes a JSON array of posts.
///
/// # Errors
/// - `FeedError::Decode` on malformed JSON or a post failing validation.
pub fn parse_posts_json(json: &str) -> Result<Vec<Post>, FeedError> {
    serde_json::from_str(json).map_err(|err| FeedError::Decode(err.to_string()))
}

/// Posts shipped with the application.
pub fn builtin_posts() -> Result<Vec<Post>, FeedError> {
    parse_posts_json(BUILTIN_FEED_JSON)
}

/// Feed over the built-in posts.
pub fn builtin_feed(config: FeedConfig) -> Result<Feed, FeedError> {
    Feed::new(builtin_posts()?, config)
}
