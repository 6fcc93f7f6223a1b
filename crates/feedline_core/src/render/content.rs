//! Content line renderer.
//!
//! # Invariants
//! - Output order equals input order minus skipped lines.
//! - `ContentKind::Unrecognized` renders nothing.
//! - Link targets fall back to `#` when the text is not a web address.

use crate::model::post::{ContentKind, ContentLine};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Link target used when none can be derived from the text.
pub const PLACEHOLDER_HREF: &str = "#";

static SCHEME_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid scheme url regex"));
static BARE_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}(?:[/?#]\S*)?$")
        .expect("valid bare domain regex")
});

/// Display form of one content line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedLine {
    Paragraph { text: String },
    Link { text: String, href: String },
}

impl RenderedLine {
    /// Visible text, without markup.
    pub fn text(&self) -> &str {
        match self {
            Self::Paragraph { text } | Self::Link { text, .. } => text,
        }
    }

    /// HTML fragment: `<p>text</p>` or `<p><a href="...">text</a></p>`.
    pub fn to_html(&self) -> String {
        match self {
            Self::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
            Self::Link { text, href } => format!(
                "<p><a href=\"{}\">{}</a></p>",
                escape_html(href),
                escape_html(text)
            ),
        }
    }
}

/// Renders one line, or `None` for an unrecognized kind.
pub fn render_line(line: &ContentLine) -> Option<RenderedLine> {
    match line.kind {
        ContentKind::Paragraph => Some(RenderedLine::Paragraph {
            text: line.text.clone(),
        }),
        ContentKind::Link => Some(RenderedLine::Link {
            text: line.text.clone(),
            href: link_target(&line.text),
        }),
        ContentKind::Unrecognized => None,
    }
}

/// Renders a post body, silently skipping unrecognized lines.
pub fn render_content(lines: &[ContentLine]) -> Vec<RenderedLine> {
    lines.iter().filter_map(render_line).collect()
}

/// Derives a link destination from link text.
///
/// - `http(s)://...` is used as-is.
/// - `domain.tld[/path]` gets an `https://` prefix.
/// - Anything else yields `PLACEHOLDER_HREF`.
pub fn link_target(text: &str) -> String {
    let trimmed = text.trim();
    if SCHEME_URL_RE.is_match(trimmed) {
        trimmed.to_string()
    } else if BARE_DOMAIN_RE.is_match(trimmed) {
        format!("https://{trimmed}")
    } else {
        PLACEHOLDER_HREF.to_string()
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
