//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `feedline_core` linkage without a UI shell.
//! - Print the built-in feed as plain text, one block per post.

use chrono::Utc;
use feedline_core::{builtin_feed, FeedConfig, PostView, RenderedLine};

fn main() {
    println!("feedline_core ping={}", feedline_core::ping());
    println!("feedline_core version={}", feedline_core::core_version());

    let feed = match builtin_feed(FeedConfig::default()) {
        Ok(feed) => feed,
        Err(err) => {
            eprintln!("feedline: {err}");
            std::process::exit(1);
        }
    };
    for post in feed.snapshot(Utc::now()).posts {
        print_post(&post);
    }
}

fn print_post(post: &PostView) {
    println!();
    println!("#{} {} ({})", post.id, post.author.name, post.author.role);
    println!("   {} [{}]", post.published.relative, post.published.absolute);
    for line in &post.lines {
        match line {
            RenderedLine::Paragraph { text } => println!("   {text}"),
            RenderedLine::Link { text, href } => println!("   {text} <{href}>"),
        }
    }
    for comment in &post.comments {
        println!("   > {} (+{})", comment.text, comment.like_count);
    }
}
