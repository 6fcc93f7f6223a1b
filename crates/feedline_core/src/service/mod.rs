//! Core use-case services.
//!
//! # Responsibility
//! - Own per-post comment state and mediate every mutation of it.
//! - Keep UI/FFI layers decoupled from model details via explicit commands.

pub mod feed_service;
pub mod post_controller;
