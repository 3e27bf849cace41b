//! Title search entry points.
//!
//! # Responsibility
//! - Expose query APIs over the in-memory task collection.
//! - Keep result shaping inside core.

pub mod title_match;
