//! Core utilities for the Chat NBA query interface
//!
//! This module consolidates the leaf building blocks used across the
//! application:
//! - `aliases`: stat and season phrase normalization tables
//! - `season_range`: "last N seasons" style range parsing
//! - `http`: request headers and HTTP error classification
//! - `retry`: bounded retry with back-off for external calls

pub mod aliases;
pub mod http;
pub mod retry;
pub mod season_range;

// Re-export commonly used items for convenience
pub use aliases::{mentions_per_game, season_alias, season_alias_at, stat_alias};
pub use retry::{with_retry, RetryPolicy};
pub use season_range::{parse_range, parse_range_at};
