//! Topic handling module
//!
//! This module provides the MQTT topic primitives used by the permission
//! engine: tokenizing concrete topics, parsing topic patterns and matching
//! patterns with `+` and `#` wildcards against concrete topics.

// Submodules
pub mod error;
pub mod topic_matcher;
pub mod topic_path;
pub mod topic_pattern;
pub mod topic_pattern_item;

#[cfg(test)]
mod topic_pattern_tests;

// Re-export commonly used types for convenience
pub use error::{MatcherResult, PatternResult, TopicError, TopicResult};
// Re-export constants and validation utilities
pub use error::{limits, validation};
pub use topic_matcher::{TopicMatcherError, matches, matches_validated};
pub use topic_path::{TopicPath, tokenize};
pub use topic_pattern::TopicPattern;
pub use topic_pattern_item::{TopicPatternError, TopicPatternItem};
