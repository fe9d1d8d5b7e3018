//! Error types and utilities for the topic module
//!
//! This module contains the composite error type and shared constants
//! for the entire topic module, while individual error types remain
//! in their respective modules.

use thiserror::Error;

use super::topic_matcher::TopicMatcherError;
use super::topic_pattern_item::TopicPatternError;

/// Comprehensive error type for all topic-related operations
///
/// Aggregates the pattern and matcher errors so callers that do not care
/// which stage failed can use a single error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// Topic pattern parsing or validation error
	#[error("Topic pattern error: {0}")]
	Pattern(#[from] TopicPatternError),

	/// Topic matching operation error
	#[error("Topic matcher error: {0}")]
	Matcher(#[from] TopicMatcherError),
}

/// Convenient Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Convenient Result type for pattern operations
pub type PatternResult<T> = Result<T, TopicPatternError>;

/// Convenient Result type for matcher operations
pub type MatcherResult<T> = Result<T, TopicMatcherError>;

/// Topic processing limits and constants
pub mod limits {
	/// Maximum number of levels accepted in a declared topic pattern
	pub const MAX_TOPIC_DEPTH: usize = 128;

	/// Maximum total topic length in bytes (MQTT UTF-8 string limit)
	pub const MAX_TOPIC_LENGTH: usize = 65_535;
}

/// Validation utilities for topic operations
pub mod validation {
	use super::limits::*;
	use super::{TopicMatcherError, TopicPatternError};
	use crate::topic::topic_path::TopicPath;

	/// Validates a concrete topic: it must not contain `+` or `#`.
	pub fn validate_topic(topic: &str) -> Result<(), TopicMatcherError> {
		TopicPath::new(topic).ensure_concrete()
	}

	/// Validates a declared topic pattern.
	///
	/// Rejects empty patterns, patterns exceeding [`MAX_TOPIC_LENGTH`] or
	/// [`MAX_TOPIC_DEPTH`], wildcards that do not occupy a whole level and
	/// a `#` anywhere but the last level.
	pub fn validate_pattern(pattern: &str) -> Result<(), TopicPatternError> {
		if pattern.is_empty() {
			return Err(TopicPatternError::EmptyTopic);
		}

		if pattern.len() > MAX_TOPIC_LENGTH {
			return Err(TopicPatternError::limit_exceeded(format!(
				"Pattern too long: {} > {}",
				pattern.len(),
				MAX_TOPIC_LENGTH
			)));
		}

		let depth = pattern.split('/').count();
		if depth > MAX_TOPIC_DEPTH {
			return Err(TopicPatternError::limit_exceeded(format!(
				"Pattern too deep: {depth} levels > {MAX_TOPIC_DEPTH}"
			)));
		}

		for (index, level) in pattern.split('/').enumerate() {
			match level {
				| "+" => {}
				| "#" if index == depth - 1 => {}
				| "#" => return Err(TopicPatternError::hash_position(pattern)),
				| _ if level.contains(['+', '#']) => {
					return Err(TopicPatternError::wildcard_usage(level));
				}
				| _ if level.contains('\0') => {
					return Err(TopicPatternError::null_character(
						pattern, index,
					));
				}
				| _ => {}
			}
		}

		Ok(())
	}
}
