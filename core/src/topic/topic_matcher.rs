//! Wildcard matching of topic patterns against concrete topics
//!
//! Matching is a set of free functions; there is no matcher state. A pattern
//! may contain whole-level `+` and `#` wildcards, a concrete topic may not.
//! Asking whether a pattern matches a topic that itself contains a wildcard
//! character is an input error ([`TopicMatcherError::InvalidTopic`]), not a
//! non-match.
//!
//! Patterns without any wildcard character take a fast path: plain string
//! equality after dropping one trailing `/` from each side. The tokenized
//! path keeps a trailing `/` as an empty last level, so `a/b/` and `a/b`
//! are equal for `a/b/` but not for `a/+/`.

use thiserror::Error;

use super::error::{MatcherResult, TopicResult};
use super::topic_path::{TopicPath, tokenize};
use super::topic_pattern::TopicPattern;

/// Errors that can occur during topic matching operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicMatcherError {
	/// The concrete topic contains a wildcard character
	#[error(
		"Invalid topic '{topic}': wildcard '{wildcard}' at level {level} is \
		 not allowed in a concrete topic"
	)]
	InvalidTopic {
		/// The offending topic
		topic: String,
		/// The wildcard character found (`+` or `#`)
		wildcard: char,
		/// Index of the level containing it
		level: usize,
	},
}

impl TopicMatcherError {
	/// Creates a new InvalidTopic error
	pub fn invalid_topic(
		topic: impl Into<String>,
		wildcard: char,
		level: usize,
	) -> Self {
		Self::InvalidTopic {
			topic: topic.into(),
			wildcard,
			level,
		}
	}
}

/// Checks whether `pattern` matches the concrete `topic`.
///
/// # Errors
/// [`TopicMatcherError::InvalidTopic`] if `topic` contains `+` or `#`.
///
/// # Examples
/// ```
/// use mqtt_topic_permissions_core::topic::matches;
///
/// assert!(matches("sensors/+/temp", "sensors/kitchen/temp").unwrap());
/// assert!(matches("sensors/#", "sensors").unwrap());
/// assert!(!matches("#", "$SYS/uptime").unwrap());
/// assert!(matches("a/b", "a/+").is_err());
/// ```
pub fn matches(pattern: &str, topic: &str) -> MatcherResult<bool> {
	let topic = TopicPath::new(topic);
	topic.ensure_concrete()?;

	if !contains_wildcard(pattern) {
		return Ok(literal_eq(pattern, topic.path()));
	}
	Ok(match_levels(&tokenize(pattern), &topic))
}

/// Checks whether a parsed pattern matches an already tokenized topic.
///
/// Same semantics as [`matches`] without re-tokenizing either side.
pub fn matches_path(
	pattern: &TopicPattern,
	topic: &TopicPath<'_>,
) -> MatcherResult<bool> {
	topic.ensure_concrete()?;

	if !pattern.has_wildcard() {
		return Ok(literal_eq(pattern.as_str(), topic.path()));
	}
	Ok(match_levels(pattern.items(), topic))
}

/// Validates `pattern` as a declared pattern, then matches `topic`.
///
/// Unlike [`matches`], a misplaced `#` or a partial wildcard in the
/// pattern is reported instead of being handled by the level walk.
///
/// # Errors
/// [`TopicError::Pattern`](super::TopicError::Pattern) for an invalid
/// pattern, [`TopicError::Matcher`](super::TopicError::Matcher) if `topic`
/// contains `+` or `#`.
pub fn matches_validated(pattern: &str, topic: &str) -> TopicResult<bool> {
	let pattern = TopicPattern::parse(pattern)?;
	Ok(pattern.matches_str(topic)?)
}

pub(crate) fn contains_wildcard(pattern: &str) -> bool {
	pattern.contains(['+', '#'])
}

/// Equality ignoring a single trailing `/` on either side.
fn literal_eq(pattern: &str, topic: &str) -> bool {
	strip_trailing_slash(pattern) == strip_trailing_slash(topic)
}

fn strip_trailing_slash(topic: &str) -> &str {
	topic.strip_suffix('/').unwrap_or(topic)
}

/// Level-by-level walk of `pattern` over `topic`.
///
/// `topic` must already be known to be concrete.
pub(crate) fn match_levels<L: AsRef<str>>(
	pattern: &[L],
	topic: &TopicPath<'_>,
) -> bool {
	// Root-level wildcards never reach `$` topics
	if topic.is_system()
		&& pattern
			.first()
			.is_some_and(|level| matches!(level.as_ref(), "+" | "#"))
	{
		return false;
	}

	let topic_levels = topic.levels();
	for (pattern_level, topic_level) in pattern.iter().zip(topic_levels) {
		match pattern_level.as_ref() {
			| "#" => return true,
			| "+" => {}
			| literal if literal == *topic_level => {}
			| _ => return false,
		}
	}

	match pattern.len().checked_sub(topic_levels.len()) {
		| Some(0) => true,
		| Some(1) => pattern.last().is_some_and(|level| level.as_ref() == "#"),
		| _ => false,
	}
}
