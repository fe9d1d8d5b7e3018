//! Pre-tokenized topic patterns

use std::convert::TryFrom;
use std::fmt;
use std::slice::Iter;

use arcstr::ArcStr;
use smallvec::SmallVec;

use super::error::{MatcherResult, PatternResult, validation};
use super::topic_matcher::{self, contains_wildcard};
use super::topic_path::{INLINE_LEVELS, TopicPath};
use super::topic_pattern_item::{TopicPatternError, TopicPatternItem};

/// MQTT topic pattern, tokenized once at construction.
///
/// Cloning is cheap: the pattern string is shared and every level is a
/// [`Substr`](arcstr::Substr) of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicPattern {
	pattern: ArcStr,
	segments: SmallVec<[TopicPatternItem; INLINE_LEVELS]>,
	has_wildcard: bool,
}

impl TopicPattern {
	/// Creates a pattern without validating wildcard placement.
	///
	/// Only an empty pattern is rejected. A misplaced `#` or a partial
	/// wildcard such as `t+` is accepted and handled by the level walk, where
	/// `t+` is simply a literal level that no concrete topic can equal.
	pub fn new(pattern: impl Into<ArcStr>) -> PatternResult<Self> {
		let pattern = pattern.into();
		if pattern.is_empty() {
			return Err(TopicPatternError::EmptyTopic);
		}

		let segments = pattern
			.split('/')
			.map(|level| {
				TopicPatternItem::from_level(pattern.substr_from(level))
			})
			.collect();

		Ok(Self {
			has_wildcard: contains_wildcard(&pattern),
			pattern,
			segments,
		})
	}

	/// Creates a pattern after full validation.
	///
	/// See [`validation::validate_pattern`] for the rules.
	pub fn parse(pattern: impl Into<ArcStr>) -> PatternResult<Self> {
		let pattern = pattern.into();
		validation::validate_pattern(&pattern)?;
		Self::new(pattern)
	}

	/// Returns the pattern string.
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	/// Returns a shared handle to the pattern string.
	pub fn pattern(&self) -> ArcStr {
		self.pattern.clone()
	}

	/// Returns pattern segments as slice.
	pub fn items(&self) -> &[TopicPatternItem] {
		&self.segments
	}

	/// Returns iterator over pattern segments.
	pub fn iter(&self) -> Iter<'_, TopicPatternItem> {
		self.segments.iter()
	}

	/// Returns number of segments in pattern.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if pattern has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns true if the pattern contains a `+` or `#` character anywhere,
	/// including inside a level.
	pub fn has_wildcard(&self) -> bool {
		self.has_wildcard
	}

	/// Returns true if the last segment is the multi-level wildcard.
	pub fn contains_hash(&self) -> bool {
		matches!(self.segments.last(), Some(TopicPatternItem::Hash))
	}

	/// Matches a tokenized concrete topic against this pattern.
	///
	/// # Errors
	/// [`TopicMatcherError::InvalidTopic`](super::TopicMatcherError::InvalidTopic)
	/// if `topic` contains a wildcard character.
	pub fn matches(&self, topic: &TopicPath<'_>) -> MatcherResult<bool> {
		topic_matcher::matches_path(self, topic)
	}

	/// Tokenizes `topic` and matches it against this pattern.
	pub fn matches_str(&self, topic: &str) -> MatcherResult<bool> {
		self.matches(&TopicPath::new(topic))
	}
}

impl fmt::Display for TopicPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

impl AsRef<str> for TopicPattern {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl TryFrom<String> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<&str> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<ArcStr> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: ArcStr) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
