//! MQTT topic pattern item types and functionality

use std::convert::TryFrom;

use arcstr::Substr;
use thiserror::Error;

/// Error types for topic pattern parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicPatternError {
	/// Hash wildcard (#) used not at the end of the pattern
	#[error(
		"Invalid topic pattern '{pattern}': # wildcard can only be the last \
		 segment"
	)]
	HashPosition {
		/// The invalid pattern
		pattern: String,
	},

	/// Wildcard characters (+ or #) used incorrectly
	#[error("Invalid wildcard usage: {usage}")]
	WildcardUsage {
		/// Description of invalid usage
		usage: String,
	},

	/// Empty topic is not valid
	#[error("Topic pattern cannot be empty")]
	EmptyTopic,

	/// Pattern exceeds one of the [`limits`](crate::topic::limits)
	#[error("Topic pattern limit exceeded: {details}")]
	LimitExceeded {
		/// Which limit was exceeded and by how much
		details: String,
	},

	/// Pattern contains U+0000, which MQTT forbids in topic strings
	#[error("Invalid topic pattern '{pattern}': null character in level {level}")]
	NullCharacter {
		/// The invalid pattern
		pattern: String,
		/// Index of the offending level
		level: usize,
	},
}

impl TopicPatternError {
	/// Creates a new HashPosition error
	pub fn hash_position(pattern: impl Into<String>) -> Self {
		Self::HashPosition {
			pattern: pattern.into(),
		}
	}

	/// Creates a new WildcardUsage error
	pub fn wildcard_usage(usage: impl Into<String>) -> Self {
		Self::WildcardUsage {
			usage: usage.into(),
		}
	}

	/// Creates a new LimitExceeded error
	pub fn limit_exceeded(details: impl Into<String>) -> Self {
		Self::LimitExceeded {
			details: details.into(),
		}
	}

	/// Creates a new NullCharacter error
	pub fn null_character(pattern: impl Into<String>, level: usize) -> Self {
		Self::NullCharacter {
			pattern: pattern.into(),
			level,
		}
	}
}

/// MQTT topic pattern segment: literal string or wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicPatternItem {
	/// Literal string segment
	Str(Substr),
	/// Single-level wildcard `+`
	Plus,
	/// Multi-level wildcard `#`
	Hash,
}

impl TopicPatternItem {
	/// Classifies a pattern level without validating it.
	///
	/// Only a level that is exactly `+` or `#` becomes a wildcard; anything
	/// else, including partial wildcards such as `t+`, is kept as a literal.
	pub fn from_level(level: Substr) -> Self {
		match level.as_str() {
			| "+" => TopicPatternItem::Plus,
			| "#" => TopicPatternItem::Hash,
			| _ => TopicPatternItem::Str(level),
		}
	}

	/// Returns string representation of the pattern item.
	pub fn as_str(&self) -> &str {
		match self {
			| TopicPatternItem::Str(s) => s,
			| TopicPatternItem::Plus => "+",
			| TopicPatternItem::Hash => "#",
		}
	}

	/// Returns true if this item is a wildcard (+ or #).
	pub fn is_wildcard(&self) -> bool {
		matches!(self, TopicPatternItem::Plus | TopicPatternItem::Hash)
	}
}

impl AsRef<str> for TopicPatternItem {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl From<&TopicPatternItem> for String {
	fn from(item: &TopicPatternItem) -> Self {
		item.as_str().to_string()
	}
}

impl std::fmt::Display for TopicPatternItem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl TryFrom<Substr> for TopicPatternItem {
	type Error = TopicPatternError;

	fn try_from(item: Substr) -> Result<Self, Self::Error> {
		match Self::from_level(item) {
			| TopicPatternItem::Str(s) if s.contains(['+', '#']) => {
				Err(TopicPatternError::wildcard_usage(s.as_str()))
			}
			| res => Ok(res),
		}
	}
}
