//! Concrete topic tokenization

use std::fmt;

use smallvec::SmallVec;

use super::topic_matcher::TopicMatcherError;

/// Number of levels kept inline before a tokenized topic spills to the heap.
pub const INLINE_LEVELS: usize = 8;

/// Topic levels borrowed from the topic string.
pub type Levels<'a> = SmallVec<[&'a str; INLINE_LEVELS]>;

/// Splits a topic on `/`, preserving empty levels.
///
/// `"a//b"` yields three levels and a leading or trailing `/` yields an
/// empty first or last level. Any string is tokenizable.
pub fn tokenize(topic: &str) -> Levels<'_> {
	topic.split('/').collect()
}

/// A concrete topic split into levels.
///
/// Tokenization happens once; the same path is then matched against every
/// permission of an evaluation. The first wildcard character found while
/// splitting is remembered so [`TopicPath::ensure_concrete`] costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPath<'a> {
	path: &'a str,
	levels: Levels<'a>,
	wildcard: Option<(char, usize)>,
}

impl<'a> TopicPath<'a> {
	/// Tokenizes `path`.
	pub fn new(path: &'a str) -> Self {
		let mut wildcard = None;
		let mut levels = Levels::new();
		for (index, level) in path.split('/').enumerate() {
			if wildcard.is_none() {
				wildcard = level
					.chars()
					.find(|c| matches!(c, '+' | '#'))
					.map(|c| (c, index));
			}
			levels.push(level);
		}
		Self {
			path,
			levels,
			wildcard,
		}
	}

	/// Returns the original topic string.
	pub fn path(&self) -> &'a str {
		self.path
	}

	/// Returns the topic levels.
	pub fn levels(&self) -> &[&'a str] {
		&self.levels
	}

	/// Returns number of levels (never zero).
	pub fn len(&self) -> usize {
		self.levels.len()
	}

	/// Always false: even the empty string has one (empty) level.
	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Returns true if the first level starts with `$` (`$SYS/...`).
	pub fn is_system(&self) -> bool {
		self.levels.first().is_some_and(|level| level.starts_with('$'))
	}

	/// Returns true if the topic contains `+` or `#` anywhere.
	pub fn contains_wildcard(&self) -> bool {
		self.wildcard.is_some()
	}

	/// Fails with [`TopicMatcherError::InvalidTopic`] if this topic contains
	/// a wildcard character and therefore cannot be a concrete topic.
	pub fn ensure_concrete(&self) -> Result<(), TopicMatcherError> {
		match self.wildcard {
			| Some((wildcard, level)) => {
				Err(TopicMatcherError::invalid_topic(
					self.path, wildcard, level,
				))
			}
			| None => Ok(()),
		}
	}
}

impl fmt::Display for TopicPath<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path)
	}
}

impl<'a> From<&'a str> for TopicPath<'a> {
	fn from(path: &'a str) -> Self {
		Self::new(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tokenize_preserves_empty_levels() {
		assert_eq!(tokenize("a//b").as_slice(), ["a", "", "b"]);
		assert_eq!(tokenize("/a").as_slice(), ["", "a"]);
		assert_eq!(tokenize("a/").as_slice(), ["a", ""]);
		assert_eq!(tokenize("").as_slice(), [""]);
		assert_eq!(tokenize("/").as_slice(), ["", ""]);
	}

	#[test]
	fn test_deep_topic_spills_to_heap() {
		let topic = "a/b/c/d/e/f/g/h/i/j/k";
		let path = TopicPath::new(topic);
		assert_eq!(path.len(), 11);
		assert_eq!(path.levels()[10], "k");
		assert_eq!(path.to_string(), topic);
	}

	#[test]
	fn test_system_topic_detection() {
		assert!(TopicPath::new("$SYS/broker").is_system());
		assert!(TopicPath::new("$").is_system());
		assert!(!TopicPath::new("a/$SYS").is_system());
		assert!(!TopicPath::new("/$SYS").is_system());
	}

	#[test]
	fn test_wildcard_detection_reports_first_occurrence() {
		let path = TopicPath::new("a/b+/#");
		assert!(path.contains_wildcard());
		assert_eq!(
			path.ensure_concrete(),
			Err(TopicMatcherError::invalid_topic("a/b+/#", '+', 1))
		);

		let concrete = TopicPath::new("a/b/c");
		assert!(!concrete.contains_wildcard());
		assert_eq!(concrete.ensure_concrete(), Ok(()));
	}
}
