//! Tests for TopicPattern functionality

use arcstr::{ArcStr, Substr};

use super::limits::{MAX_TOPIC_DEPTH, MAX_TOPIC_LENGTH};
use super::validation::{validate_pattern, validate_topic};
use super::{TopicPattern, TopicPatternError, TopicPatternItem};

fn create_pattern(pattern: &str) -> TopicPattern {
	TopicPattern::parse(pattern).expect("Pattern should be valid")
}

mod construction_tests {
	use super::*;

	#[test]
	fn test_segments_are_tokenized_once() {
		let pattern = create_pattern("sensors/+/data/#");

		assert_eq!(pattern.len(), 4);
		assert_eq!(
			pattern.items(),
			&[
				TopicPatternItem::Str(Substr::from("sensors")),
				TopicPatternItem::Plus,
				TopicPatternItem::Str(Substr::from("data")),
				TopicPatternItem::Hash,
			]
		);
		assert!(pattern.has_wildcard());
		assert!(pattern.contains_hash());
		assert_eq!(pattern.as_str(), "sensors/+/data/#");
		assert_eq!(pattern.to_string(), "sensors/+/data/#");
	}

	#[test]
	fn test_literal_pattern() {
		let pattern = create_pattern("a//b/");

		assert_eq!(pattern.len(), 4);
		assert!(!pattern.has_wildcard());
		assert!(!pattern.contains_hash());
		assert!(pattern.iter().all(|item| !item.is_wildcard()));
	}

	#[test]
	fn test_segments_share_pattern_string() {
		let source = ArcStr::from("a/b/c");
		let pattern = TopicPattern::new(source.clone()).unwrap();

		assert!(ArcStr::ptr_eq(&pattern.pattern(), &source));
		match &pattern.items()[1] {
			| TopicPatternItem::Str(level) => {
				assert!(ArcStr::ptr_eq(level.parent(), &source));
			}
			| other => panic!("Expected literal level, got {other:?}"),
		}
	}

	#[test]
	fn test_new_is_lenient() {
		let pattern = TopicPattern::new("a/#/t+").unwrap();
		assert_eq!(pattern.len(), 3);
		assert_eq!(pattern.items()[1], TopicPatternItem::Hash);
		assert_eq!(
			pattern.items()[2],
			TopicPatternItem::Str(Substr::from("t+"))
		);
		assert!(!pattern.contains_hash());
	}

	#[test]
	fn test_empty_pattern_is_rejected() {
		assert_eq!(TopicPattern::new(""), Err(TopicPatternError::EmptyTopic));
		assert_eq!(TopicPattern::parse(""), Err(TopicPatternError::EmptyTopic));
	}

	#[test]
	fn test_try_from_validates() {
		assert!(TopicPattern::try_from("a/+/b").is_ok());
		assert!(TopicPattern::try_from(String::from("a/#")).is_ok());
		assert!(TopicPattern::try_from(ArcStr::from("a/#/b")).is_err());
	}
}

mod validation_tests {
	use super::*;

	#[test]
	fn test_valid_patterns() {
		let valid = [
			"#", "+", "a/b", "a/+/c", "a/#", "+/#", "/", "$SYS/#", "a//b",
		];
		for pattern in valid {
			assert_eq!(validate_pattern(pattern), Ok(()), "{pattern:?}");
		}
	}

	#[test]
	fn test_hash_must_be_last() {
		assert_eq!(
			validate_pattern("a/#/b"),
			Err(TopicPatternError::hash_position("a/#/b"))
		);
		assert_eq!(
			validate_pattern("#/"),
			Err(TopicPatternError::hash_position("#/"))
		);
	}

	#[test]
	fn test_wildcards_must_fill_level() {
		assert_eq!(
			validate_pattern("my/test/topic/for/the/unit/t+"),
			Err(TopicPatternError::wildcard_usage("t+"))
		);
		assert_eq!(
			validate_pattern("a/b#"),
			Err(TopicPatternError::wildcard_usage("b#"))
		);
	}

	#[test]
	fn test_null_character_is_rejected() {
		assert_eq!(
			validate_pattern("a/b\0c"),
			Err(TopicPatternError::null_character("a/b\0c", 1))
		);
	}

	#[test]
	fn test_limits() {
		let deep = vec!["a"; MAX_TOPIC_DEPTH + 1].join("/");
		assert!(matches!(
			validate_pattern(&deep),
			Err(TopicPatternError::LimitExceeded { .. })
		));

		let max_depth = vec!["a"; MAX_TOPIC_DEPTH].join("/");
		assert_eq!(validate_pattern(&max_depth), Ok(()));

		let long = "a".repeat(MAX_TOPIC_LENGTH + 1);
		assert!(matches!(
			validate_pattern(&long),
			Err(TopicPatternError::LimitExceeded { .. })
		));
	}

	#[test]
	fn test_validate_topic() {
		assert_eq!(validate_topic("a/b/c"), Ok(()));
		assert_eq!(validate_topic("$SYS/x"), Ok(()));
		assert!(validate_topic("a/+/c").is_err());
		assert!(validate_topic("a/#").is_err());
	}
}
