//! Errors raised while constructing permissions
//!
//! Evaluation itself never fails; everything here happens before the first
//! request is checked.

use thiserror::Error;

use crate::topic::TopicPatternError;

/// Errors that can occur while building or declaring permissions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
	/// The declared topic pattern is invalid
	#[error("Invalid permission topic: {0}")]
	Pattern(#[from] TopicPatternError),

	/// A declaration tag is not one of the known names
	#[error("Unknown {kind} tag '{value}'")]
	UnknownTag {
		/// Which tag family was being parsed
		kind: &'static str,
		/// The rejected value
		value: String,
	},

	/// Numeric QoS outside 0..=2
	#[error("Invalid QoS level {0}, expected 0, 1 or 2")]
	InvalidQos(u8),

	/// A declaration in a list failed to build
	#[error("Invalid permission declaration at index {index}: {source}")]
	Declaration {
		/// Position of the declaration in the list
		index: usize,
		/// Why it failed
		#[source]
		source: Box<PermissionError>,
	},

	/// The configuration document could not be parsed
	#[error("Invalid permission configuration: {details}")]
	Config {
		/// Parser message
		details: String,
	},
}

impl PermissionError {
	/// Creates a new UnknownTag error
	pub fn unknown_tag(kind: &'static str, value: impl Into<String>) -> Self {
		Self::UnknownTag {
			kind,
			value: value.into(),
		}
	}

	/// Wraps `source` with the index of the declaration that caused it
	pub fn declaration(index: usize, source: PermissionError) -> Self {
		Self::Declaration {
			index,
			source: Box::new(source),
		}
	}

	/// Creates a new Config error
	pub fn config(details: impl Into<String>) -> Self {
		Self::Config {
			details: details.into(),
		}
	}
}

/// Convenient Result type for permission construction
pub type PermissionResult<T> = Result<T, PermissionError>;
