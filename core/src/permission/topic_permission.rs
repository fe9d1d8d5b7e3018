//! Declared topic permissions

use std::fmt;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use super::error::PermissionResult;
use super::level_set::{Activities, LevelSet, QosLevels, RetainLevels};
use super::request::AuthorizationRequest;
use crate::topic::TopicPattern;

/// Whether a matching permission allows or denies the action
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
	/// Matching actions are accepted
	#[default]
	Allow,
	/// Matching actions are denied
	Deny,
}

impl fmt::Display for Polarity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| Polarity::Allow => f.write_str("ALLOW"),
			| Polarity::Deny => f.write_str("DENY"),
		}
	}
}

/// A topic pattern plus QoS, activity and retain constraints, with a polarity.
///
/// Immutable once built. Use [`Permission::builder`] to create one from a
/// pattern string, or [`Permission::new`] to wrap an existing
/// [`TopicPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
	topic: TopicPattern,
	qos: QosLevels,
	activity: Activities,
	retain: Option<RetainLevels>,
	polarity: Polarity,
}

impl Permission {
	/// Creates a permission from its parts.
	pub fn new(
		topic: TopicPattern,
		qos: QosLevels,
		activity: Activities,
		retain: Option<RetainLevels>,
		polarity: Polarity,
	) -> Self {
		Self {
			topic,
			qos,
			activity,
			retain,
			polarity,
		}
	}

	/// Starts building a permission for `topic`.
	///
	/// Defaults: every QoS, every activity, no retain constraint, allow.
	pub fn builder(topic: impl Into<ArcStr>) -> PermissionBuilder {
		PermissionBuilder::new(topic)
	}

	/// Topic pattern
	pub fn topic(&self) -> &TopicPattern {
		&self.topic
	}

	/// Allowed QoS levels
	pub fn qos(&self) -> QosLevels {
		self.qos
	}

	/// Allowed activities
	pub fn activity(&self) -> Activities {
		self.activity
	}

	/// Retain constraint, `None` means any retain flag
	pub fn retain(&self) -> Option<RetainLevels> {
		self.retain
	}

	/// Allow or deny
	pub fn polarity(&self) -> Polarity {
		self.polarity
	}

	/// Returns true if this permission covers `request`.
	///
	/// Checks run cheapest first and stop at the first failure, so the topic
	/// is only matched once activity, QoS and retain all pass. The retain
	/// constraint is only consulted when the request carries a retain flag.
	/// A request whose topic contains a wildcard never matches.
	pub fn implies(&self, request: &AuthorizationRequest<'_>) -> bool {
		if !self.activity.contains(request.activity()) {
			return false;
		}
		if !self.qos.contains(request.qos()) {
			return false;
		}
		if let (Some(constraint), Some(retain)) =
			(self.retain, request.retain())
		{
			if !constraint.contains(retain) {
				return false;
			}
		}

		match self.topic.matches(request.topic()) {
			| Ok(matched) => matched,
			| Err(error) => {
				tracing::debug!(
					pattern = %self.topic,
					%error,
					"Rejected concrete topic, permission does not match"
				);
				false
			}
		}
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} '{}' qos={} activity={}",
			self.polarity, self.topic, self.qos, self.activity
		)?;
		if let Some(retain) = self.retain {
			write!(f, " retain={retain}")?;
		}
		Ok(())
	}
}

/// Builder for [`Permission`] that validates the topic pattern.
#[derive(Debug, Clone)]
pub struct PermissionBuilder {
	topic: ArcStr,
	qos: QosLevels,
	activity: Activities,
	retain: Option<RetainLevels>,
	polarity: Polarity,
}

impl PermissionBuilder {
	/// Creates a builder with default constraints for `topic`.
	pub fn new(topic: impl Into<ArcStr>) -> Self {
		Self {
			topic: topic.into(),
			qos: QosLevels::ALL,
			activity: Activities::ALL,
			retain: None,
			polarity: Polarity::Allow,
		}
	}

	/// Sets the allowed QoS levels.
	pub fn qos(mut self, qos: QosLevels) -> Self {
		self.qos = qos;
		self
	}

	/// Sets the allowed activities.
	pub fn activity(mut self, activity: Activities) -> Self {
		self.activity = activity;
		self
	}

	/// Sets the retain constraint.
	pub fn retain(mut self, retain: RetainLevels) -> Self {
		self.retain = Some(retain);
		self
	}

	/// Sets the polarity.
	pub fn polarity(mut self, polarity: Polarity) -> Self {
		self.polarity = polarity;
		self
	}

	/// Shorthand for `polarity(Polarity::Allow)`.
	pub fn allow(self) -> Self {
		self.polarity(Polarity::Allow)
	}

	/// Shorthand for `polarity(Polarity::Deny)`.
	pub fn deny(self) -> Self {
		self.polarity(Polarity::Deny)
	}

	/// Validates the pattern and builds the permission.
	///
	/// # Errors
	/// [`PermissionError::Pattern`](super::PermissionError::Pattern) if the
	/// pattern is empty, too long or deep, or misuses a wildcard.
	pub fn build(self) -> PermissionResult<Permission> {
		Ok(Permission {
			topic: TopicPattern::parse(self.topic)?,
			qos: self.qos,
			activity: self.activity,
			retain: self.retain,
			polarity: self.polarity,
		})
	}
}
