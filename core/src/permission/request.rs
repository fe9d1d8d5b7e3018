//! Concrete actions submitted for authorization

use std::fmt;

use super::level_set::{Activity, Qos};
use crate::topic::TopicPath;

/// A concrete publish or subscribe to authorize.
///
/// The topic is tokenized once here and reused for every permission the
/// request is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest<'a> {
	topic: TopicPath<'a>,
	qos: Qos,
	activity: Activity,
	retain: Option<bool>,
}

impl<'a> AuthorizationRequest<'a> {
	/// Creates a request. `retain` is `None` when the action carries no
	/// retain flag (subscriptions).
	pub fn new(
		topic: &'a str,
		qos: Qos,
		activity: Activity,
		retain: Option<bool>,
	) -> Self {
		Self {
			topic: TopicPath::new(topic),
			qos,
			activity,
			retain,
		}
	}

	/// Publish of a message to `topic`.
	pub fn publish(topic: &'a str, qos: Qos, retain: bool) -> Self {
		Self::new(topic, qos, Activity::Publish, Some(retain))
	}

	/// Subscription to `topic`.
	pub fn subscribe(topic: &'a str, qos: Qos) -> Self {
		Self::new(topic, qos, Activity::Subscribe, None)
	}

	/// Tokenized topic
	pub fn topic(&self) -> &TopicPath<'a> {
		&self.topic
	}

	/// Requested QoS
	pub fn qos(&self) -> Qos {
		self.qos
	}

	/// Publish or subscribe
	pub fn activity(&self) -> Activity {
		self.activity
	}

	/// Retain flag, if the action has one
	pub fn retain(&self) -> Option<bool> {
		self.retain
	}
}

impl fmt::Display for AuthorizationRequest<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let qos = self.qos as u8;
		write!(f, "{:?} '{}' qos={qos}", self.activity, self.topic)?;
		if let Some(retain) = self.retain {
			write!(f, " retain={retain}")?;
		}
		Ok(())
	}
}
