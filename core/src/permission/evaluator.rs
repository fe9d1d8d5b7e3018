//! First-match evaluation of ordered permission lists

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::level_set::Qos;
use super::request::AuthorizationRequest;
use super::topic_permission::{Permission, Polarity};

/// Outcome of an authorization
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
	/// The action is allowed
	Accept,
	/// The action is denied
	Deny,
	/// No opinion; defer to the next authority
	#[default]
	Undecided,
}

impl Decision {
	/// Returns true for [`Decision::Accept`].
	pub fn is_accept(self) -> bool {
		self == Decision::Accept
	}

	/// Returns true for [`Decision::Deny`].
	pub fn is_deny(self) -> bool {
		self == Decision::Deny
	}
}

impl From<Polarity> for Decision {
	fn from(polarity: Polarity) -> Self {
		match polarity {
			| Polarity::Allow => Decision::Accept,
			| Polarity::Deny => Decision::Deny,
		}
	}
}

impl fmt::Display for Decision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| Decision::Accept => f.write_str("ACCEPT"),
			| Decision::Deny => f.write_str("DENY"),
			| Decision::Undecided => f.write_str("UNDECIDED"),
		}
	}
}

/// Evaluates `request` against `permissions` in order.
///
/// The first permission that implies the request decides: allow gives
/// [`Decision::Accept`], deny gives [`Decision::Deny`]. Later permissions are
/// not consulted, however specific. If none matches, `default` is returned
/// unchanged.
pub fn evaluate<'p, I>(
	permissions: I,
	request: &AuthorizationRequest<'_>,
	default: Decision,
) -> Decision
where
	I: IntoIterator<Item = &'p Permission>,
{
	for (index, permission) in permissions.into_iter().enumerate() {
		if permission.implies(request) {
			let decision = Decision::from(permission.polarity());
			tracing::trace!(
				%request,
				index,
				%permission,
				%decision,
				"Permission matched"
			);
			return decision;
		}
	}

	tracing::debug!(%request, %default, "No permission matched, using default");
	default
}

/// An ordered permission list with its default decision.
///
/// Cloning shares the list. Safe to use from any number of threads.
#[derive(Debug, Clone)]
pub struct TopicAuthorizer {
	permissions: Arc<[Permission]>,
	default_decision: Decision,
}

impl TopicAuthorizer {
	/// Creates an authorizer over `permissions`, in priority order.
	pub fn new(
		permissions: impl Into<Arc<[Permission]>>,
		default_decision: Decision,
	) -> Self {
		Self {
			permissions: permissions.into(),
			default_decision,
		}
	}

	/// Permissions in evaluation order
	pub fn permissions(&self) -> &[Permission] {
		&self.permissions
	}

	/// Decision returned when no permission matches
	pub fn default_decision(&self) -> Decision {
		self.default_decision
	}

	/// Evaluates an arbitrary request.
	pub fn authorize(&self, request: &AuthorizationRequest<'_>) -> Decision {
		evaluate(self.permissions.iter(), request, self.default_decision)
	}

	/// Evaluates a publish.
	pub fn authorize_publish(
		&self,
		topic: &str,
		qos: Qos,
		retain: bool,
	) -> Decision {
		self.authorize(&AuthorizationRequest::publish(topic, qos, retain))
	}

	/// Evaluates a subscription.
	pub fn authorize_subscribe(&self, topic: &str, qos: Qos) -> Decision {
		self.authorize(&AuthorizationRequest::subscribe(topic, qos))
	}
}

impl Default for TopicAuthorizer {
	fn default() -> Self {
		Self::new(Vec::new(), Decision::default())
	}
}
