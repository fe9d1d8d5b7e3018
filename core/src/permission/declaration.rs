//! Declarative permission lists
//!
//! The serde shape of a permission list as an authorization layer would
//! store it. Tags use the SCREAMING_SNAKE_CASE names (`ZERO_ONE`,
//! `SUBSCRIBE`, `NOT_RETAINED`, `DENY`).
//!
//! ```json
//! {
//!   "default_decision": "DENY",
//!   "permissions": [
//!     { "topic": "$SYS/#", "activity": "SUBSCRIBE", "type": "DENY" },
//!     { "topic": "sensors/+/temp", "qos": "ZERO_ONE" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::error::{PermissionError, PermissionResult};
use super::evaluator::{Decision, TopicAuthorizer};
use super::level_set::{Activities, QosLevels, RetainLevels};
use super::topic_permission::{Permission, Polarity};

/// One declared permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDeclaration {
	/// Topic pattern
	pub topic: String,
	/// Allowed QoS levels
	#[serde(default)]
	pub qos: QosLevels,
	/// Allowed activities
	#[serde(default)]
	pub activity: Activities,
	/// Optional retain constraint
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub retain: Option<RetainLevels>,
	/// Allow or deny
	#[serde(default, rename = "type")]
	pub polarity: Polarity,
}

impl PermissionDeclaration {
	/// Validates the declaration and builds the permission.
	pub fn build(&self) -> PermissionResult<Permission> {
		let mut builder = Permission::builder(self.topic.as_str())
			.qos(self.qos)
			.activity(self.activity)
			.polarity(self.polarity);
		if let Some(retain) = self.retain {
			builder = builder.retain(retain);
		}
		builder.build()
	}
}

impl TryFrom<&PermissionDeclaration> for Permission {
	type Error = PermissionError;

	fn try_from(declaration: &PermissionDeclaration) -> PermissionResult<Self> {
		declaration.build()
	}
}

impl From<&Permission> for PermissionDeclaration {
	fn from(permission: &Permission) -> Self {
		Self {
			topic: permission.topic().as_str().to_string(),
			qos: permission.qos(),
			activity: permission.activity(),
			retain: permission.retain(),
			polarity: permission.polarity(),
		}
	}
}

/// An ordered permission list plus the decision used when nothing matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerConfig {
	/// Returned when no permission matches
	#[serde(default)]
	pub default_decision: Decision,
	/// Permissions in priority order
	#[serde(default)]
	pub permissions: Vec<PermissionDeclaration>,
}

impl AuthorizerConfig {
	/// Builds every declaration, in order.
	///
	/// # Errors
	/// [`PermissionError::Declaration`] naming the first invalid entry.
	pub fn build_permissions(&self) -> PermissionResult<Vec<Permission>> {
		self.permissions
			.iter()
			.enumerate()
			.map(|(index, declaration)| {
				declaration.build().map_err(|source| {
					PermissionError::declaration(index, source)
				})
			})
			.collect()
	}

	/// Validates the configuration and creates an authorizer from it.
	pub fn into_authorizer(self) -> PermissionResult<TopicAuthorizer> {
		let permissions = self.build_permissions()?;
		tracing::debug!(
			permissions = permissions.len(),
			default = %self.default_decision,
			"Loaded permission list"
		);
		Ok(TopicAuthorizer::new(permissions, self.default_decision))
	}

	/// Parses a configuration from JSON.
	#[cfg(feature = "json")]
	pub fn from_json_str(json: &str) -> PermissionResult<Self> {
		serde_json::from_str(json)
			.map_err(|e| PermissionError::config(e.to_string()))
	}

	/// Serializes the configuration to pretty-printed JSON.
	#[cfg(feature = "json")]
	pub fn to_json_string(&self) -> PermissionResult<String> {
		serde_json::to_string_pretty(self)
			.map_err(|e| PermissionError::config(e.to_string()))
	}
}

impl From<&TopicAuthorizer> for AuthorizerConfig {
	fn from(authorizer: &TopicAuthorizer) -> Self {
		Self {
			default_decision: authorizer.default_decision(),
			permissions: authorizer
				.permissions()
				.iter()
				.map(PermissionDeclaration::from)
				.collect(),
		}
	}
}
