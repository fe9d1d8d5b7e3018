//! # MQTT Topic Permissions
//!
//! Decides whether a concrete MQTT publish or subscribe is authorized by an
//! ordered list of declared permissions.
//!
//! ## Features
//!
//! - **Wildcard Matching**: MQTT `+` and `#` patterns, with `$` topics kept
//!   out of root-level wildcards
//! - **Level-Set Constraints**: QoS, activity and retain constraints as
//!   small lattices with an `implies` relation
//! - **First Match Wins**: the first permission covering a request decides,
//!   otherwise a caller-supplied default is returned
//! - **Fail Closed**: a malformed concrete topic never matches
//! - **Declarative Lists**: serde-deserializable permission declarations
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_permissions_core::prelude::*;
//!
//! # fn main() -> Result<(), PermissionError> {
//! let permissions = vec![
//!     Permission::builder("sensors/+/config").deny().build()?,
//!     Permission::builder("sensors/#")
//!         .qos(QosLevels::ZeroOne)
//!         .activity(Activities::Publish)
//!         .build()?,
//! ];
//! let authorizer = TopicAuthorizer::new(permissions, Decision::Deny);
//!
//! assert_eq!(
//!     authorizer.authorize_publish("sensors/kitchen/temp", Qos::AtLeastOnce, false),
//!     Decision::Accept
//! );
//! assert_eq!(
//!     authorizer.authorize_publish("sensors/kitchen/config", Qos::AtMostOnce, false),
//!     Decision::Deny
//! );
//! assert_eq!(
//!     authorizer.authorize_publish("sensors/kitchen/temp", Qos::ExactlyOnce, false),
//!     Decision::Deny
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod permission;
pub mod topic;

// === Core Public API ===
pub use permission::{
	Activities, Activity, AuthorizationRequest, AuthorizerConfig, Decision,
	LevelSet, Permission, PermissionBuilder, PermissionDeclaration,
	PermissionError, PermissionResult, Polarity, Qos, QosLevels, RetainLevels,
	TopicAuthorizer, evaluate,
};
// Topic types (for manual pattern handling)
pub use topic::{
	TopicError, TopicMatcherError, TopicPath, TopicPattern, TopicPatternError,
	matches, matches_validated, tokenize,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_topic_permissions_core::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		Activities, Activity, AuthorizationRequest, Decision, LevelSet,
		Permission, PermissionError, Polarity, Qos, QosLevels, RetainLevels,
		TopicAuthorizer, evaluate,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use mqtt_topic_permissions_core::errors::*;
/// ```
pub mod errors {
	pub use crate::permission::{PermissionError, PermissionResult};
	pub use crate::topic::{
		MatcherResult, PatternResult, TopicError, TopicMatcherError,
		TopicPatternError, TopicResult,
	};
}
