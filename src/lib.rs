//! # MQTT Topic Permissions
//!
//! Authorizes MQTT publishes and subscriptions against an ordered list of
//! topic permissions.
//!
//! A permission pairs a topic pattern (with `+` and `#` wildcards) with the
//! QoS levels, activities and retain flags it covers, and either allows or
//! denies what it covers. The first permission covering a request decides;
//! when none does, the caller's default decision is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_permissions::prelude::*;
//!
//! # fn main() -> Result<(), PermissionError> {
//! let authorizer = TopicAuthorizer::new(
//!     vec![
//!         Permission::builder("$SYS/#").deny().build()?,
//!         Permission::builder("clients/+/inbox")
//!             .activity(Activities::Subscribe)
//!             .build()?,
//!     ],
//!     Decision::Undecided,
//! );
//!
//! assert_eq!(
//!     authorizer.authorize_subscribe("clients/42/inbox", Qos::AtLeastOnce),
//!     Decision::Accept
//! );
//! assert_eq!(
//!     authorizer.authorize_subscribe("$SYS/broker/load", Qos::AtMostOnce),
//!     Decision::Deny
//! );
//! assert_eq!(
//!     authorizer.authorize_publish("clients/42/inbox", Qos::AtMostOnce, false),
//!     Decision::Undecided
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern Matching
//!
//! - `+` matches exactly one topic level (e.g., `sensors/+/temperature`)
//! - `#` matches all remaining levels, including none (e.g., `sensors/#`)
//! - Topics whose first level starts with `$` are only matched by patterns
//!   that start with a literal `$` level
//! - A concrete topic containing `+` or `#` never matches
//!
//! ## Declarative Lists
//!
//! [`AuthorizerConfig`] is the serde form of a permission list. With the
//! `json` feature it can be read directly with
//! `AuthorizerConfig::from_json_str`.

#![warn(missing_docs)]

pub use mqtt_topic_permissions_core::{
	Activities, Activity, AuthorizationRequest, AuthorizerConfig, Decision,
	LevelSet, Permission, PermissionBuilder, PermissionDeclaration,
	PermissionError, PermissionResult, Polarity, Qos, QosLevels, RetainLevels,
	TopicAuthorizer, TopicError, TopicMatcherError, TopicPath, TopicPattern,
	TopicPatternError, evaluate, matches, matches_validated, tokenize,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_topic_permissions::prelude::*;
/// ```
pub mod prelude {
	pub use mqtt_topic_permissions_core::prelude::*;
}

/// Advanced types and utilities for manual pattern handling
///
/// ```rust
/// use mqtt_topic_permissions::advanced::*;
/// ```
pub mod advanced {
	pub use mqtt_topic_permissions_core::topic::{
		TopicPatternItem, limits, validation,
	};
	pub use mqtt_topic_permissions_core::{
		PermissionBuilder, PermissionDeclaration, TopicPath, TopicPattern,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use mqtt_topic_permissions::errors::*;
/// ```
pub mod errors {
	pub use mqtt_topic_permissions_core::errors::*;
}
