//! Permission module
//!
//! Declared permissions, the QoS/activity/retain lattices they are built
//! from and the first-match evaluator that turns an ordered permission list
//! into an authorization decision.

pub mod declaration;
pub mod error;
pub mod evaluator;
pub mod level_set;
pub mod request;
pub mod topic_permission;

#[cfg(test)]
mod declaration_tests;

pub use declaration::{AuthorizerConfig, PermissionDeclaration};
pub use error::{PermissionError, PermissionResult};
pub use evaluator::{Decision, TopicAuthorizer, evaluate};
pub use level_set::{
	Activities, Activity, LevelSet, Qos, QosLevels, RetainLevels,
};
pub use request::AuthorizationRequest;
pub use topic_permission::{Permission, PermissionBuilder, Polarity};
