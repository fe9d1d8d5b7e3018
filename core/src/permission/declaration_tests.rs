//! Tests for declarative permission lists

use super::{
	Activities, AuthorizerConfig, Decision, Permission, PermissionDeclaration,
	PermissionError, Polarity, Qos, QosLevels, RetainLevels,
};
use crate::topic::TopicPatternError;

fn declaration(topic: &str) -> PermissionDeclaration {
	PermissionDeclaration {
		topic: topic.to_string(),
		qos: QosLevels::All,
		activity: Activities::All,
		retain: None,
		polarity: Polarity::Allow,
	}
}

#[test]
fn test_declaration_defaults() {
	let parsed: PermissionDeclaration =
		serde_json::from_str(r#"{ "topic": "a/#" }"#).unwrap();
	assert_eq!(parsed, declaration("a/#"));
}

#[test]
fn test_declaration_with_all_fields() {
	let parsed: PermissionDeclaration = serde_json::from_str(
		r#"{
			"topic": "sensors/+/temp",
			"qos": "ZERO_ONE",
			"activity": "PUBLISH",
			"retain": "NOT_RETAINED",
			"type": "DENY"
		}"#,
	)
	.unwrap();

	let permission = parsed.build().unwrap();
	assert_eq!(permission.topic().as_str(), "sensors/+/temp");
	assert_eq!(permission.qos(), QosLevels::ZeroOne);
	assert_eq!(permission.activity(), Activities::Publish);
	assert_eq!(permission.retain(), Some(RetainLevels::NotRetained));
	assert_eq!(permission.polarity(), Polarity::Deny);
}

#[test]
fn test_unknown_tag_is_rejected_by_serde() {
	let result: Result<PermissionDeclaration, _> =
		serde_json::from_str(r#"{ "topic": "a", "qos": "THREE" }"#);
	assert!(result.is_err());
}

#[test]
fn test_permission_round_trips_through_declaration() {
	let permission = Permission::builder("a/+/c")
		.qos(QosLevels::ZeroTwo)
		.retain(RetainLevels::Retained)
		.deny()
		.build()
		.unwrap();

	let declared = PermissionDeclaration::from(&permission);
	assert_eq!(Permission::try_from(&declared), Ok(permission));
}

#[test]
fn test_config_reports_first_invalid_declaration() {
	let config = AuthorizerConfig {
		default_decision: Decision::Deny,
		permissions: vec![
			declaration("a/#"),
			declaration("b/#/c"),
			declaration("c/t+"),
		],
	};

	assert_eq!(
		config.into_authorizer().unwrap_err(),
		PermissionError::declaration(
			1,
			PermissionError::Pattern(TopicPatternError::hash_position("b/#/c"))
		)
	);
}

#[test]
fn test_config_builds_authorizer_in_order() {
	let config: AuthorizerConfig = serde_json::from_str(
		r##"{
			"default_decision": "DENY",
			"permissions": [
				{ "topic": "$SYS/#", "activity": "SUBSCRIBE", "type": "DENY" },
				{ "topic": "#", "qos": "ZERO_ONE" },
				{ "topic": "$SYS/broker/uptime", "activity": "SUBSCRIBE" }
			]
		}"##,
	)
	.unwrap();

	let authorizer = config.clone().into_authorizer().unwrap();
	assert_eq!(authorizer.permissions().len(), 3);
	assert_eq!(authorizer.default_decision(), Decision::Deny);

	assert_eq!(
		authorizer.authorize_subscribe("$SYS/broker/uptime", Qos::AtMostOnce),
		Decision::Deny
	);
	assert_eq!(
		authorizer.authorize_publish("home/light", Qos::AtLeastOnce, true),
		Decision::Accept
	);
	assert_eq!(
		authorizer.authorize_publish("home/light", Qos::ExactlyOnce, false),
		Decision::Deny
	);

	assert_eq!(AuthorizerConfig::from(&authorizer), config);
}

#[test]
fn test_empty_config() {
	let config: AuthorizerConfig = serde_json::from_str("{}").unwrap();
	assert_eq!(config, AuthorizerConfig::default());

	let authorizer = config.into_authorizer().unwrap();
	assert_eq!(
		authorizer.authorize_subscribe("a", Qos::AtMostOnce),
		Decision::Undecided
	);
}

#[cfg(feature = "json")]
#[test]
fn test_json_helpers() {
	let config = AuthorizerConfig {
		default_decision: Decision::Accept,
		permissions: vec![declaration("a/#")],
	};

	let json = config.to_json_string().unwrap();
	assert_eq!(AuthorizerConfig::from_json_str(&json), Ok(config));
	assert!(matches!(
		AuthorizerConfig::from_json_str("not json"),
		Err(PermissionError::Config { .. })
	));
}
