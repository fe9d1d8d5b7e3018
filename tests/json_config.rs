//! Loading permission lists from JSON documents
#![cfg(feature = "json")]

use mqtt_topic_permissions::{AuthorizerConfig, Decision, PermissionError, Qos};

const CONFIG: &str = r#"{
	"default_decision": "UNDECIDED",
	"permissions": [
		{ "topic": "$SYS/#", "type": "DENY" },
		{ "topic": "home/+/light", "activity": "PUBLISH", "retain": "RETAINED" },
		{ "topic": "home/#", "activity": "SUBSCRIBE", "qos": "ZERO_ONE" }
	]
}"#;

#[test]
fn test_load_and_authorize() {
	let authorizer = AuthorizerConfig::from_json_str(CONFIG)
		.and_then(AuthorizerConfig::into_authorizer)
		.expect("valid configuration");

	assert_eq!(
		authorizer.authorize_publish(
			"home/kitchen/light",
			Qos::AtLeastOnce,
			true
		),
		Decision::Accept
	);
	assert_eq!(
		authorizer.authorize_publish(
			"home/kitchen/light",
			Qos::AtLeastOnce,
			false
		),
		Decision::Undecided
	);
	assert_eq!(
		authorizer.authorize_subscribe("home/kitchen/light", Qos::AtLeastOnce),
		Decision::Accept
	);
	assert_eq!(
		authorizer.authorize_subscribe("$SYS/broker/clients", Qos::AtMostOnce),
		Decision::Deny
	);
}

#[test]
fn test_invalid_pattern_in_document() {
	let result = AuthorizerConfig::from_json_str(
		r#"{ "permissions": [ { "topic": "a" }, { "topic": "a/#/b" } ] }"#,
	)
	.and_then(AuthorizerConfig::into_authorizer);

	assert!(matches!(
		result,
		Err(PermissionError::Declaration { index: 1, .. })
	));
}

#[test]
fn test_malformed_document() {
	assert!(matches!(
		AuthorizerConfig::from_json_str(
			r#"{ "permissions": [ { "qos": "ALL" } ] }"#
		),
		Err(PermissionError::Config { .. })
	));
}
