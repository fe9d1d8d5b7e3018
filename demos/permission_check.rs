//! # Permission Check
//!
//! Evaluates a handful of publishes and subscriptions against a small
//! permission list and prints the decisions.
//!
//! Run with `RUST_LOG=mqtt_topic_permissions_core=trace` to see which
//! permission decided each request.

mod shared;

use mqtt_topic_permissions::prelude::*;

fn main() -> Result<(), PermissionError> {
	shared::tracing::setup(None);

	let authorizer = TopicAuthorizer::new(
		vec![
			// System topics are read-only and hidden from `#`
			Permission::builder("$SYS/broker/#")
				.activity(Activities::Subscribe)
				.build()?,
			// Devices report their own state, retained, at most QoS 1
			Permission::builder("devices/+/state")
				.activity(Activities::Publish)
				.qos(QosLevels::ZeroOne)
				.retain(RetainLevels::Retained)
				.build()?,
			Permission::builder("devices/+/commands").deny().build()?,
			Permission::builder("devices/#")
				.activity(Activities::Subscribe)
				.build()?,
		],
		Decision::Deny,
	);

	let requests = [
		AuthorizationRequest::publish(
			"devices/7/state",
			Qos::AtLeastOnce,
			true,
		),
		AuthorizationRequest::publish(
			"devices/7/state",
			Qos::ExactlyOnce,
			true,
		),
		AuthorizationRequest::publish(
			"devices/7/state",
			Qos::AtMostOnce,
			false,
		),
		AuthorizationRequest::subscribe("devices/#", Qos::AtMostOnce),
		AuthorizationRequest::subscribe("devices/7/state", Qos::AtLeastOnce),
		AuthorizationRequest::subscribe("devices/7/commands", Qos::AtLeastOnce),
		AuthorizationRequest::subscribe("$SYS/broker/uptime", Qos::AtMostOnce),
		AuthorizationRequest::publish(
			"$SYS/broker/uptime",
			Qos::AtMostOnce,
			false,
		),
	];

	for request in &requests {
		println!("{:<9} {request}", authorizer.authorize(request).to_string());
	}

	Ok(())
}
