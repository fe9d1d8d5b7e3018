//! QoS, activity and retain lattices
//!
//! Each declared constraint is a non-empty subset of a tiny domain of
//! concrete values, stored as a bit mask. A constraint `a` implies `b`
//! exactly when every member of `b` is also a member of `a`, which makes
//! `ALL` the top element and the relation a partial order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PermissionError;

/// A finite lattice of level sets ordered by inclusion.
pub trait LevelSet: Copy + Eq + 'static {
	/// Concrete value lifted into the lattice
	type Level: Copy;

	/// Top element, the set of every level
	const ALL: Self;

	/// Every element of the lattice
	const VARIANTS: &'static [Self];

	/// Member set as a bit mask
	fn bits(self) -> u8;

	/// Singleton set containing `level`
	fn from_single_level(level: Self::Level) -> Self;

	/// Declaration tag, e.g. `ZERO_ONE`
	fn name(self) -> &'static str;

	/// Returns true if `other`'s members are a subset of `self`'s.
	fn implies(self, other: Self) -> bool {
		(other.bits() & !self.bits()) == 0
	}

	/// Returns true if the concrete `level` is allowed by this set.
	fn contains(self, level: Self::Level) -> bool {
		self.implies(Self::from_single_level(level))
	}

	/// Looks an element up by its declaration tag.
	fn from_name(name: &str) -> Option<Self> {
		Self::VARIANTS
			.iter()
			.copied()
			.find(|variant| variant.name() == name)
	}
}

/// MQTT quality of service of a concrete publish or subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Qos {
	/// QoS 0
	AtMostOnce = 0,
	/// QoS 1
	AtLeastOnce = 1,
	/// QoS 2
	ExactlyOnce = 2,
}

impl TryFrom<u8> for Qos {
	type Error = PermissionError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			| 0 => Ok(Qos::AtMostOnce),
			| 1 => Ok(Qos::AtLeastOnce),
			| 2 => Ok(Qos::ExactlyOnce),
			| _ => Err(PermissionError::InvalidQos(value)),
		}
	}
}

impl From<Qos> for u8 {
	fn from(qos: Qos) -> Self {
		qos as u8
	}
}

#[cfg(feature = "rumqttc")]
impl From<rumqttc::QoS> for Qos {
	fn from(qos: rumqttc::QoS) -> Self {
		match qos {
			| rumqttc::QoS::AtMostOnce => Qos::AtMostOnce,
			| rumqttc::QoS::AtLeastOnce => Qos::AtLeastOnce,
			| rumqttc::QoS::ExactlyOnce => Qos::ExactlyOnce,
		}
	}
}

/// Kind of action being authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
	/// Publishing a message
	Publish,
	/// Subscribing to a topic filter
	Subscribe,
}

/// Set of QoS levels a permission applies to
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QosLevels {
	/// {0}
	Zero,
	/// {1}
	One,
	/// {2}
	Two,
	/// {0, 1}
	ZeroOne,
	/// {1, 2}
	OneTwo,
	/// {0, 2}
	ZeroTwo,
	/// {0, 1, 2}
	#[default]
	All,
}

impl LevelSet for QosLevels {
	type Level = Qos;

	const ALL: Self = QosLevels::All;
	const VARIANTS: &'static [Self] = &[
		QosLevels::Zero,
		QosLevels::One,
		QosLevels::Two,
		QosLevels::ZeroOne,
		QosLevels::OneTwo,
		QosLevels::ZeroTwo,
		QosLevels::All,
	];

	fn bits(self) -> u8 {
		match self {
			| QosLevels::Zero => 0b001,
			| QosLevels::One => 0b010,
			| QosLevels::Two => 0b100,
			| QosLevels::ZeroOne => 0b011,
			| QosLevels::OneTwo => 0b110,
			| QosLevels::ZeroTwo => 0b101,
			| QosLevels::All => 0b111,
		}
	}

	fn from_single_level(level: Qos) -> Self {
		match level {
			| Qos::AtMostOnce => QosLevels::Zero,
			| Qos::AtLeastOnce => QosLevels::One,
			| Qos::ExactlyOnce => QosLevels::Two,
		}
	}

	fn name(self) -> &'static str {
		match self {
			| QosLevels::Zero => "ZERO",
			| QosLevels::One => "ONE",
			| QosLevels::Two => "TWO",
			| QosLevels::ZeroOne => "ZERO_ONE",
			| QosLevels::OneTwo => "ONE_TWO",
			| QosLevels::ZeroTwo => "ZERO_TWO",
			| QosLevels::All => "ALL",
		}
	}
}

/// Set of activities a permission applies to
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activities {
	/// Publishing only
	Publish,
	/// Subscribing only
	Subscribe,
	/// Both
	#[default]
	All,
}

impl LevelSet for Activities {
	type Level = Activity;

	const ALL: Self = Activities::All;
	const VARIANTS: &'static [Self] =
		&[Activities::Publish, Activities::Subscribe, Activities::All];

	fn bits(self) -> u8 {
		match self {
			| Activities::Publish => 0b01,
			| Activities::Subscribe => 0b10,
			| Activities::All => 0b11,
		}
	}

	fn from_single_level(level: Activity) -> Self {
		match level {
			| Activity::Publish => Activities::Publish,
			| Activity::Subscribe => Activities::Subscribe,
		}
	}

	fn name(self) -> &'static str {
		match self {
			| Activities::Publish => "PUBLISH",
			| Activities::Subscribe => "SUBSCRIBE",
			| Activities::All => "ALL",
		}
	}
}

/// Retain-flag constraint of a permission
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetainLevels {
	/// Only messages with the retain flag set
	Retained,
	/// Only messages without the retain flag
	NotRetained,
	/// Either
	#[default]
	All,
}

impl LevelSet for RetainLevels {
	type Level = bool;

	const ALL: Self = RetainLevels::All;
	const VARIANTS: &'static [Self] = &[
		RetainLevels::Retained,
		RetainLevels::NotRetained,
		RetainLevels::All,
	];

	fn bits(self) -> u8 {
		match self {
			| RetainLevels::Retained => 0b01,
			| RetainLevels::NotRetained => 0b10,
			| RetainLevels::All => 0b11,
		}
	}

	fn from_single_level(retain: bool) -> Self {
		if retain {
			RetainLevels::Retained
		} else {
			RetainLevels::NotRetained
		}
	}

	fn name(self) -> &'static str {
		match self {
			| RetainLevels::Retained => "RETAINED",
			| RetainLevels::NotRetained => "NOT_RETAINED",
			| RetainLevels::All => "ALL",
		}
	}
}

fn parse_tag<T: LevelSet>(
	kind: &'static str,
	value: &str,
) -> Result<T, PermissionError> {
	T::from_name(value).ok_or_else(|| PermissionError::unknown_tag(kind, value))
}

impl FromStr for QosLevels {
	type Err = PermissionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag(QOS_KIND, s)
	}
}

impl FromStr for Activities {
	type Err = PermissionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag(ACTIVITY_KIND, s)
	}
}

impl FromStr for RetainLevels {
	type Err = PermissionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag(RETAIN_KIND, s)
	}
}

const QOS_KIND: &str = "qos";
const ACTIVITY_KIND: &str = "activity";
const RETAIN_KIND: &str = "retain";

impl fmt::Display for QosLevels {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Display for Activities {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Display for RetainLevels {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl From<Qos> for QosLevels {
	fn from(qos: Qos) -> Self {
		Self::from_single_level(qos)
	}
}

impl From<Activity> for Activities {
	fn from(activity: Activity) -> Self {
		Self::from_single_level(activity)
	}
}
