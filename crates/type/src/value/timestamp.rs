// Copyright (c) collatedb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

/// A point in time with millisecond precision.
///
/// Internally stored as milliseconds since the Unix epoch (1970-01-01T00:00:00Z).
/// Negative values represent instants before the epoch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
	millis: i64,
}

impl Timestamp {
	pub fn from_millis(millis: i64) -> Self {
		Self {
			millis,
		}
	}

	pub fn to_millis(&self) -> i64 {
		self.millis
	}

	pub fn now() -> Self {
		// Duration since the epoch is unsigned; a pre-epoch system
		// clock collapses to the epoch itself.
		let millis = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|duration| duration.as_millis() as i64)
			.unwrap_or(0);
		Self {
			millis,
		}
	}
}

impl From<i64> for Timestamp {
	fn from(millis: i64) -> Self {
		Self::from_millis(millis)
	}
}

impl From<Timestamp> for i64 {
	fn from(timestamp: Timestamp) -> Self {
		timestamp.millis
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.millis)
	}
}
