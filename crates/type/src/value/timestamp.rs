// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Date;

pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// An instant in UTC with microsecond precision.
///
/// Stored as microseconds since 1970-01-01 00:00:00 UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp {
	micros_since_epoch: i64,
}

impl Timestamp {
	pub fn new(date: Date, hour: u32, minute: u32, second: u32, micros: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || micros >= 1_000_000 {
			return None;
		}
		let seconds_of_day = (hour * 3600 + minute * 60 + second) as i64;
		let micros_since_epoch = (date.to_days_since_epoch() as i64)
			.checked_mul(MICROS_PER_DAY)?
			.checked_add(seconds_of_day * MICROS_PER_SECOND + micros as i64)?;
		Some(Self {
			micros_since_epoch,
		})
	}

	pub fn from_micros_since_epoch(micros: i64) -> Self {
		Self {
			micros_since_epoch: micros,
		}
	}

	pub fn to_micros_since_epoch(&self) -> i64 {
		self.micros_since_epoch
	}

	pub fn date(&self) -> Date {
		Date::from_days_since_epoch(self.micros_since_epoch.div_euclid(MICROS_PER_DAY) as i32)
	}

	fn micros_of_day(&self) -> i64 {
		self.micros_since_epoch.rem_euclid(MICROS_PER_DAY)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let micros = self.micros_of_day();
		let seconds = micros / MICROS_PER_SECOND;
		let fraction = micros % MICROS_PER_SECOND;
		write!(f, "{} {:02}:{:02}:{:02}", self.date(), seconds / 3600, (seconds / 60) % 60, seconds % 60)?;
		if fraction != 0 {
			write!(f, ".{:06}", fraction)?;
		}
		Ok(())
	}
}
