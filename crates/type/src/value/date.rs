// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar date without time zone.
///
/// Stored as days since the Unix epoch (1970-01-01).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date {
	days_since_epoch: i32,
}

impl Date {
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Howard Hinnant's days_from_civil
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let y = if month <= 2 {
			year - 1
		} else {
			year
		};
		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400;
		let m = month as i32;
		let doy = (153 * (m + if m > 2 {
			-3
		} else {
			9
		}) + 2) / 5 + day as i32
			- 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

		Some(era * 146097 + doe - 719468)
	}

	// Howard Hinnant's civil_from_days
	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let z = days + 719468;
		let era = if z >= 0 {
			z
		} else {
			z - 146096
		} / 146097;
		let doe = z - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
		let month = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		} as u32;
		let year = yoe + era * 400 + if month <= 2 {
			1
		} else {
			0
		};

		(year, month, day)
	}

	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_days_since_epoch(days: i32) -> Self {
		Self {
			days_since_epoch: days,
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		let date = Date::new(1970, 1, 1).unwrap();
		assert_eq!(date.to_days_since_epoch(), 0);
		assert_eq!(date.to_string(), "1970-01-01");
	}

	#[test]
	fn test_days_since_epoch() {
		assert_eq!(Date::new(2000, 1, 1).unwrap().to_days_since_epoch(), 10957);
		assert_eq!(Date::new(1969, 12, 31).unwrap().to_days_since_epoch(), -1);
		assert_eq!(Date::new(2024, 3, 1).unwrap().to_days_since_epoch(), 19783);
	}

	#[test]
	fn test_roundtrip() {
		for (y, m, d) in [(1900, 2, 28), (2000, 2, 29), (2024, 12, 31), (1, 1, 1), (9999, 12, 31)] {
			let date = Date::new(y, m, d).unwrap();
			let recovered = Date::from_days_since_epoch(date.to_days_since_epoch());
			assert_eq!(recovered.year(), y);
			assert_eq!(recovered.month(), m);
			assert_eq!(recovered.day(), d);
		}
	}

	#[test]
	fn test_invalid_dates() {
		assert!(Date::new(2023, 2, 29).is_none());
		assert!(Date::new(1900, 2, 29).is_none());
		assert!(Date::new(2024, 4, 31).is_none());
		assert!(Date::new(2024, 13, 1).is_none());
		assert!(Date::new(2024, 0, 1).is_none());
		assert!(Date::new(2024, 1, 0).is_none());
	}

	#[test]
	fn test_ordering() {
		assert!(Date::new(2023, 12, 31).unwrap() < Date::new(2024, 1, 1).unwrap());
	}
}
