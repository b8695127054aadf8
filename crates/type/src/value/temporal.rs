// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	error::TypeError,
	value::{Date, Timestamp, Type},
};

fn invalid(value: &str, target: Type, reason: &str) -> crate::Error {
	crate::error!(TypeError::InvalidValue {
		value: value.to_string(),
		target,
		reason: reason.to_string(),
	})
}

fn parse_digits(part: &str, min: usize, max: usize) -> Option<u32> {
	if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	part.parse().ok()
}

fn parse_ymd(text: &str) -> Option<Date> {
	let mut parts = text.split('-');
	let year = parse_digits(parts.next()?, 4, 4)?;
	let month = parse_digits(parts.next()?, 1, 2)?;
	let day = parse_digits(parts.next()?, 1, 2)?;
	if parts.next().is_some() {
		return None;
	}
	Date::new(year as i32, month, day)
}

/// Parses `YYYY-MM-DD` (month and day may be a single digit).
pub fn parse_date(value: &str) -> Result<Date> {
	parse_ymd(value).ok_or_else(|| invalid(value, Type::Date, "expected YYYY-MM-DD"))
}

/// Parses `YYYY-MM-DD HH:MM:SS[.fffffffff]` as UTC.
///
/// A `T` may replace the space and a trailing `Z` is accepted. Fractions
/// beyond microseconds are truncated.
pub fn parse_timestamp(value: &str) -> Result<Timestamp> {
	let err = || invalid(value, Type::Timestamp, "expected YYYY-MM-DD HH:MM:SS[.ffffff]");

	let text = value.strip_suffix('Z').unwrap_or(value);
	let (date, time) = text.split_once([' ', 'T']).ok_or_else(err)?;
	let date = parse_ymd(date).ok_or_else(err)?;

	let (hms, fraction) = match time.split_once('.') {
		Some((hms, fraction)) => (hms, Some(fraction)),
		None => (time, None),
	};

	let mut parts = hms.split(':');
	let hour = parts.next().and_then(|p| parse_digits(p, 1, 2)).ok_or_else(err)?;
	let minute = parts.next().and_then(|p| parse_digits(p, 1, 2)).ok_or_else(err)?;
	let second = parts.next().and_then(|p| parse_digits(p, 1, 2)).ok_or_else(err)?;
	if parts.next().is_some() {
		return Err(err());
	}

	let micros = match fraction {
		Some(fraction) => {
			let digits = parse_digits(fraction, 1, 9).ok_or_else(err)?;
			let width = fraction.len() as u32;
			if width > 6 {
				digits / 10u32.pow(width - 6)
			} else {
				digits * 10u32.pow(6 - width)
			}
		}
		None => 0,
	};

	Timestamp::new(date, hour, minute, second, micros).ok_or_else(err)
}
