// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{num::IntErrorKind, str::FromStr};

use crate::{
	Result,
	error::TypeError,
	return_error,
	value::{Type, Value},
};

/// Parses decimal integer text into the integer variant of `target`.
///
/// No trimming or digit separators are accepted.
pub fn parse_int(value: &str, target: &Type) -> Result<Value> {
	match target {
		Type::Byte => parse_int_as::<i8>(value, target).map(Value::Byte),
		Type::Short => parse_int_as::<i16>(value, target).map(Value::Short),
		Type::Int => parse_int_as::<i32>(value, target).map(Value::Int),
		Type::Long => parse_int_as::<i64>(value, target).map(Value::Long),
		_ => return_error!(TypeError::UnsupportedCast {
			from: Type::String,
			to: target.clone(),
		}),
	}
}

fn parse_int_as<T>(value: &str, target: &Type) -> Result<T>
where
	T: FromStr<Err = std::num::ParseIntError>,
{
	value.parse::<T>().map_err(|err| {
		let reason = match err.kind() {
			IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "value out of range",
			IntErrorKind::Empty => "empty string",
			_ => "not a valid integer",
		};
		crate::error!(TypeError::InvalidValue {
			value: value.to_string(),
			target: target.clone(),
			reason: reason.to_string(),
		})
	})
}

/// Parses decimal or scientific text, including `NaN`, `Infinity` and
/// `-Infinity`, into the float variant of `target`.
pub fn parse_float(value: &str, target: &Type) -> Result<Value> {
	let invalid = || {
		crate::error!(TypeError::InvalidValue {
			value: value.to_string(),
			target: target.clone(),
			reason: "not a valid floating point number".to_string(),
		})
	};

	match target {
		Type::Float => value.parse::<f32>().map(Value::Float).map_err(|_| invalid()),
		Type::Double => value.parse::<f64>().map(Value::Double).map_err(|_| invalid()),
		_ => return_error!(TypeError::UnsupportedCast {
			from: Type::String,
			to: target.clone(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn test_parse_int_each_width() {
		assert_eq!(parse_int("-128", &Type::Byte).unwrap(), Value::Byte(-128));
		assert_eq!(parse_int("32767", &Type::Short).unwrap(), Value::Short(32767));
		assert_eq!(parse_int("-7", &Type::Int).unwrap(), Value::Int(-7));
		assert_eq!(parse_int("9223372036854775807", &Type::Long).unwrap(), Value::Long(i64::MAX));
	}

	#[test]
	fn test_parse_int_out_of_range() {
		let err = parse_int("128", &Type::Byte).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
		assert!(err.message().contains("'128'"));
		assert!(err.message().contains("out of range"));
	}

	#[test]
	fn test_parse_int_malformed() {
		for text in ["abc", "1.5", " 1", "1_000", "0x10"] {
			let err = parse_int(text, &Type::Int).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::InvalidValue);
			assert!(err.message().contains(text));
		}
	}

	#[test]
	fn test_parse_float() {
		assert_eq!(parse_float("1.5", &Type::Float).unwrap(), Value::Float(1.5));
		assert_eq!(parse_float("-2.5e3", &Type::Double).unwrap(), Value::Double(-2500.0));
		assert_eq!(parse_float("Infinity", &Type::Double).unwrap(), Value::Double(f64::INFINITY));
		assert_eq!(parse_float("-Infinity", &Type::Float).unwrap(), Value::Float(f32::NEG_INFINITY));
		match parse_float("NaN", &Type::Double).unwrap() {
			Value::Double(v) => assert!(v.is_nan()),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn test_parse_float_malformed() {
		let err = parse_float("1.2.3", &Type::Double).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
		assert!(err.message().contains("1.2.3"));
	}
}
