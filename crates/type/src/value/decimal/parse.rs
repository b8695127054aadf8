// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{Result, error::TypeError, value::Type, value::decimal::Decimal};

/// Parses exact decimal text into a `decimal(precision, scale)` value.
pub fn parse_decimal(value: &str, precision: u8, scale: u8) -> Result<Decimal> {
	let target = Type::Decimal {
		precision,
		scale,
	};

	// BigDecimal accepts surrounding whitespace and digit separators; the
	// serialized form does not.
	if value.is_empty() || value.bytes().any(|b| b.is_ascii_whitespace() || b == b'_') {
		return Err(crate::error!(TypeError::InvalidValue {
			value: value.to_string(),
			target,
			reason: "not a valid decimal number".to_string(),
		}));
	}

	let parsed = BigDecimal::from_str(value).map_err(|_| {
		crate::error!(TypeError::InvalidValue {
			value: value.to_string(),
			target: target.clone(),
			reason: "not a valid decimal number".to_string(),
		})
	})?;

	Decimal::checked(parsed, precision, scale, value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn test_parse_decimal_integer() {
		let decimal = parse_decimal("123", 5, 0).unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		let decimal = parse_decimal("123.45", 5, 2).unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_pads_scale() {
		let decimal = parse_decimal("-1.5", 10, 3).unwrap();
		assert_eq!(decimal.to_string(), "-1.500");
	}

	#[test]
	fn test_parse_decimal_scientific() {
		let decimal = parse_decimal("1.5E2", 5, 1).unwrap();
		assert_eq!(decimal.to_string(), "150.0");
	}

	#[test]
	fn test_parse_decimal_rejects_excess_scale() {
		let err = parse_decimal("1.005", 5, 2).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
		assert!(err.message().contains("1.005"));
	}

	#[test]
	fn test_parse_decimal_rejects_excess_precision() {
		let err = parse_decimal("12345.6", 5, 1).unwrap_err();
		assert!(err.message().contains("12345.6"));
	}

	#[test]
	fn test_parse_decimal_rejects_huge_exponent() {
		let start = std::time::Instant::now();
		for text in ["1E100000000", "-9.9E2000000", "12345678901234567890"] {
			let err = parse_decimal(text, 10, 2).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::InvalidValue);
			assert!(err.message().contains("integer digits"), "{}", err.message());
		}
		let err = parse_decimal("1E-100000000", 10, 2).unwrap_err();
		assert!(err.message().contains("fractional digits"), "{}", err.message());
		assert!(start.elapsed() < std::time::Duration::from_secs(1));
	}

	#[test]
	fn test_parse_decimal_zero_fits_any_type() {
		assert_eq!(parse_decimal("0", 2, 2).unwrap().to_string(), "0.00");
		assert_eq!(parse_decimal("0E100000000", 2, 2).unwrap().to_string(), "0.00");
		assert_eq!(parse_decimal("0.99", 2, 2).unwrap().to_string(), "0.99");
		assert!(parse_decimal("1.00", 2, 2).is_err());
	}

	#[test]
	fn test_parse_decimal_invalid() {
		for text in ["", "abc", "1.2.3", " 1.0", "1_000"] {
			let err = parse_decimal(text, 10, 2).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::InvalidValue);
			assert!(err.message().contains(&format!("'{}'", text)));
		}
	}
}
