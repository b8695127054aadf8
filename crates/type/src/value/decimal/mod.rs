// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

mod parse;

pub use parse::parse_decimal;

use crate::{Result, error::TypeError, return_error, value::Type};

/// A fixed precision decimal number.
///
/// The inner value always carries exactly `scale` fractional digits and at
/// most `precision` digits in total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
	inner: BigDecimal,
	precision: u8,
	scale: u8,
}

impl Decimal {
	/// Rescales `value` to `scale` and validates it against `precision`.
	///
	/// Fails when `value` has more fractional digits than `scale`, or more
	/// integer digits than `precision - scale`.
	pub fn new(value: BigDecimal, precision: u8, scale: u8) -> Result<Self> {
		let text = value.to_string();
		Self::checked(value, precision, scale, &text)
	}

	/// Like [`Decimal::new`], but errors quote `text` instead of the parsed
	/// value.
	pub(crate) fn checked(value: BigDecimal, precision: u8, scale: u8, text: &str) -> Result<Self> {
		let target = Type::Decimal {
			precision,
			scale,
		};

		if scale > precision {
			return_error!(TypeError::InvalidValue {
				value: text.to_string(),
				target,
				reason: format!("scale {} exceeds precision {}", scale, precision),
			});
		}

		let (unscaled, exponent) = value.into_bigint_and_exponent();
		if unscaled.bits() == 0 {
			return Ok(Self::zero(precision, scale));
		}

		// Digit counts come from the unscaled integer; rescaling a value like
		// 1E100000000 would materialize the full power of ten.
		let digits = unscaled.magnitude().to_string();
		let trailing_zeros = (digits.len() - digits.trim_end_matches('0').len()) as i64;
		if exponent.saturating_sub(trailing_zeros) > scale as i64 {
			return_error!(TypeError::InvalidValue {
				value: text.to_string(),
				target,
				reason: format!("more than {} fractional digits", scale),
			});
		}
		if (digits.len() as i64).saturating_sub(exponent) > (precision - scale) as i64 {
			return_error!(TypeError::InvalidValue {
				value: text.to_string(),
				target,
				reason: format!("more than {} integer digits", precision - scale),
			});
		}

		let inner = BigDecimal::new(unscaled, exponent).with_scale(scale as i64);
		Ok(Self {
			inner,
			precision,
			scale,
		})
	}

	pub fn zero(precision: u8, scale: u8) -> Self {
		Self {
			inner: BigDecimal::from(0).with_scale(scale as i64),
			precision,
			scale,
		}
	}

	pub fn precision(&self) -> u8 {
		self.precision
	}

	pub fn scale(&self) -> u8 {
		self.scale
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.inner
	}

	pub fn get_type(&self) -> Type {
		Type::Decimal {
			precision: self.precision,
			scale: self.scale,
		}
	}
}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		self.inner.cmp(&other.inner)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.inner, f)
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	fn big(s: &str) -> BigDecimal {
		BigDecimal::from_str(s).unwrap()
	}

	#[test]
	fn test_rescales_to_scale() {
		let d = Decimal::new(big("1.5"), 5, 3).unwrap();
		assert_eq!(d.to_string(), "1.500");
		assert_eq!(
			d.get_type(),
			Type::Decimal {
				precision: 5,
				scale: 3
			}
		);
	}

	#[test]
	fn test_trailing_zeros_do_not_count_as_fraction() {
		assert!(Decimal::new(big("1.2300"), 5, 2).is_ok());
	}

	#[test]
	fn test_too_many_fractional_digits() {
		let err = Decimal::new(big("1.234"), 5, 2).unwrap_err();
		assert!(err.message().contains("1.234"));
	}

	#[test]
	fn test_too_many_integer_digits() {
		assert!(Decimal::new(big("999.99"), 5, 2).is_ok());
		let err = Decimal::new(big("1000.00"), 5, 2).unwrap_err();
		assert!(err.message().contains("1000.00"));
	}

	#[test]
	fn test_zero_fits_any_precision() {
		assert!(Decimal::new(big("0"), 1, 1).is_ok());
		assert!(Decimal::new(big("0.5"), 1, 1).is_ok());
	}

	#[test]
	fn test_ordering_by_value() {
		let a = Decimal::new(big("-1.25"), 10, 2).unwrap();
		let b = Decimal::new(big("1.2"), 10, 2).unwrap();
		assert!(a < b);
		assert_eq!(b, Decimal::new(big("1.20"), 10, 2).unwrap());
	}
}
