// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use strata_type::{Date, Decimal, Result, Timestamp, Type, TypeError, Value, return_error};

/// An immutable typed scalar; a missing value is SQL null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Literal {
	ty: Type,
	value: Option<Value>,
}

impl Literal {
	/// Fails when `value` is not of type `ty`.
	pub fn new(ty: Type, value: Option<Value>) -> Result<Self> {
		if let Some(v) = &value {
			let actual = v.get_type();
			if actual != ty {
				return_error!(TypeError::UnsupportedCast {
					from: actual,
					to: ty,
				});
			}
		}
		Ok(Self {
			ty,
			value,
		})
	}

	fn of(value: Value) -> Self {
		Self {
			ty: value.get_type(),
			value: Some(value),
		}
	}

	/// A null of any type, including nested types.
	pub fn null(ty: Type) -> Self {
		Self {
			ty,
			value: None,
		}
	}

	pub fn boolean(v: bool) -> Self {
		Self::of(Value::Boolean(v))
	}

	pub fn byte(v: i8) -> Self {
		Self::of(Value::Byte(v))
	}

	pub fn short(v: i16) -> Self {
		Self::of(Value::Short(v))
	}

	pub fn int(v: i32) -> Self {
		Self::of(Value::Int(v))
	}

	pub fn long(v: i64) -> Self {
		Self::of(Value::Long(v))
	}

	pub fn float(v: f32) -> Self {
		Self::of(Value::Float(v))
	}

	pub fn double(v: f64) -> Self {
		Self::of(Value::Double(v))
	}

	pub fn string(v: impl Into<String>) -> Self {
		Self::of(Value::String(v.into()))
	}

	pub fn binary(v: impl Into<Vec<u8>>) -> Self {
		Self::of(Value::Binary(v.into()))
	}

	pub fn date(v: Date) -> Self {
		Self::of(Value::Date(v))
	}

	pub fn timestamp(v: Timestamp) -> Self {
		Self::of(Value::Timestamp(v))
	}

	/// Rescales `v` to `scale`; fails if it does not fit `decimal(precision, scale)`.
	pub fn decimal(v: BigDecimal, precision: u8, scale: u8) -> Result<Self> {
		Ok(Self::of(Value::Decimal(Decimal::new(v, precision, scale)?)))
	}

	pub fn get_type(&self) -> &Type {
		&self.ty
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn is_null(&self) -> bool {
		self.value.is_none()
	}
}

impl Display for Literal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.value {
			Some(v) => Display::fmt(v, f),
			None => f.write_str("NULL"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use strata_type::ErrorKind;

	use super::*;

	#[test]
	fn test_typed_constructors() {
		assert_eq!(Literal::int(1).get_type(), &Type::Int);
		assert_eq!(Literal::string("a").value(), Some(&Value::String("a".to_string())));
		assert!(!Literal::boolean(false).is_null());
	}

	#[test]
	fn test_null_of_nested_type() {
		let literal = Literal::null(Type::map(Type::String, Type::String, true));
		assert!(literal.is_null());
		assert_eq!(literal.to_string(), "NULL");
	}

	#[test]
	fn test_new_rejects_mismatched_value() {
		let err = Literal::new(Type::Long, Some(Value::Int(1))).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
	}

	#[test]
	fn test_decimal_is_rescaled() {
		let literal = Literal::decimal(BigDecimal::from_str("1.5").unwrap(), 5, 2).unwrap();
		assert_eq!(
			literal.get_type(),
			&Type::Decimal {
				precision: 5,
				scale: 2
			}
		);
		assert_eq!(literal.to_string(), "1.50");
		assert!(Literal::decimal(BigDecimal::from_str("1.555").unwrap(), 5, 2).is_err());
	}
}
