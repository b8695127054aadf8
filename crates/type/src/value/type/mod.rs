// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod nested;

pub use nested::{ArrayType, MapType, StructField, StructType};

/// The closed set of data types understood by the evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Byte,
	/// A 2-byte signed integer
	Short,
	/// A 4-byte signed integer
	Int,
	/// An 8-byte signed integer
	Long,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// A UTF-8 encoded text
	String,
	/// Arbitrary bytes
	Binary,
	/// Days since 1970-01-01
	Date,
	/// Microseconds since 1970-01-01 00:00:00 UTC
	Timestamp,
	/// A fixed precision decimal
	Decimal {
		precision: u8,
		scale: u8,
	},
	Struct(StructType),
	Array(Box<ArrayType>),
	Map(Box<MapType>),
}

impl Type {
	pub fn array(element: Type, contains_null: bool) -> Type {
		Type::Array(Box::new(ArrayType::new(element, contains_null)))
	}

	pub fn map(key: Type, value: Type, value_contains_null: bool) -> Type {
		Type::Map(Box::new(MapType::new(key, value, value_contains_null)))
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Type::String)
	}

	pub fn is_number(&self) -> bool {
		self.numeric_rank().is_some()
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Byte | Type::Short | Type::Int | Type::Long)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float | Type::Double)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::Timestamp)
	}

	pub fn is_nested(&self) -> bool {
		matches!(self, Type::Struct(_) | Type::Array(_) | Type::Map(_))
	}

	pub fn is_primitive(&self) -> bool {
		!self.is_nested()
	}

	/// Position in the numeric widening order
	/// `byte < short < int < long < float < double`.
	///
	/// Decimals are not part of the order.
	pub fn numeric_rank(&self) -> Option<u8> {
		match self {
			Type::Byte => Some(0),
			Type::Short => Some(1),
			Type::Int => Some(2),
			Type::Long => Some(3),
			Type::Float => Some(4),
			Type::Double => Some(5),
			_ => None,
		}
	}

	/// Structural equality that ignores nullability flags of nested types.
	pub fn equivalent(&self, other: &Type) -> bool {
		match (self, other) {
			(Type::Struct(l), Type::Struct(r)) => {
				l.fields().len() == r.fields().len()
					&& l.fields()
						.iter()
						.zip(r.fields())
						.all(|(l, r)| l.name == r.name && l.ty.equivalent(&r.ty))
			}
			(Type::Array(l), Type::Array(r)) => l.element.equivalent(&r.element),
			(Type::Map(l), Type::Map(r)) => l.key.equivalent(&r.key) && l.value.equivalent(&r.value),
			(l, r) => l == r,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("boolean"),
			Type::Byte => f.write_str("byte"),
			Type::Short => f.write_str("short"),
			Type::Int => f.write_str("integer"),
			Type::Long => f.write_str("long"),
			Type::Float => f.write_str("float"),
			Type::Double => f.write_str("double"),
			Type::String => f.write_str("string"),
			Type::Binary => f.write_str("binary"),
			Type::Date => f.write_str("date"),
			Type::Timestamp => f.write_str("timestamp"),
			Type::Decimal {
				precision,
				scale,
			} => write!(f, "decimal({},{})", precision, scale),
			Type::Struct(s) => Display::fmt(s, f),
			Type::Array(a) => write!(f, "array<{}>", a.element),
			Type::Map(m) => write!(f, "map<{}, {}>", m.key, m.value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decimal_equality_requires_precision_and_scale() {
		let d = |precision, scale| Type::Decimal {
			precision,
			scale,
		};
		assert_eq!(d(10, 2), d(10, 2));
		assert_ne!(d(10, 2), d(10, 3));
		assert_ne!(d(10, 2), d(12, 2));
	}

	#[test]
	fn test_struct_equality_requires_order() {
		let ab = Type::Struct(StructType::new(vec![
			StructField::new("a", Type::Int, true),
			StructField::new("b", Type::String, true),
		]));
		let ba = Type::Struct(StructType::new(vec![
			StructField::new("b", Type::String, true),
			StructField::new("a", Type::Int, true),
		]));
		assert_ne!(ab, ba);
		assert!(!ab.equivalent(&ba));
	}

	#[test]
	fn test_equivalent_ignores_nullability() {
		let nullable = Type::array(Type::String, true);
		let non_nullable = Type::array(Type::String, false);
		assert_ne!(nullable, non_nullable);
		assert!(nullable.equivalent(&non_nullable));
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::Int.to_string(), "integer");
		assert_eq!(
			Type::Decimal {
				precision: 10,
				scale: 2
			}
			.to_string(),
			"decimal(10,2)"
		);
		assert_eq!(Type::map(Type::String, Type::Long, true).to_string(), "map<string, long>");
		let s = Type::Struct(StructType::new(vec![StructField::new("a", Type::array(Type::Date, true), true)]));
		assert_eq!(s.to_string(), "struct<a: array<date>>");
	}

	#[test]
	fn test_numeric_rank_order() {
		let order = [Type::Byte, Type::Short, Type::Int, Type::Long, Type::Float, Type::Double];
		for pair in order.windows(2) {
			assert!(pair[0].numeric_rank() < pair[1].numeric_rank());
		}
		assert_eq!(Type::Date.numeric_rank(), None);
		assert_eq!(
			Type::Decimal {
				precision: 5,
				scale: 0
			}
			.numeric_rank(),
			None
		);
	}
}
