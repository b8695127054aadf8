// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use strata_type::{Date, Decimal, Timestamp, Value};

use crate::ColumnData;

macro_rules! getter {
	($name:ident, $variant:ident, $t:ty) => {
		/// Reads row `idx` without checking its validity bit.
		///
		/// # Panics
		///
		/// If the column is of a different type.
		pub fn $name(&self, idx: usize) -> $t {
			match self {
				ColumnData::$variant(c) => c.value(idx),
				other => other.type_mismatch(stringify!($name)),
			}
		}
	};
}

impl ColumnData {
	getter!(get_bool, Bool, bool);
	getter!(get_byte, Byte, i8);
	getter!(get_short, Short, i16);
	getter!(get_int, Int, i32);
	getter!(get_long, Long, i64);
	getter!(get_float, Float, f32);
	getter!(get_double, Double, f64);
	getter!(get_string, Utf8, &str);
	getter!(get_binary, Blob, &[u8]);
	getter!(get_date, Date, Date);
	getter!(get_timestamp, Timestamp, Timestamp);
	getter!(get_decimal, Decimal, &Decimal);

	fn type_mismatch(&self, getter: &str) -> ! {
		panic!("{} called on a column of type {}", getter, self.get_type())
	}

	/// Reads any primitive row as a [`Value`]; `None` for null rows and for
	/// nested columns.
	pub fn get_value(&self, idx: usize) -> Option<Value> {
		if self.is_null(idx) {
			return None;
		}
		Some(match self {
			ColumnData::Bool(c) => Value::Boolean(c.value(idx)),
			ColumnData::Byte(c) => Value::Byte(c.value(idx)),
			ColumnData::Short(c) => Value::Short(c.value(idx)),
			ColumnData::Int(c) => Value::Int(c.value(idx)),
			ColumnData::Long(c) => Value::Long(c.value(idx)),
			ColumnData::Float(c) => Value::Float(c.value(idx)),
			ColumnData::Double(c) => Value::Double(c.value(idx)),
			ColumnData::Utf8(c) => Value::String(c.value(idx).to_string()),
			ColumnData::Blob(c) => Value::Binary(c.value(idx).to_vec()),
			ColumnData::Date(c) => Value::Date(c.value(idx)),
			ColumnData::Timestamp(c) => Value::Timestamp(c.value(idx)),
			ColumnData::Decimal(c) => Value::Decimal(c.value(idx).clone()),
			ColumnData::Struct(_) | ColumnData::Array(_) | ColumnData::Map(_) => return None,
		})
	}

	/// The child vector of a struct column.
	///
	/// # Panics
	///
	/// If the column is not a struct.
	pub fn child(&self, ordinal: usize) -> &ColumnData {
		match self {
			ColumnData::Struct(c) => c.child(ordinal),
			other => other.type_mismatch("child"),
		}
	}

	pub fn children(&self) -> &[ColumnData] {
		match self {
			ColumnData::Struct(c) => c.children(),
			other => other.type_mismatch("children"),
		}
	}

	/// Positions of row `idx` in the flattened element vector of an array
	/// column.
	pub fn array_range(&self, idx: usize) -> Range<usize> {
		match self {
			ColumnData::Array(c) => c.range(idx),
			other => other.type_mismatch("array_range"),
		}
	}

	pub fn array_elements(&self) -> &ColumnData {
		match self {
			ColumnData::Array(c) => c.elements(),
			other => other.type_mismatch("array_elements"),
		}
	}

	/// Positions of row `idx` in the flattened key and value vectors of a
	/// map column.
	pub fn map_range(&self, idx: usize) -> Range<usize> {
		match self {
			ColumnData::Map(c) => c.range(idx),
			other => other.type_mismatch("map_range"),
		}
	}

	pub fn map_keys(&self) -> &ColumnData {
		match self {
			ColumnData::Map(c) => c.keys(),
			other => other.type_mismatch("map_keys"),
		}
	}

	pub fn map_values(&self) -> &ColumnData {
		match self {
			ColumnData::Map(c) => c.values(),
			other => other.type_mismatch("map_values"),
		}
	}
}

#[cfg(test)]
mod tests {
	use strata_type::{BitVec, StructField, StructType, Type};

	use super::*;

	#[test]
	fn test_typed_getters() {
		assert_eq!(ColumnData::byte([-1]).get_byte(0), -1);
		assert_eq!(ColumnData::double([2.5]).get_double(0), 2.5);
		assert_eq!(ColumnData::utf8(["abc"]).get_string(0), "abc");
		assert_eq!(ColumnData::blob([vec![1, 2]]).get_binary(0), &[1, 2]);
		let date = Date::new(2024, 1, 2).unwrap();
		assert_eq!(ColumnData::date([date]).get_date(0), date);
	}

	#[test]
	#[should_panic(expected = "get_int called on a column of type long")]
	fn test_getter_type_mismatch_panics() {
		ColumnData::long([1]).get_int(0);
	}

	#[test]
	fn test_get_value() {
		let data = ColumnData::utf8_optional([Some("a"), None]);
		assert_eq!(data.get_value(0), Some(Value::String("a".to_string())));
		assert_eq!(data.get_value(1), None);
	}

	#[test]
	fn test_get_value_of_nested_is_none() {
		let ty = StructType::new(vec![StructField::new("a", Type::Int, true)]);
		let data = ColumnData::structure(ty, vec![ColumnData::int([1])], BitVec::repeat(1, true)).unwrap();
		assert_eq!(data.get_value(0), None);
		assert_eq!(data.child(0).get_int(0), 1);
	}
}
