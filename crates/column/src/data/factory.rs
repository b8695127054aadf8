// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{
	ArrayType, BitVec, Date, Decimal, MapType, Result, StructType, Timestamp, Type, TypeError, Value, return_error,
};

use crate::{
	ColumnData,
	container::{
		ArrayContainer, BlobContainer, BoolContainer, DecimalContainer, MapContainer, NumberContainer,
		StructContainer, TemporalContainer, Utf8Container,
	},
};

macro_rules! factory {
	($name:ident, $optional:ident, $t:ty, $variant:ident, $container:ident) => {
		pub fn $name(data: impl IntoIterator<Item = $t>) -> Self {
			ColumnData::$variant($container::from_vec(data.into_iter().collect()))
		}

		pub fn $optional(data: impl IntoIterator<Item = Option<$t>>) -> Self {
			let mut values = Vec::new();
			let mut bitvec = BitVec::new();
			for v in data {
				bitvec.push(v.is_some());
				values.push(v.unwrap_or_default());
			}
			ColumnData::$variant($container::new(values, bitvec))
		}
	};
}

impl ColumnData {
	factory!(bool, bool_optional, bool, Bool, BoolContainer);
	factory!(byte, byte_optional, i8, Byte, NumberContainer);
	factory!(short, short_optional, i16, Short, NumberContainer);
	factory!(int, int_optional, i32, Int, NumberContainer);
	factory!(long, long_optional, i64, Long, NumberContainer);
	factory!(float, float_optional, f32, Float, NumberContainer);
	factory!(double, double_optional, f64, Double, NumberContainer);
	factory!(blob, blob_optional, Vec<u8>, Blob, BlobContainer);
	factory!(date, date_optional, Date, Date, TemporalContainer);
	factory!(timestamp, timestamp_optional, Timestamp, Timestamp, TemporalContainer);

	pub fn utf8<S: Into<String>>(data: impl IntoIterator<Item = S>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(Into::into).collect()))
	}

	pub fn utf8_optional<S: Into<String>>(data: impl IntoIterator<Item = Option<S>>) -> Self {
		let mut container = Utf8Container::with_capacity(0);
		for v in data {
			match v {
				Some(v) => container.push(v),
				None => container.push_undefined(),
			}
		}
		ColumnData::Utf8(container)
	}

	pub fn decimal_optional(precision: u8, scale: u8, data: impl IntoIterator<Item = Option<Decimal>>) -> Self {
		let mut container = DecimalContainer::with_capacity(precision, scale, 0);
		for v in data {
			match v {
				Some(v) => container.push(v),
				None => container.push_undefined(),
			}
		}
		ColumnData::Decimal(container)
	}

	pub fn structure(ty: StructType, children: Vec<ColumnData>, bitvec: BitVec) -> Result<Self> {
		StructContainer::new(ty, children, bitvec).map(ColumnData::Struct)
	}

	pub fn array(ty: ArrayType, offsets: Vec<usize>, elements: ColumnData, bitvec: BitVec) -> Result<Self> {
		ArrayContainer::new(ty, offsets, elements, bitvec).map(ColumnData::Array)
	}

	pub fn map(ty: MapType, offsets: Vec<usize>, keys: ColumnData, values: ColumnData, bitvec: BitVec) -> Result<Self> {
		MapContainer::new(ty, offsets, keys, values, bitvec).map(ColumnData::Map)
	}

	/// Builds a `map<string, string>` column; `None` rows are null maps and
	/// `None` values are null entries.
	pub fn string_map<'a>(rows: impl IntoIterator<Item = Option<Vec<(&'a str, Option<&'a str>)>>>) -> Self {
		let mut offsets = vec![0];
		let mut bitvec = BitVec::new();
		let mut keys = Utf8Container::with_capacity(0);
		let mut values = Utf8Container::with_capacity(0);
		for row in rows {
			bitvec.push(row.is_some());
			for (key, value) in row.unwrap_or_default() {
				keys.push(key);
				match value {
					Some(v) => values.push(v),
					None => values.push_undefined(),
				}
			}
			offsets.push(keys.len());
		}
		ColumnData::Map(MapContainer::from_parts(
			MapType::new(Type::String, Type::String, true),
			offsets,
			ColumnData::Utf8(keys),
			ColumnData::Utf8(values),
			bitvec,
		))
	}

	/// An all-null column of `ty`, recursively for nested types.
	pub fn null(ty: &Type, len: usize) -> Self {
		let bitvec = BitVec::repeat(len, false);
		match ty {
			Type::Boolean => ColumnData::Bool(BoolContainer::new(vec![false; len], bitvec)),
			Type::Byte => ColumnData::Byte(NumberContainer::new(vec![0; len], bitvec)),
			Type::Short => ColumnData::Short(NumberContainer::new(vec![0; len], bitvec)),
			Type::Int => ColumnData::Int(NumberContainer::new(vec![0; len], bitvec)),
			Type::Long => ColumnData::Long(NumberContainer::new(vec![0; len], bitvec)),
			Type::Float => ColumnData::Float(NumberContainer::new(vec![0.0; len], bitvec)),
			Type::Double => ColumnData::Double(NumberContainer::new(vec![0.0; len], bitvec)),
			Type::String => ColumnData::Utf8(Utf8Container::new(vec![String::new(); len], bitvec)),
			Type::Binary => ColumnData::Blob(BlobContainer::new(vec![Vec::new(); len], bitvec)),
			Type::Date => ColumnData::Date(TemporalContainer::new(vec![Date::default(); len], bitvec)),
			Type::Timestamp => {
				ColumnData::Timestamp(TemporalContainer::new(vec![Timestamp::default(); len], bitvec))
			}
			Type::Decimal {
				precision,
				scale,
			} => ColumnData::Decimal(DecimalContainer::new(
				vec![Decimal::zero(*precision, *scale); len],
				bitvec,
				*precision,
				*scale,
			)),
			Type::Struct(s) => ColumnData::Struct(StructContainer::from_parts(
				s.clone(),
				s.fields().iter().map(|f| Self::null(&f.ty, len)).collect(),
				bitvec,
			)),
			Type::Array(a) => ColumnData::Array(ArrayContainer::from_parts(
				(**a).clone(),
				vec![0; len + 1],
				Self::null(&a.element, 0),
				bitvec,
			)),
			Type::Map(m) => ColumnData::Map(MapContainer::from_parts(
				(**m).clone(),
				vec![0; len + 1],
				Self::null(&m.key, 0),
				Self::null(&m.value, 0),
				bitvec,
			)),
		}
	}

	/// A column of `len` rows that all hold `value`, or all null when `value`
	/// is `None`.
	pub fn broadcast(ty: &Type, value: Option<&Value>, len: usize) -> Result<Self> {
		let Some(value) = value else {
			return Ok(Self::null(ty, len));
		};

		Ok(match (ty, value) {
			(Type::Boolean, Value::Boolean(v)) => ColumnData::bool(std::iter::repeat_n(*v, len)),
			(Type::Byte, Value::Byte(v)) => ColumnData::byte(std::iter::repeat_n(*v, len)),
			(Type::Short, Value::Short(v)) => ColumnData::short(std::iter::repeat_n(*v, len)),
			(Type::Int, Value::Int(v)) => ColumnData::int(std::iter::repeat_n(*v, len)),
			(Type::Long, Value::Long(v)) => ColumnData::long(std::iter::repeat_n(*v, len)),
			(Type::Float, Value::Float(v)) => ColumnData::float(std::iter::repeat_n(*v, len)),
			(Type::Double, Value::Double(v)) => ColumnData::double(std::iter::repeat_n(*v, len)),
			(Type::String, Value::String(v)) => ColumnData::utf8(std::iter::repeat_n(v.as_str(), len)),
			(Type::Binary, Value::Binary(v)) => ColumnData::blob(std::iter::repeat_n(v.clone(), len)),
			(Type::Date, Value::Date(v)) => ColumnData::date(std::iter::repeat_n(*v, len)),
			(Type::Timestamp, Value::Timestamp(v)) => ColumnData::timestamp(std::iter::repeat_n(*v, len)),
			(
				Type::Decimal {
					precision,
					scale,
				},
				Value::Decimal(v),
			) if v.precision() == *precision && v.scale() == *scale => {
				ColumnData::decimal_optional(*precision, *scale, std::iter::repeat_n(Some(v.clone()), len))
			}
			(ty, value) => return_error!(TypeError::UnsupportedCast {
				from: value.get_type(),
				to: ty.clone(),
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use strata_type::{ErrorKind, StructField};

	use super::*;

	#[test]
	fn test_broadcast_repeats_value() {
		let data = ColumnData::broadcast(&Type::Long, Some(&Value::Long(42)), 3).unwrap();
		assert_eq!(data.len(), 3);
		for i in 0..3 {
			assert!(!data.is_null(i));
			assert_eq!(data.get_long(i), 42);
		}
	}

	#[test]
	fn test_broadcast_null() {
		let data = ColumnData::broadcast(&Type::String, None, 2).unwrap();
		assert_eq!(data.get_type(), Type::String);
		assert!(data.is_null(0));
		assert!(data.is_null(1));
	}

	#[test]
	fn test_broadcast_zero_rows() {
		let data = ColumnData::broadcast(&Type::Int, Some(&Value::Int(1)), 0).unwrap();
		assert!(data.is_empty());
	}

	#[test]
	fn test_broadcast_rejects_mismatched_value() {
		let err = ColumnData::broadcast(&Type::Int, Some(&Value::Long(1)), 1).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
	}

	#[test]
	fn test_null_struct_has_null_children() {
		let ty = Type::Struct(StructType::new(vec![
			StructField::new("a", Type::Int, true),
			StructField::new("b", Type::array(Type::String, true), true),
		]));
		let data = ColumnData::null(&ty, 2);
		assert_eq!(data.len(), 2);
		assert!(data.is_null(1));
		assert!(data.child(0).is_null(1));
		assert_eq!(data.child(1).len(), 2);
	}

	#[test]
	fn test_string_map() {
		let data = ColumnData::string_map([Some(vec![("a", Some("1")), ("b", None)]), None, Some(vec![])]);
		assert_eq!(data.len(), 3);
		assert!(data.is_null(1));
		assert_eq!(data.map_range(0), 0..2);
		assert_eq!(data.map_range(2), 2..2);
		assert_eq!(data.map_keys().get_string(1), "b");
		assert!(data.map_values().is_null(1));
	}
}
