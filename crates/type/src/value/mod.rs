// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod boolean;
mod date;
pub mod decimal;
pub mod number;
pub mod temporal;
mod timestamp;
mod r#type;

pub use date::Date;
pub use decimal::Decimal;
pub use timestamp::Timestamp;
pub use r#type::{ArrayType, MapType, StructField, StructType, Type};

/// A non-null scalar, one variant per primitive [`Type`].
///
/// Absence of a value (SQL null) is expressed as `Option<Value>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Boolean(bool),
	Byte(i8),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	String(String),
	Binary(Vec<u8>),
	Date(Date),
	Timestamp(Timestamp),
	Decimal(Decimal),
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Boolean(_) => Type::Boolean,
			Value::Byte(_) => Type::Byte,
			Value::Short(_) => Type::Short,
			Value::Int(_) => Type::Int,
			Value::Long(_) => Type::Long,
			Value::Float(_) => Type::Float,
			Value::Double(_) => Type::Double,
			Value::String(_) => Type::String,
			Value::Binary(_) => Type::Binary,
			Value::Date(_) => Type::Date,
			Value::Timestamp(_) => Type::Timestamp,
			Value::Decimal(d) => d.get_type(),
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Byte(v) => Display::fmt(v, f),
			Value::Short(v) => Display::fmt(v, f),
			Value::Int(v) => Display::fmt(v, f),
			Value::Long(v) => Display::fmt(v, f),
			Value::Float(v) => Display::fmt(v, f),
			Value::Double(v) => Display::fmt(v, f),
			Value::String(v) => write!(f, "'{}'", v),
			Value::Binary(v) => {
				f.write_str("0x")?;
				for b in v {
					write!(f, "{:02x}", b)?;
				}
				Ok(())
			}
			Value::Date(v) => write!(f, "DATE '{}'", v),
			Value::Timestamp(v) => write!(f, "TIMESTAMP '{}'", v),
			Value::Decimal(v) => Display::fmt(v, f),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Value::$variant(v)
				}
			}
		)+
	};
}

impl_from!(
	bool => Boolean,
	i8 => Byte,
	i16 => Short,
	i32 => Int,
	i64 => Long,
	f32 => Float,
	f64 => Double,
	String => String,
	Vec<u8> => Binary,
	Date => Date,
	Timestamp => Timestamp,
	Decimal => Decimal,
);

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}
