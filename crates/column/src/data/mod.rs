// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod factory;
mod get;
mod widen;

use serde::{Deserialize, Serialize};
use strata_type::{BitVec, Date, Timestamp, Type};

use crate::container::{
	ArrayContainer, BlobContainer, BoolContainer, DecimalContainer, MapContainer, NumberContainer, StructContainer,
	TemporalContainer, Utf8Container,
};

/// One column's values for every row of a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Byte(NumberContainer<i8>),
	Short(NumberContainer<i16>),
	Int(NumberContainer<i32>),
	Long(NumberContainer<i64>),
	Float(NumberContainer<f32>),
	Double(NumberContainer<f64>),
	Utf8(Utf8Container),
	Blob(BlobContainer),
	Date(TemporalContainer<Date>),
	Timestamp(TemporalContainer<Timestamp>),
	Decimal(DecimalContainer),
	Struct(StructContainer),
	Array(ArrayContainer),
	Map(MapContainer),
}

macro_rules! dispatch {
	($self:expr, $c:ident => $body:expr) => {
		match $self {
			ColumnData::Bool($c) => $body,
			ColumnData::Byte($c) => $body,
			ColumnData::Short($c) => $body,
			ColumnData::Int($c) => $body,
			ColumnData::Long($c) => $body,
			ColumnData::Float($c) => $body,
			ColumnData::Double($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Blob($c) => $body,
			ColumnData::Date($c) => $body,
			ColumnData::Timestamp($c) => $body,
			ColumnData::Decimal($c) => $body,
			ColumnData::Struct($c) => $body,
			ColumnData::Array($c) => $body,
			ColumnData::Map($c) => $body,
		}
	};
}

macro_rules! map_container {
	($self:expr, $c:ident => $body:expr) => {
		match $self {
			ColumnData::Bool($c) => ColumnData::Bool($body),
			ColumnData::Byte($c) => ColumnData::Byte($body),
			ColumnData::Short($c) => ColumnData::Short($body),
			ColumnData::Int($c) => ColumnData::Int($body),
			ColumnData::Long($c) => ColumnData::Long($body),
			ColumnData::Float($c) => ColumnData::Float($body),
			ColumnData::Double($c) => ColumnData::Double($body),
			ColumnData::Utf8($c) => ColumnData::Utf8($body),
			ColumnData::Blob($c) => ColumnData::Blob($body),
			ColumnData::Date($c) => ColumnData::Date($body),
			ColumnData::Timestamp($c) => ColumnData::Timestamp($body),
			ColumnData::Decimal($c) => ColumnData::Decimal($body),
			ColumnData::Struct($c) => ColumnData::Struct($body),
			ColumnData::Array($c) => ColumnData::Array($body),
			ColumnData::Map($c) => ColumnData::Map($body),
		}
	};
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Byte(_) => Type::Byte,
			ColumnData::Short(_) => Type::Short,
			ColumnData::Int(_) => Type::Int,
			ColumnData::Long(_) => Type::Long,
			ColumnData::Float(_) => Type::Float,
			ColumnData::Double(_) => Type::Double,
			ColumnData::Utf8(_) => Type::String,
			ColumnData::Blob(_) => Type::Binary,
			ColumnData::Date(_) => Type::Date,
			ColumnData::Timestamp(_) => Type::Timestamp,
			ColumnData::Decimal(c) => c.get_type(),
			ColumnData::Struct(c) => Type::Struct(c.struct_type().clone()),
			ColumnData::Array(c) => Type::Array(Box::new(c.array_type().clone())),
			ColumnData::Map(c) => Type::Map(Box::new(c.map_type().clone())),
		}
	}

	pub fn len(&self) -> usize {
		dispatch!(self, c => c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		dispatch!(self, c => c.is_defined(idx))
	}

	pub fn is_null(&self, idx: usize) -> bool {
		!self.is_defined(idx)
	}

	/// The validity mask; a set bit marks a non-null row.
	pub fn bitvec(&self) -> &BitVec {
		dispatch!(self, c => c.bitvec())
	}

	/// Returns a copy sharing this column's values in which every row
	/// unset in `mask` is additionally null.
	pub fn with_nulls(&self, mask: &BitVec) -> ColumnData {
		debug_assert_eq!(mask.len(), self.len());
		map_container!(self, c => c.with_nulls(mask))
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, ColumnData::Bool(_))
	}

	pub fn is_number(&self) -> bool {
		self.get_type().is_number()
	}

	pub fn is_nested(&self) -> bool {
		matches!(self, ColumnData::Struct(_) | ColumnData::Array(_) | ColumnData::Map(_))
	}
}
