// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Result, Type, TypeError, return_error};
use tracing::{instrument, trace};

use crate::ColumnData;

impl ColumnData {
	/// Converts this column to `target` along the numeric widening order.
	///
	/// Widening to the column's own type is a cheap clone. Every other pair,
	/// including any narrowing, is an unsupported cast.
	#[instrument(name = "column::widen", level = "trace", skip(self), fields(from = %self.get_type()))]
	pub fn widen(&self, target: &Type) -> Result<ColumnData> {
		let source = self.get_type();
		if &source == target {
			return Ok(self.clone());
		}

		let widened = match (self, target) {
			(ColumnData::Byte(c), Type::Short) => ColumnData::Short(c.widen()),
			(ColumnData::Byte(c), Type::Int) => ColumnData::Int(c.widen()),
			(ColumnData::Byte(c), Type::Long) => ColumnData::Long(c.widen()),
			(ColumnData::Byte(c), Type::Float) => ColumnData::Float(c.widen()),
			(ColumnData::Byte(c), Type::Double) => ColumnData::Double(c.widen()),
			(ColumnData::Short(c), Type::Int) => ColumnData::Int(c.widen()),
			(ColumnData::Short(c), Type::Long) => ColumnData::Long(c.widen()),
			(ColumnData::Short(c), Type::Float) => ColumnData::Float(c.widen()),
			(ColumnData::Short(c), Type::Double) => ColumnData::Double(c.widen()),
			(ColumnData::Int(c), Type::Long) => ColumnData::Long(c.widen()),
			(ColumnData::Int(c), Type::Float) => ColumnData::Float(c.widen()),
			(ColumnData::Int(c), Type::Double) => ColumnData::Double(c.widen()),
			(ColumnData::Long(c), Type::Float) => ColumnData::Float(c.widen()),
			(ColumnData::Long(c), Type::Double) => ColumnData::Double(c.widen()),
			(ColumnData::Float(c), Type::Double) => ColumnData::Double(c.widen()),
			_ => return_error!(TypeError::UnsupportedCast {
				from: source,
				to: target.clone(),
			}),
		};

		trace!(rows = widened.len(), "widened column");
		Ok(widened)
	}
}
