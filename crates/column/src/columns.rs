// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use strata_type::{CowVec, Result, StructField, StructType, TypeError, return_error};
use tracing::debug;

use crate::Column;

/// A columnar batch: named columns sharing one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
	columns: CowVec<Column>,
	row_count: usize,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		self.columns.deref()
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	/// Fails if the columns do not all have the same number of rows.
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		let row_count = columns.first().map_or(0, |c| c.len());
		if let Some(column) = columns.iter().find(|c| c.len() != row_count) {
			debug!(column = %column.name, expected = row_count, actual = column.len(), "row count mismatch");
			return_error!(TypeError::RowCountMismatch {
				column: column.name.clone(),
				expected: row_count,
				actual: column.len(),
			});
		}

		Ok(Self {
			columns: CowVec::new(columns),
			row_count,
		})
	}

	/// A batch without columns that still has `row_count` rows.
	pub fn empty(row_count: usize) -> Self {
		Self {
			columns: CowVec::default(),
			row_count,
		}
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	/// The batch schema. Columns carry no nullability, so every field is
	/// nullable.
	pub fn schema(&self) -> StructType {
		StructType::new(self.columns.iter().map(|c| StructField::new(c.name.clone(), c.get_type(), true)).collect())
	}
}
