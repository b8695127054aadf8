// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use serde::{Deserialize, Serialize};
use strata_type::{ArrayType, BitVec, CowVec, MapType, Result, StructType, TypeError, return_error};

use crate::ColumnData;

/// A struct vector: one child vector per declared field plus the struct's
/// own validity mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructContainer {
	ty: StructType,
	children: Vec<ColumnData>,
	bitvec: BitVec,
}

impl StructContainer {
	pub fn new(ty: StructType, children: Vec<ColumnData>, bitvec: BitVec) -> Result<Self> {
		if children.len() != ty.len() {
			return_error!(TypeError::RowCountMismatch {
				column: ty.to_string(),
				expected: ty.len(),
				actual: children.len(),
			});
		}
		for (field, child) in ty.fields().iter().zip(&children) {
			if child.len() != bitvec.len() {
				return_error!(TypeError::RowCountMismatch {
					column: field.name.clone(),
					expected: bitvec.len(),
					actual: child.len(),
				});
			}
		}
		Ok(Self::from_parts(ty, children, bitvec))
	}

	pub(crate) fn from_parts(ty: StructType, children: Vec<ColumnData>, bitvec: BitVec) -> Self {
		Self {
			ty,
			children,
			bitvec,
		}
	}

	pub fn struct_type(&self) -> &StructType {
		&self.ty
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn child(&self, ordinal: usize) -> &ColumnData {
		&self.children[ordinal]
	}

	pub fn children(&self) -> &[ColumnData] {
		&self.children
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn with_nulls(&self, mask: &BitVec) -> Self {
		Self {
			ty: self.ty.clone(),
			children: self.children.clone(),
			bitvec: self.bitvec.and(mask),
		}
	}
}

fn check_offsets(name: &str, offsets: &[usize], rows: usize, children: usize) -> Result<()> {
	if offsets.len() != rows + 1 {
		return_error!(TypeError::RowCountMismatch {
			column: name.to_string(),
			expected: rows + 1,
			actual: offsets.len(),
		});
	}
	let last = offsets.last().copied().unwrap_or(0);
	if offsets.first() != Some(&0) || offsets.windows(2).any(|w| w[0] > w[1]) || last != children {
		return_error!(TypeError::RowCountMismatch {
			column: name.to_string(),
			expected: children,
			actual: last,
		});
	}
	Ok(())
}

/// An array vector: row `i` holds the elements in `offsets[i]..offsets[i + 1]`
/// of the flattened element vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayContainer {
	ty: ArrayType,
	offsets: CowVec<usize>,
	elements: Box<ColumnData>,
	bitvec: BitVec,
}

impl ArrayContainer {
	pub fn new(ty: ArrayType, offsets: Vec<usize>, elements: ColumnData, bitvec: BitVec) -> Result<Self> {
		check_offsets("array offsets", &offsets, bitvec.len(), elements.len())?;
		Ok(Self::from_parts(ty, offsets, elements, bitvec))
	}

	pub(crate) fn from_parts(ty: ArrayType, offsets: Vec<usize>, elements: ColumnData, bitvec: BitVec) -> Self {
		Self {
			ty,
			offsets: CowVec::new(offsets),
			elements: Box::new(elements),
			bitvec,
		}
	}

	pub fn array_type(&self) -> &ArrayType {
		&self.ty
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn range(&self, idx: usize) -> Range<usize> {
		self.offsets[idx]..self.offsets[idx + 1]
	}

	pub fn elements(&self) -> &ColumnData {
		&self.elements
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn with_nulls(&self, mask: &BitVec) -> Self {
		Self {
			ty: self.ty.clone(),
			offsets: self.offsets.clone(),
			elements: self.elements.clone(),
			bitvec: self.bitvec.and(mask),
		}
	}
}

/// A map vector: row `i` holds the entries in `offsets[i]..offsets[i + 1]`
/// of the flattened key and value vectors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapContainer {
	ty: MapType,
	offsets: CowVec<usize>,
	keys: Box<ColumnData>,
	values: Box<ColumnData>,
	bitvec: BitVec,
}

impl MapContainer {
	pub fn new(ty: MapType, offsets: Vec<usize>, keys: ColumnData, values: ColumnData, bitvec: BitVec) -> Result<Self> {
		if keys.len() != values.len() {
			return_error!(TypeError::RowCountMismatch {
				column: "map values".to_string(),
				expected: keys.len(),
				actual: values.len(),
			});
		}
		check_offsets("map offsets", &offsets, bitvec.len(), keys.len())?;
		Ok(Self::from_parts(ty, offsets, keys, values, bitvec))
	}

	pub(crate) fn from_parts(
		ty: MapType,
		offsets: Vec<usize>,
		keys: ColumnData,
		values: ColumnData,
		bitvec: BitVec,
	) -> Self {
		Self {
			ty,
			offsets: CowVec::new(offsets),
			keys: Box::new(keys),
			values: Box::new(values),
			bitvec,
		}
	}

	pub fn map_type(&self) -> &MapType {
		&self.ty
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn range(&self, idx: usize) -> Range<usize> {
		self.offsets[idx]..self.offsets[idx + 1]
	}

	pub fn keys(&self) -> &ColumnData {
		&self.keys
	}

	pub fn values(&self) -> &ColumnData {
		&self.values
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn with_nulls(&self, mask: &BitVec) -> Self {
		Self {
			ty: self.ty.clone(),
			offsets: self.offsets.clone(),
			keys: self.keys.clone(),
			values: self.values.clone(),
			bitvec: self.bitvec.and(mask),
		}
	}
}
