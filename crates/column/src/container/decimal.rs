// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use strata_type::{BitVec, CowVec, Decimal, Type};

/// Storage for a `decimal(precision, scale)` column. Every value shares the
/// container's precision and scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecimalContainer {
	data: CowVec<Decimal>,
	bitvec: BitVec,
	precision: u8,
	scale: u8,
}

impl DecimalContainer {
	pub fn new(data: Vec<Decimal>, bitvec: BitVec, precision: u8, scale: u8) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		debug_assert!(data.iter().all(|d| d.precision() == precision && d.scale() == scale));
		Self {
			data: CowVec::new(data),
			bitvec,
			precision,
			scale,
		}
	}

	pub fn with_capacity(precision: u8, scale: u8, capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
			precision,
			scale,
		}
	}

	pub fn get_type(&self) -> Type {
		Type::Decimal {
			precision: self.precision,
			scale: self.scale,
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn value(&self, idx: usize) -> &Decimal {
		&self.data[idx]
	}

	pub fn push(&mut self, value: Decimal) {
		debug_assert_eq!(value.get_type(), self.get_type());
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(Decimal::zero(self.precision, self.scale));
		self.bitvec.push(false);
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn with_nulls(&self, mask: &BitVec) -> Self {
		Self {
			data: self.data.clone(),
			bitvec: self.bitvec.and(mask),
			precision: self.precision,
			scale: self.scale,
		}
	}
}
