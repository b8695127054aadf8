// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use strata_type::{BitVec, CowVec};

/// Storage for `date` and `timestamp` columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalContainer<T>
where
	T: Copy + Default + Debug + PartialEq,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T> TemporalContainer<T>
where
	T: Copy + Default + Debug + PartialEq,
{
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self {
			data: CowVec::new(data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
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

	pub fn value(&self, idx: usize) -> T {
		self.data[idx]
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		if idx < self.len() && self.is_defined(idx) {
			self.data.get(idx)
		} else {
			None
		}
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn data(&self) -> &CowVec<T> {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn with_nulls(&self, mask: &BitVec) -> Self {
		Self {
			data: self.data.clone(),
			bitvec: self.bitvec.and(mask),
		}
	}
}
