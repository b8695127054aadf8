// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use strata_type::{BitVec, CowVec};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
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

	pub fn value(&self, idx: usize) -> &str {
		&self.data[idx]
	}

	pub fn get(&self, idx: usize) -> Option<&str> {
		if idx < self.len() && self.is_defined(idx) {
			Some(&self.data[idx])
		} else {
			None
		}
	}

	pub fn push(&mut self, value: impl Into<String>) {
		self.data.push(value.into());
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn data(&self) -> &CowVec<String> {
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
