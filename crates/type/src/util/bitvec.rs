// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable, densely packed vector of bits.
///
/// Used both as the storage of boolean columns and as the validity mask of
/// every column container, where a set bit marks a defined (non-null) row.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(values: &[bool]) -> Self {
		Self::from_fn(values.len(), |i| values[i])
	}

	pub fn from_fn(len: usize, f: impl Fn(usize) -> bool) -> Self {
		let mut result = Self::with_capacity(len);
		for i in 0..len {
			result.push(f(i));
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.bits.capacity() * 8
	}

	pub fn push(&mut self, value: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if value {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		let mask = 1 << (idx % 8);
		if value {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_set(&self) -> bool {
		self.count_ones() == self.len
	}

	/// Bitwise AND of two masks of equal length.
	pub fn and(&self, other: &BitVec) -> BitVec {
		assert_eq!(self.len, other.len, "cannot combine bit vectors of different length");
		BitVec {
			bits: self.bits.iter().zip(other.bits.iter()).map(|(l, r)| l & r).collect(),
			len: self.len,
		}
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}

	fn clear_tail(&mut self) {
		let used = self.len % 8;
		if used != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << used) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(values: Vec<bool>) -> Self {
		Self::from_slice(&values)
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		if self.pos >= self.bitvec.len {
			return None;
		}
		let value = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}
