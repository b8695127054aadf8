// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use strata_type::{BitVec, CowVec, value::number::Widen};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: Copy + Default + Debug + PartialEq,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
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
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	/// The raw value at `idx`, regardless of its validity bit.
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

	/// Converts every value along the numeric widening order, keeping the
	/// validity mask.
	pub fn widen<U>(&self) -> NumberContainer<U>
	where
		T: Widen<U>,
		U: Copy + Default + Debug + PartialEq,
	{
		NumberContainer {
			data: CowVec::new(self.data.iter().map(|v| v.widen()).collect()),
			bitvec: self.bitvec.clone(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| defined.then_some(*v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_shares_storage() {
		let container = NumberContainer::from_vec(vec![1i32, 2, 3]);
		let cloned = container.clone();
		assert!(cloned.data().is_shared());
		assert_eq!(cloned, container);
	}

	#[test]
	fn test_undefined_rows() {
		let mut container = NumberContainer::<i64>::with_capacity(2);
		container.push(7);
		container.push_undefined();
		assert_eq!(container.get(0), Some(&7));
		assert_eq!(container.get(1), None);
		assert_eq!(container.value(1), 0);
	}

	#[test]
	fn test_widen_keeps_nulls() {
		let container = NumberContainer::new(vec![1i8, 0, -3], BitVec::from_slice(&[true, false, true]));
		let widened: NumberContainer<f64> = container.widen();
		assert_eq!(widened.iter().collect::<Vec<_>>(), vec![Some(1.0), None, Some(-3.0)]);
	}
}
