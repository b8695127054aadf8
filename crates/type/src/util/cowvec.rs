// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A copy-on-write vector.
///
/// Clones share the underlying allocation; the first mutation through a
/// shared handle copies it.
#[derive(Debug, PartialEq)]
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> Clone for CowVec<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self {
			inner: Arc::new(Vec::new()),
		}
	}
}

impl<T> CowVec<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			inner: Arc::new(data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn is_shared(&self) -> bool {
		Arc::strong_count(&self.inner) > 1
	}
}

impl<T: Clone> CowVec<T> {
	pub fn push(&mut self, value: T) {
		Arc::make_mut(&mut self.inner).push(value);
	}

	pub fn extend(&mut self, values: impl IntoIterator<Item = T>) {
		Arc::make_mut(&mut self.inner).extend(values);
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T> From<Vec<T>> for CowVec<T> {
	fn from(data: Vec<T>) -> Self {
		Self::new(data)
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.inner.as_slice().serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Vec::<T>::deserialize(deserializer).map(CowVec::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_shares_storage() {
		let original = CowVec::new(vec![1, 2, 3]);
		let copy = original.clone();
		assert!(original.is_shared());
		assert_eq!(copy.as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn test_push_detaches_shared() {
		let original = CowVec::new(vec![1, 2]);
		let mut copy = original.clone();
		copy.push(3);
		assert_eq!(original.len(), 2);
		assert_eq!(copy.len(), 3);
		assert!(!original.is_shared());
	}
}
