// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

/// Returns the join of two numeric types in the widening order
/// `byte < short < int < long < float < double`, or `None` when either side
/// is not part of it.
pub fn common_type(l: &Type, r: &Type) -> Option<Type> {
	let (lr, rr) = (l.numeric_rank()?, r.numeric_rank()?);
	if lr >= rr {
		Some(l.clone())
	} else {
		Some(r.clone())
	}
}

/// Whether values of `from` implicitly widen to `to`. Every type widens to
/// itself.
pub fn can_widen(from: &Type, to: &Type) -> bool {
	if from == to {
		return true;
	}
	match (from.numeric_rank(), to.numeric_rank()) {
		(Some(f), Some(t)) => f <= t,
		_ => false,
	}
}

/// Lossy-free (for integers) value conversion along the widening order.
pub trait Widen<T> {
	fn widen(self) -> T;
}

macro_rules! impl_widen {
	($from:ty => $($to:ty),+) => {
		$(
			impl Widen<$to> for $from {
				#[inline]
				fn widen(self) -> $to {
					self as $to
				}
			}
		)+
	};
}

impl_widen!(i8 => i8, i16, i32, i64, f32, f64);
impl_widen!(i16 => i16, i32, i64, f32, f64);
impl_widen!(i32 => i32, i64, f32, f64);
impl_widen!(i64 => i64, f32, f64);
impl_widen!(f32 => f32, f64);
impl_widen!(f64 => f64);
