// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bitvec;
mod cowvec;

pub use bitvec::{BitVec, BitVecIter};
pub use cowvec::CowVec;
