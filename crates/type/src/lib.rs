// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Type system, scalar values and diagnostics shared by the Strata crates.

pub mod error;
pub mod util;
pub mod value;

pub use error::{Diagnostic, Error, ErrorKind, IntoDiagnostic, TypeError};
pub use util::{BitVec, CowVec};
pub use value::{
	ArrayType, Date, Decimal, MapType, StructField, StructType, Timestamp, Type, Value,
	number::promote::{can_widen, common_type},
};

pub type Result<T> = std::result::Result<T, Error>;
