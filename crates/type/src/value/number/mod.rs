// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod parse;
pub mod promote;

pub use parse::{parse_float, parse_int};
pub use promote::{Widen, can_widen, common_type};
