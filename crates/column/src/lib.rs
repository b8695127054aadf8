// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod column;
mod columns;
pub mod container;
mod data;

pub use column::Column;
pub use columns::Columns;
pub use data::ColumnData;
pub use strata_type::Result;
