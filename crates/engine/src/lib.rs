// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod config;
pub mod evaluate;
mod partition;

pub use config::EvaluatorConfig;
pub use evaluate::{CompiledExpr, Evaluator, bind};
pub use partition::{PartitionValueDeserializer, deserialize_partition_value};
pub use strata_type::Result;
