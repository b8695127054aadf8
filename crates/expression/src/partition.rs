// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strata_type::Type;

use crate::Expression;

/// Materializes a partition column from its serialized string form.
///
/// `serialized` is expected to be a string literal (or a null literal).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartitionValueExpression {
	pub serialized: Box<Expression>,
	pub target: Type,
}

impl PartitionValueExpression {
	pub fn new(serialized: Expression, target: Type) -> Self {
		Self {
			serialized: Box::new(serialized),
			target,
		}
	}
}

impl Display for PartitionValueExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "PARTITION_VALUE({}, {})", self.serialized, self.target)
	}
}
