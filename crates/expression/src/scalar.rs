// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use strata_type::{Error, TypeError};

use crate::{Expression, predicate::join};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarFunction {
	Coalesce,
	ElementAt,
}

impl ScalarFunction {
	pub fn name(&self) -> &'static str {
		match self {
			ScalarFunction::Coalesce => "COALESCE",
			ScalarFunction::ElementAt => "ELEMENT_AT",
		}
	}
}

impl FromStr for ScalarFunction {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"COALESCE" => Ok(ScalarFunction::Coalesce),
			"ELEMENT_AT" => Ok(ScalarFunction::ElementAt),
			_ => Err(TypeError::UnknownOperator {
				name: s.to_string(),
			}
			.into()),
		}
	}
}

impl Display for ScalarFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A scalar function applied to child expressions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarExpression {
	pub function: ScalarFunction,
	pub children: Vec<Expression>,
}

impl ScalarExpression {
	pub fn new(function: ScalarFunction, children: Vec<Expression>) -> Self {
		Self {
			function,
			children,
		}
	}

	pub fn named(name: &str, children: Vec<Expression>) -> Result<Self, Error> {
		Ok(Self::new(name.parse()?, children))
	}
}

impl Display for ScalarExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}({})", self.function, join(&self.children))
	}
}
