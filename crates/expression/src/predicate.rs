// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use strata_type::{Error, TypeError};

use crate::Expression;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateOperator {
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
	Equal,
	/// Null-safe equality, `<=>`.
	IsNotDistinctFrom,
	And,
	Or,
	Not,
	IsNull,
	IsNotNull,
	In,
	AlwaysTrue,
	AlwaysFalse,
}

impl PredicateOperator {
	pub fn name(&self) -> &'static str {
		match self {
			PredicateOperator::LessThan => "<",
			PredicateOperator::LessThanOrEqual => "<=",
			PredicateOperator::GreaterThan => ">",
			PredicateOperator::GreaterThanOrEqual => ">=",
			PredicateOperator::Equal => "=",
			PredicateOperator::IsNotDistinctFrom => "IS NOT DISTINCT FROM",
			PredicateOperator::And => "AND",
			PredicateOperator::Or => "OR",
			PredicateOperator::Not => "NOT",
			PredicateOperator::IsNull => "IS_NULL",
			PredicateOperator::IsNotNull => "IS_NOT_NULL",
			PredicateOperator::In => "IN",
			PredicateOperator::AlwaysTrue => "ALWAYS_TRUE",
			PredicateOperator::AlwaysFalse => "ALWAYS_FALSE",
		}
	}

	/// Binary operators comparing two values of reconcilable types.
	pub fn is_comparison(&self) -> bool {
		matches!(
			self,
			PredicateOperator::LessThan
				| PredicateOperator::LessThanOrEqual
				| PredicateOperator::GreaterThan
				| PredicateOperator::GreaterThanOrEqual
				| PredicateOperator::Equal
				| PredicateOperator::IsNotDistinctFrom
		)
	}
}

impl FromStr for PredicateOperator {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let op = match s {
			"<" => PredicateOperator::LessThan,
			"<=" => PredicateOperator::LessThanOrEqual,
			">" => PredicateOperator::GreaterThan,
			">=" => PredicateOperator::GreaterThanOrEqual,
			"=" => PredicateOperator::Equal,
			"<=>" => PredicateOperator::IsNotDistinctFrom,
			_ => match s.to_ascii_uppercase().as_str() {
				"IS NOT DISTINCT FROM" => PredicateOperator::IsNotDistinctFrom,
				"AND" => PredicateOperator::And,
				"OR" => PredicateOperator::Or,
				"NOT" => PredicateOperator::Not,
				"IS_NULL" => PredicateOperator::IsNull,
				"IS_NOT_NULL" => PredicateOperator::IsNotNull,
				"IN" => PredicateOperator::In,
				"ALWAYS_TRUE" => PredicateOperator::AlwaysTrue,
				"ALWAYS_FALSE" => PredicateOperator::AlwaysFalse,
				_ => {
					return Err(TypeError::UnknownOperator {
						name: s.to_string(),
					}
					.into());
				}
			},
		};
		Ok(op)
	}
}

impl Display for PredicateOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A boolean-valued operator applied to child expressions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
	pub operator: PredicateOperator,
	pub children: Vec<Expression>,
}

impl Predicate {
	pub fn new(operator: PredicateOperator, children: Vec<Expression>) -> Self {
		Self {
			operator,
			children,
		}
	}

	/// Looks the operator up by name, e.g. `"<"`, `"AND"` or `"IS_NULL"`.
	pub fn named(name: &str, children: Vec<Expression>) -> Result<Self, Error> {
		Ok(Self::new(name.parse()?, children))
	}
}

impl Display for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match (self.operator, self.children.as_slice()) {
			(op, [l, r])
				if op.is_comparison() || matches!(op, PredicateOperator::And | PredicateOperator::Or) =>
			{
				write!(f, "({} {} {})", l, op, r)
			}
			(PredicateOperator::Not, [operand]) => write!(f, "NOT ({})", operand),
			(PredicateOperator::IsNull, [operand]) => write!(f, "({} IS NULL)", operand),
			(PredicateOperator::IsNotNull, [operand]) => write!(f, "({} IS NOT NULL)", operand),
			(PredicateOperator::In, [value, list @ ..]) => {
				write!(f, "({} IN ({}))", value, join(list))
			}
			(op, children) => write!(f, "{}({})", op, join(children)),
		}
	}
}

pub(crate) fn join(expressions: &[Expression]) -> String {
	expressions.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
	use strata_type::ErrorKind;

	use super::*;

	#[test]
	fn test_parse_operator() {
		assert_eq!("<".parse::<PredicateOperator>().unwrap(), PredicateOperator::LessThan);
		assert_eq!("<=>".parse::<PredicateOperator>().unwrap(), PredicateOperator::IsNotDistinctFrom);
		assert_eq!("and".parse::<PredicateOperator>().unwrap(), PredicateOperator::And);
		assert_eq!("IS_NOT_NULL".parse::<PredicateOperator>().unwrap(), PredicateOperator::IsNotNull);
	}

	#[test]
	fn test_unknown_operator() {
		let err = "LIKE".parse::<PredicateOperator>().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
		assert!(err.message().contains("LIKE"));
	}

	#[test]
	fn test_name_round_trips() {
		for op in [
			PredicateOperator::LessThan,
			PredicateOperator::IsNotDistinctFrom,
			PredicateOperator::AlwaysFalse,
			PredicateOperator::In,
		] {
			assert_eq!(op.name().parse::<PredicateOperator>().unwrap(), op);
		}
	}
}
