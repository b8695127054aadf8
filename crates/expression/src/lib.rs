// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Immutable expression trees: literals, column references, predicates,
//! scalar functions and partition-value materialization.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strata_type::Type;

mod column;
mod literal;
mod partition;
mod predicate;
mod scalar;

pub use column::ColumnRef;
pub use literal::Literal;
pub use partition::PartitionValueExpression;
pub use predicate::{Predicate, PredicateOperator};
pub use scalar::{ScalarExpression, ScalarFunction};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
	Literal(Literal),

	Column(ColumnRef),

	Predicate(Predicate),

	Scalar(ScalarExpression),

	PartitionValue(PartitionValueExpression),
}

impl Expression {
	pub fn literal(literal: Literal) -> Self {
		Expression::Literal(literal)
	}

	pub fn column<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
		Expression::Column(ColumnRef::new(path))
	}

	pub fn predicate(operator: PredicateOperator, children: Vec<Expression>) -> Self {
		Expression::Predicate(Predicate::new(operator, children))
	}

	pub fn scalar(function: ScalarFunction, children: Vec<Expression>) -> Self {
		Expression::Scalar(ScalarExpression::new(function, children))
	}

	pub fn partition_value(serialized: Expression, target: Type) -> Self {
		Expression::PartitionValue(PartitionValueExpression::new(serialized, target))
	}

	pub fn less_than(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::LessThan, vec![l, r])
	}

	pub fn less_than_equal(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::LessThanOrEqual, vec![l, r])
	}

	pub fn greater_than(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::GreaterThan, vec![l, r])
	}

	pub fn greater_than_equal(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::GreaterThanOrEqual, vec![l, r])
	}

	pub fn equal(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::Equal, vec![l, r])
	}

	pub fn not_distinct(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::IsNotDistinctFrom, vec![l, r])
	}

	pub fn and(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::And, vec![l, r])
	}

	pub fn or(l: Expression, r: Expression) -> Self {
		Self::predicate(PredicateOperator::Or, vec![l, r])
	}

	pub fn negate(operand: Expression) -> Self {
		Self::predicate(PredicateOperator::Not, vec![operand])
	}

	pub fn is_null(operand: Expression) -> Self {
		Self::predicate(PredicateOperator::IsNull, vec![operand])
	}

	pub fn is_not_null(operand: Expression) -> Self {
		Self::predicate(PredicateOperator::IsNotNull, vec![operand])
	}

	pub fn in_list(value: Expression, list: Vec<Expression>) -> Self {
		let mut children = Vec::with_capacity(list.len() + 1);
		children.push(value);
		children.extend(list);
		Self::predicate(PredicateOperator::In, children)
	}

	pub fn always_true() -> Self {
		Self::predicate(PredicateOperator::AlwaysTrue, vec![])
	}

	pub fn always_false() -> Self {
		Self::predicate(PredicateOperator::AlwaysFalse, vec![])
	}

	pub fn coalesce(args: Vec<Expression>) -> Self {
		Self::scalar(ScalarFunction::Coalesce, args)
	}

	pub fn element_at(map: Expression, key: Expression) -> Self {
		Self::scalar(ScalarFunction::ElementAt, vec![map, key])
	}

	pub fn children(&self) -> &[Expression] {
		match self {
			Expression::Literal(_) | Expression::Column(_) => &[],
			Expression::Predicate(p) => &p.children,
			Expression::Scalar(s) => &s.children,
			Expression::PartitionValue(p) => std::slice::from_ref(p.serialized.as_ref()),
		}
	}
}

impl From<Literal> for Expression {
	fn from(literal: Literal) -> Self {
		Expression::Literal(literal)
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Literal(l) => Display::fmt(l, f),
			Expression::Column(c) => Display::fmt(c, f),
			Expression::Predicate(p) => Display::fmt(p, f),
			Expression::Scalar(s) => Display::fmt(s, f),
			Expression::PartitionValue(p) => Display::fmt(p, f),
		}
	}
}
