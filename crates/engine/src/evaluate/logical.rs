// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Three-valued boolean logic.

use strata_column::{ColumnData, container::BoolContainer};
use strata_expression::PredicateOperator;
use strata_type::{Result, Type, TypeError, err, return_error};

use super::CompiledExpr;

fn and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(false), _) | (_, Some(false)) => Some(false),
		(Some(true), Some(true)) => Some(true),
		_ => None,
	}
}

fn or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(true), _) | (_, Some(true)) => Some(true),
		(Some(false), Some(false)) => Some(false),
		_ => None,
	}
}

fn zip(l: &BoolContainer, r: &BoolContainer, f: fn(Option<bool>, Option<bool>) -> Option<bool>) -> BoolContainer {
	let mut result = BoolContainer::with_capacity(l.len());
	for (l, r) in l.iter().zip(r.iter()) {
		result.push_option(f(l, r));
	}
	result
}

pub(crate) fn kleene_or(l: &BoolContainer, r: &BoolContainer) -> BoolContainer {
	zip(l, r, or)
}

fn require_boolean(op: PredicateOperator, operand: &Type) -> Result<()> {
	if !operand.is_bool() {
		return_error!(TypeError::LogicalOperatorNotApplicable {
			operator: op.name().to_string(),
			operand: operand.clone(),
		});
	}
	Ok(())
}

fn booleans(op: PredicateOperator, data: &ColumnData) -> Result<&BoolContainer> {
	match data {
		ColumnData::Bool(c) => Ok(c),
		other => err!(TypeError::LogicalOperatorNotApplicable {
			operator: op.name().to_string(),
			operand: other.get_type(),
		}),
	}
}

pub(crate) fn compile_binary(op: PredicateOperator, left: CompiledExpr, right: CompiledExpr) -> Result<CompiledExpr> {
	require_boolean(op, left.get_type())?;
	require_boolean(op, right.get_type())?;
	let f: fn(Option<bool>, Option<bool>) -> Option<bool> = match op {
		PredicateOperator::And => and,
		PredicateOperator::Or => or,
		_ => return_error!(TypeError::UnknownOperator {
			name: op.name().to_string(),
		}),
	};

	Ok(CompiledExpr::new(Type::Boolean, move |columns| {
		let l = left.eval(columns)?;
		let r = right.eval(columns)?;
		Ok(ColumnData::Bool(zip(booleans(op, &l)?, booleans(op, &r)?, f)))
	}))
}

pub(crate) fn compile_not(operand: CompiledExpr) -> Result<CompiledExpr> {
	require_boolean(PredicateOperator::Not, operand.get_type())?;
	Ok(CompiledExpr::new(Type::Boolean, move |columns| {
		let data = operand.eval(columns)?;
		let c = booleans(PredicateOperator::Not, &data)?;
		Ok(ColumnData::bool_optional(c.iter().map(|v| v.map(|v| !v))))
	}))
}

/// A non-null constant for every row.
pub(crate) fn constant(value: bool) -> CompiledExpr {
	CompiledExpr::new(Type::Boolean, move |columns| {
		Ok(ColumnData::bool(std::iter::repeat_n(value, columns.row_count())))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const VALUES: [Option<bool>; 3] = [Some(true), Some(false), None];

	#[test]
	fn test_and_truth_table() {
		let expected = [
			[Some(true), Some(false), None],
			[Some(false), Some(false), Some(false)],
			[None, Some(false), None],
		];
		for (i, l) in VALUES.iter().enumerate() {
			for (j, r) in VALUES.iter().enumerate() {
				assert_eq!(and(*l, *r), expected[i][j], "{:?} AND {:?}", l, r);
			}
		}
	}

	#[test]
	fn test_or_truth_table() {
		let expected = [
			[Some(true), Some(true), Some(true)],
			[Some(true), Some(false), None],
			[Some(true), None, None],
		];
		for (i, l) in VALUES.iter().enumerate() {
			for (j, r) in VALUES.iter().enumerate() {
				assert_eq!(or(*l, *r), expected[i][j], "{:?} OR {:?}", l, r);
			}
		}
	}

	#[test]
	fn test_rejects_non_boolean_operand() {
		let int = CompiledExpr::new(Type::Int, |_| Ok(ColumnData::int([1])));
		let err = compile_not(int).unwrap_err();
		assert_eq!(err.kind(), strata_type::ErrorKind::UnsupportedOperation);
		assert!(err.message().contains("NOT"));
	}
}
