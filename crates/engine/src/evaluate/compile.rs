// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_expression::{Expression, Predicate, PredicateOperator, ScalarExpression, ScalarFunction};
use strata_type::{Result, StructType, TypeError, return_error};

use super::{CompiledExpr, coalesce, column, compare, element_at, literal, logical, null, partition};
use crate::EvaluatorConfig;

pub(crate) struct CompileContext<'a> {
	pub schema: &'a StructType,
	pub config: &'a EvaluatorConfig,
}

/// Binds `expr` and all of its children against the context schema.
pub(crate) fn compile(ctx: &CompileContext, expr: &Expression) -> Result<CompiledExpr> {
	match expr {
		Expression::Literal(e) => literal::compile(e),
		Expression::Column(e) => column::compile(ctx, e),
		Expression::Predicate(e) => compile_predicate(ctx, e),
		Expression::Scalar(e) => compile_scalar(ctx, e),
		Expression::PartitionValue(e) => partition::compile(ctx, e),
	}
}

fn compile_predicate(ctx: &CompileContext, predicate: &Predicate) -> Result<CompiledExpr> {
	let op = predicate.operator;
	match op {
		PredicateOperator::LessThan
		| PredicateOperator::LessThanOrEqual
		| PredicateOperator::GreaterThan
		| PredicateOperator::GreaterThanOrEqual
		| PredicateOperator::Equal
		| PredicateOperator::IsNotDistinctFrom => {
			let [left, right] = exactly::<2>(op.name(), &predicate.children)?;
			compare::compile(op, compile(ctx, left)?, compile(ctx, right)?)
		}
		PredicateOperator::And | PredicateOperator::Or => {
			let [left, right] = exactly::<2>(op.name(), &predicate.children)?;
			logical::compile_binary(op, compile(ctx, left)?, compile(ctx, right)?)
		}
		PredicateOperator::Not => {
			let [operand] = exactly::<1>(op.name(), &predicate.children)?;
			logical::compile_not(compile(ctx, operand)?)
		}
		PredicateOperator::IsNull | PredicateOperator::IsNotNull => {
			let [operand] = exactly::<1>(op.name(), &predicate.children)?;
			null::compile(op, compile(ctx, operand)?)
		}
		PredicateOperator::In => {
			let Some((value, list)) = predicate.children.split_first() else {
				return_error!(TypeError::InvalidArity {
					operator: op.name().to_string(),
					expected: "at least 1".to_string(),
					actual: 0,
				});
			};
			let list = list.iter().map(|e| compile(ctx, e)).collect::<Result<Vec<_>>>()?;
			compare::compile_in(compile(ctx, value)?, list)
		}
		PredicateOperator::AlwaysTrue | PredicateOperator::AlwaysFalse => {
			exactly::<0>(op.name(), &predicate.children)?;
			Ok(logical::constant(op == PredicateOperator::AlwaysTrue))
		}
	}
}

fn compile_scalar(ctx: &CompileContext, scalar: &ScalarExpression) -> Result<CompiledExpr> {
	match scalar.function {
		ScalarFunction::Coalesce => {
			let args = scalar.children.iter().map(|e| compile(ctx, e)).collect::<Result<Vec<_>>>()?;
			coalesce::compile(args)
		}
		ScalarFunction::ElementAt => {
			let [map, key] = exactly::<2>(scalar.function.name(), &scalar.children)?;
			element_at::compile(compile(ctx, map)?, compile(ctx, key)?)
		}
	}
}

/// Views `children` as an array of exactly `N` expressions.
fn exactly<'a, const N: usize>(operator: &str, children: &'a [Expression]) -> Result<&'a [Expression; N]> {
	match children.try_into() {
		Ok(children) => Ok(children),
		Err(_) => Err(TypeError::InvalidArity {
			operator: operator.to_string(),
			expected: N.to_string(),
			actual: children.len(),
		}
		.into()),
	}
}
