// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::{ColumnData, container::BoolContainer};
use strata_expression::ScalarFunction;
use strata_type::{Result, Type, TypeError, err, return_error};

use super::CompiledExpr;

/// `COALESCE(args...)`. Arguments must share one type, and only boolean
/// arguments are supported for now.
pub(crate) fn compile(args: Vec<CompiledExpr>) -> Result<CompiledExpr> {
	let Some(first) = args.first() else {
		return_error!(TypeError::InvalidArity {
			operator: ScalarFunction::Coalesce.name().to_string(),
			expected: "at least 1".to_string(),
			actual: 0,
		});
	};
	let ty = first.get_type().clone();

	if args.iter().any(|arg| arg.get_type() != &ty) {
		return_error!(TypeError::CoalesceMismatchedTypes {
			types: args.iter().map(|arg| arg.get_type().clone()).collect(),
		});
	}
	if !ty.is_bool() {
		return_error!(TypeError::CoalesceUnsupportedType {
			ty,
		});
	}

	Ok(CompiledExpr::new(ty, move |columns| {
		let mut result: Option<BoolContainer> = None;
		for arg in &args {
			let next = match arg.eval(columns)? {
				ColumnData::Bool(next) => next,
				other => {
					return err!(TypeError::CoalesceUnsupportedType {
						ty: other.get_type(),
					});
				}
			};
			result = Some(match result {
				None => next,
				Some(acc) => {
					if acc.bitvec().all_set() {
						return Ok(ColumnData::Bool(acc));
					}
					let mut merged = BoolContainer::with_capacity(acc.len());
					for (a, b) in acc.iter().zip(next.iter()) {
						merged.push_option(a.or(b));
					}
					merged
				}
			});
		}
		Ok(ColumnData::Bool(result.unwrap_or_else(|| BoolContainer::with_capacity(0))))
	}))
}
