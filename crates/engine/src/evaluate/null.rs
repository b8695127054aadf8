// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::ColumnData;
use strata_expression::PredicateOperator;
use strata_type::{Result, Type};

use super::CompiledExpr;

pub(crate) fn compile(op: PredicateOperator, operand: CompiledExpr) -> Result<CompiledExpr> {
	let want_null = op == PredicateOperator::IsNull;
	Ok(CompiledExpr::new(Type::Boolean, move |columns| {
		let data = operand.eval(columns)?;
		Ok(ColumnData::bool((0..data.len()).map(|i| data.is_null(i) == want_null)))
	}))
}
