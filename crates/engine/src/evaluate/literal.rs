// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::ColumnData;
use strata_expression::Literal;
use strata_type::Result;

use super::CompiledExpr;

pub(crate) fn compile(literal: &Literal) -> Result<CompiledExpr> {
	let ty = literal.get_type().clone();
	let value = literal.value().cloned();
	Ok(CompiledExpr::new(ty.clone(), move |columns| ColumnData::broadcast(&ty, value.as_ref(), columns.row_count())))
}
