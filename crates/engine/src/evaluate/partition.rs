// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::ColumnData;
use strata_expression::{Expression, PartitionValueExpression};
use strata_type::{Result, Type, TypeError, return_error};

use super::{CompileContext, CompiledExpr};
use crate::PartitionValueDeserializer;

/// The serialized child must be a string literal or a null literal; the
/// decoded value is broadcast to every row.
pub(crate) fn compile(ctx: &CompileContext, expr: &PartitionValueExpression) -> Result<CompiledExpr> {
	let target = expr.target.clone();
	if !target.is_primitive() {
		return_error!(TypeError::PartitionValueUnsupportedType {
			ty: target,
		});
	}

	let raw = match expr.serialized.as_ref() {
		Expression::Literal(literal) if literal.is_null() => None,
		Expression::Literal(literal) => match literal.value().and_then(|v| v.as_str()) {
			Some(text) => Some(text.to_string()),
			None => return_error!(TypeError::PartitionValueNotStringLiteral {
				expression: expr.serialized.to_string(),
			}),
		},
		other => return_error!(TypeError::PartitionValueNotStringLiteral {
			expression: other.to_string(),
		}),
	};

	let deserializer = PartitionValueDeserializer::new(ctx.config.clone());
	Ok(CompiledExpr::new(target.clone(), move |columns| {
		let literal = deserializer.deserialize(raw.as_deref(), &target)?;
		ColumnData::broadcast(&target, literal.value(), columns.row_count())
	}))
}
