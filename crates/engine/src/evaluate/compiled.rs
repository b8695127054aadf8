// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, sync::Arc};

use strata_column::{ColumnData, Columns};
use strata_type::{Result, Type, TypeError, return_error};
use tracing::{instrument, trace};

type Eval = dyn Fn(&Columns) -> Result<ColumnData> + Send + Sync;

/// An expression bound to a schema, ready to run over batches of that
/// schema.
///
/// Cloning is cheap and a compiled expression can be shared between
/// threads evaluating different batches.
#[derive(Clone)]
pub struct CompiledExpr {
	eval: Arc<Eval>,
	ty: Type,
}

impl CompiledExpr {
	pub(crate) fn new(ty: Type, f: impl Fn(&Columns) -> Result<ColumnData> + Send + Sync + 'static) -> Self {
		Self {
			eval: Arc::new(f),
			ty,
		}
	}

	/// The type of every vector this expression produces.
	pub fn get_type(&self) -> &Type {
		&self.ty
	}

	/// Evaluates the expression over `columns`, producing one value per row.
	///
	/// The input batch is never modified. On error no partial result is
	/// returned.
	#[instrument(name = "engine::evaluate::execute", level = "trace", skip_all, fields(rows = columns.row_count()))]
	pub fn execute(&self, columns: &Columns) -> Result<ColumnData> {
		let result = self.eval(columns)?;
		if result.len() != columns.row_count() {
			return_error!(TypeError::RowCountMismatch {
				column: "<result>".to_string(),
				expected: columns.row_count(),
				actual: result.len(),
			});
		}
		trace!(ty = %self.ty, "evaluated expression");
		Ok(result)
	}

	pub(crate) fn eval(&self, columns: &Columns) -> Result<ColumnData> {
		(self.eval)(columns)
	}
}

impl fmt::Debug for CompiledExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CompiledExpr").field("ty", &self.ty).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use strata_type::ErrorKind;

	use super::*;

	#[test]
	fn test_execute_checks_row_count() {
		let expr = CompiledExpr::new(Type::Int, |_| Ok(ColumnData::int([1, 2])));
		let err = expr.execute(&Columns::empty(3)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Internal);
		assert_eq!(expr.execute(&Columns::empty(2)).unwrap().len(), 2);
	}

	#[test]
	fn test_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<CompiledExpr>();
	}
}
