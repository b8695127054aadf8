// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::{ColumnData, Columns};
use strata_expression::ColumnRef;
use strata_type::{BitVec, Error, Result, StructType, Type, TypeError, error, return_error};
use tracing::trace;

use super::{CompileContext, CompiledExpr};

/// Resolves the path to field ordinals once; evaluation only walks them.
pub(crate) fn compile(ctx: &CompileContext, column: &ColumnRef) -> Result<CompiledExpr> {
	let path = column.path();
	let mut ordinals = Vec::with_capacity(path.len());
	let mut parent: &StructType = ctx.schema;
	let mut resolved: Option<&Type> = None;

	for (depth, segment) in path.iter().enumerate() {
		if let Some(ty) = resolved {
			let Type::Struct(nested) = ty else {
				return_error!(TypeError::NotAStruct {
					path: column.to_string(),
					segment: column.prefix(depth),
					ty: ty.clone(),
				});
			};
			parent = nested;
		}
		let Some(ordinal) = parent.index_of(segment) else {
			return_error!(TypeError::ColumnNotFound {
				path: column.to_string(),
				segment: segment.clone(),
				available: parent.field_names(),
			});
		};
		ordinals.push(ordinal);
		resolved = Some(&parent.fields()[ordinal].ty);
	}

	let Some(ty) = resolved.cloned() else {
		return_error!(TypeError::ColumnNotFound {
			path: column.to_string(),
			segment: String::new(),
			available: ctx.schema.field_names(),
		});
	};

	trace!(column = %column, ?ordinals, %ty, "resolved column");
	let column = column.clone();
	Ok(CompiledExpr::new(ty, move |columns| project(columns, &column, &ordinals)))
}

/// Reads the vector at `ordinals`, nulling every row in which an enclosing
/// struct is null.
fn project(columns: &Columns, column: &ColumnRef, ordinals: &[usize]) -> Result<ColumnData> {
	let Some((&first, rest)) = ordinals.split_first() else {
		return Err(missing(column, 0, columns.iter().map(|c| c.name.clone()).collect()));
	};
	let Some(root) = columns.get(first) else {
		return Err(missing(column, 0, columns.iter().map(|c| c.name.clone()).collect()));
	};

	let mut data = root.data();
	let mut mask: Option<BitVec> = None;
	for (depth, &ordinal) in rest.iter().enumerate() {
		let ColumnData::Struct(parent) = data else {
			return_error!(TypeError::NotAStruct {
				path: column.to_string(),
				segment: column.prefix(depth + 1),
				ty: data.get_type(),
			});
		};
		mask = Some(match mask {
			Some(mask) => mask.and(parent.bitvec()),
			None => parent.bitvec().clone(),
		});
		data = match parent.children().get(ordinal) {
			Some(child) => child,
			None => return Err(missing(column, depth + 1, parent.struct_type().field_names())),
		};
	}

	Ok(match mask {
		Some(mask) if !mask.all_set() => data.with_nulls(&mask),
		_ => data.clone(),
	})
}

fn missing(column: &ColumnRef, depth: usize, available: Vec<String>) -> Error {
	error!(TypeError::ColumnNotFound {
		path: column.to_string(),
		segment: column.path().get(depth).cloned().unwrap_or_default(),
		available,
	})
}

#[cfg(test)]
mod tests {
	use strata_column::Column;
	use strata_type::{ErrorKind, StructField};

	use super::*;
	use crate::EvaluatorConfig;

	fn schema() -> StructType {
		let inner = StructType::new(vec![StructField::new("x", Type::Int, true)]);
		StructType::new(vec![
			StructField::new("id", Type::Long, false),
			StructField::new("s", Type::Struct(inner), true),
		])
	}

	fn compile_path(path: &[&str]) -> Result<CompiledExpr> {
		let schema = schema();
		let config = EvaluatorConfig::default();
		let ctx = CompileContext {
			schema: &schema,
			config: &config,
		};
		compile(&ctx, &ColumnRef::new(path.iter().copied()))
	}

	#[test]
	fn test_resolves_nested_type() {
		assert_eq!(compile_path(&["id"]).unwrap().get_type(), &Type::Long);
		assert_eq!(compile_path(&["s", "x"]).unwrap().get_type(), &Type::Int);
	}

	#[test]
	fn test_missing_field() {
		let err = compile_path(&["s", "y"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SchemaResolution);
		assert!(err.message().contains("`s`.`y`"), "{}", err.message());
	}

	#[test]
	fn test_traversing_primitive() {
		let err = compile_path(&["id", "x"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SchemaResolution);
		assert!(err.message().contains("`id`.`x`"), "{}", err.message());
	}

	#[test]
	fn test_parent_null_masks_child() {
		let ty = StructType::new(vec![StructField::new("x", Type::Int, true)]);
		let s = ColumnData::structure(
			ty,
			vec![ColumnData::int_optional([Some(1), Some(2), None])],
			BitVec::from_slice(&[true, false, true]),
		)
		.unwrap();
		let columns = Columns::new(vec![
			Column::new("id", ColumnData::long([1, 2, 3])),
			Column::new("s", s),
		])
		.unwrap();

		let result = compile_path(&["s", "x"]).unwrap().execute(&columns).unwrap();
		assert_eq!(result.get_int(0), 1);
		assert!(result.is_null(1));
		assert!(result.is_null(2));
	}

	#[test]
	fn test_null_at_any_level_masks_leaf() {
		let b_ty = StructType::new(vec![StructField::new("c", Type::Int, true)]);
		let a_ty = StructType::new(vec![StructField::new("b", Type::Struct(b_ty.clone()), true)]);
		let schema = StructType::new(vec![StructField::new("a", Type::Struct(a_ty.clone()), true)]);

		let b = ColumnData::structure(
			b_ty,
			vec![ColumnData::int([10, 20, 30])],
			BitVec::from_slice(&[true, false, true]),
		)
		.unwrap();
		let a = ColumnData::structure(a_ty, vec![b], BitVec::from_slice(&[true, true, false])).unwrap();
		let columns = Columns::new(vec![Column::new("a", a)]).unwrap();

		let config = EvaluatorConfig::default();
		let ctx = CompileContext {
			schema: &schema,
			config: &config,
		};
		let expr = compile(&ctx, &ColumnRef::new(["a", "b", "c"])).unwrap();
		let result = expr.execute(&columns).unwrap();
		assert_eq!(result.get_int(0), 10);
		assert!(result.is_null(1));
		assert!(result.is_null(2));

		let ColumnData::Struct(a) = columns[0].data() else {
			panic!("expected struct column");
		};
		let ColumnData::Struct(b) = &a.children()[0] else {
			panic!("expected struct column");
		};
		let leaf = &b.children()[0];
		assert!((0..3).all(|i| !leaf.is_null(i)));
	}

	#[test]
	fn test_batch_missing_column() {
		let columns = Columns::new(vec![Column::new("id", ColumnData::long([1]))]).unwrap();
		let err = compile_path(&["s", "x"]).unwrap().execute(&columns).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SchemaResolution);
	}
}
