// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use strata_column::{ColumnData, container::BoolContainer};
use strata_expression::PredicateOperator;
use strata_type::{Result, Type, TypeError, common_type, return_error};
use tracing::debug;

use super::{CompiledExpr, logical::kleene_or};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Comparison {
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
	Equal,
	NotDistinct,
}

impl Comparison {
	fn from_operator(op: PredicateOperator) -> Option<Self> {
		Some(match op {
			PredicateOperator::LessThan => Comparison::LessThan,
			PredicateOperator::LessThanOrEqual => Comparison::LessThanOrEqual,
			PredicateOperator::GreaterThan => Comparison::GreaterThan,
			PredicateOperator::GreaterThanOrEqual => Comparison::GreaterThanOrEqual,
			PredicateOperator::Equal => Comparison::Equal,
			PredicateOperator::IsNotDistinctFrom => Comparison::NotDistinct,
			_ => return None,
		})
	}

	fn name(self) -> &'static str {
		match self {
			Comparison::LessThan => "<",
			Comparison::LessThanOrEqual => "<=",
			Comparison::GreaterThan => ">",
			Comparison::GreaterThanOrEqual => ">=",
			Comparison::Equal => "=",
			Comparison::NotDistinct => "<=>",
		}
	}

	fn test(self, ordering: Ordering) -> bool {
		match self {
			Comparison::LessThan => ordering.is_lt(),
			Comparison::LessThanOrEqual => ordering.is_le(),
			Comparison::GreaterThan => ordering.is_gt(),
			Comparison::GreaterThanOrEqual => ordering.is_ge(),
			Comparison::Equal | Comparison::NotDistinct => ordering.is_eq(),
		}
	}
}

/// How two operands are brought to a common type before comparing.
#[derive(Clone, Debug)]
struct Coercion {
	left: Option<Type>,
	right: Option<Type>,
}

impl Coercion {
	fn apply(&self, left: ColumnData, right: ColumnData) -> Result<(ColumnData, ColumnData)> {
		let left = match &self.left {
			Some(ty) => left.widen(ty)?,
			None => left,
		};
		let right = match &self.right {
			Some(ty) => right.widen(ty)?,
			None => right,
		};
		Ok((left, right))
	}
}

/// Numeric operands meet at their join; every other primitive type only
/// compares with itself. Nested types are never comparable.
fn reconcile(operator: &str, left: &Type, right: &Type) -> Result<Coercion> {
	if let Some(common) = common_type(left, right) {
		let widen = |ty: &Type| (ty != &common).then(|| common.clone());
		let coercion = Coercion {
			left: widen(left),
			right: widen(right),
		};
		if coercion.left.is_some() || coercion.right.is_some() {
			debug!(operator, %left, %right, %common, "promoting comparison operands");
		}
		return Ok(coercion);
	}

	if left == right && left.is_primitive() {
		return Ok(Coercion {
			left: None,
			right: None,
		});
	}

	return_error!(TypeError::ComparisonNotApplicable {
		operator: operator.to_string(),
		left: left.clone(),
		right: right.clone(),
	})
}

pub(crate) fn compile(op: PredicateOperator, left: CompiledExpr, right: CompiledExpr) -> Result<CompiledExpr> {
	let Some(comparison) = Comparison::from_operator(op) else {
		return_error!(TypeError::UnknownOperator {
			name: op.name().to_string(),
		});
	};
	let coercion = reconcile(comparison.name(), left.get_type(), right.get_type())?;

	Ok(CompiledExpr::new(Type::Boolean, move |columns| {
		let (l, r) = coercion.apply(left.eval(columns)?, right.eval(columns)?)?;
		compare_columns(comparison, &l, &r).map(ColumnData::Bool)
	}))
}

/// `value IN (list...)`: true on any match, null if nothing matched and
/// either the value or some element is null, false otherwise.
pub(crate) fn compile_in(value: CompiledExpr, list: Vec<CompiledExpr>) -> Result<CompiledExpr> {
	let list = list
		.into_iter()
		.map(|element| {
			let coercion = reconcile(PredicateOperator::In.name(), value.get_type(), element.get_type())?;
			Ok((element, coercion))
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(CompiledExpr::new(Type::Boolean, move |columns| {
		let data = value.eval(columns)?;
		let mut result = BoolContainer::new(vec![false; data.len()], data.bitvec().clone());
		for (element, coercion) in &list {
			let (l, r) = coercion.apply(data.clone(), element.eval(columns)?)?;
			let equal = compare_columns(Comparison::Equal, &l, &r)?;
			result = kleene_or(&result, &equal);
		}
		Ok(ColumnData::Bool(result))
	}))
}

macro_rules! float_order {
	($name:ident, $t:ty) => {
		/// IEEE total order in which every NaN is equal to every other NaN and
		/// greater than any number.
		fn $name(l: $t, r: $t) -> Ordering {
			match (l.is_nan(), r.is_nan()) {
				(true, true) => Ordering::Equal,
				(true, false) => Ordering::Greater,
				(false, true) => Ordering::Less,
				(false, false) => l.total_cmp(&r),
			}
		}
	};
}

float_order!(order_f32, f32);
float_order!(order_f64, f64);

fn compare_columns(comparison: Comparison, l: &ColumnData, r: &ColumnData) -> Result<BoolContainer> {
	if l.len() != r.len() {
		return_error!(TypeError::RowCountMismatch {
			column: comparison.name().to_string(),
			expected: l.len(),
			actual: r.len(),
		});
	}

	Ok(match (l, r) {
		(ColumnData::Bool(a), ColumnData::Bool(b)) => collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i))),
		(ColumnData::Byte(a), ColumnData::Byte(b)) => collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i))),
		(ColumnData::Short(a), ColumnData::Short(b)) => {
			collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i)))
		}
		(ColumnData::Int(a), ColumnData::Int(b)) => collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i))),
		(ColumnData::Long(a), ColumnData::Long(b)) => collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i))),
		(ColumnData::Float(a), ColumnData::Float(b)) => {
			collect(comparison, l, r, |i| order_f32(a.value(i), b.value(i)))
		}
		(ColumnData::Double(a), ColumnData::Double(b)) => {
			collect(comparison, l, r, |i| order_f64(a.value(i), b.value(i)))
		}
		(ColumnData::Utf8(a), ColumnData::Utf8(b)) => {
			collect(comparison, l, r, |i| a.value(i).as_bytes().cmp(b.value(i).as_bytes()))
		}
		(ColumnData::Blob(a), ColumnData::Blob(b)) => collect(comparison, l, r, |i| a.value(i).cmp(b.value(i))),
		(ColumnData::Date(a), ColumnData::Date(b)) => collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i))),
		(ColumnData::Timestamp(a), ColumnData::Timestamp(b)) => {
			collect(comparison, l, r, |i| a.value(i).cmp(&b.value(i)))
		}
		(ColumnData::Decimal(a), ColumnData::Decimal(b)) if a.get_type() == b.get_type() => {
			collect(comparison, l, r, |i| a.value(i).cmp(b.value(i)))
		}
		_ => return_error!(TypeError::ComparisonNotApplicable {
			operator: comparison.name().to_string(),
			left: l.get_type(),
			right: r.get_type(),
		}),
	})
}

fn collect(comparison: Comparison, l: &ColumnData, r: &ColumnData, ordering: impl Fn(usize) -> Ordering) -> BoolContainer {
	let mut result = BoolContainer::with_capacity(l.len());
	for i in 0..l.len() {
		let value = match (l.is_defined(i), r.is_defined(i)) {
			(true, true) => Some(comparison.test(ordering(i))),
			(false, false) if comparison == Comparison::NotDistinct => Some(true),
			_ if comparison == Comparison::NotDistinct => Some(false),
			_ => None,
		};
		result.push_option(value);
	}
	result
}

#[cfg(test)]
mod tests {
	use strata_column::Columns;
	use strata_expression::Literal;
	use strata_type::ErrorKind;

	use super::*;
	use crate::evaluate::literal;

	fn lit(literal: Literal) -> CompiledExpr {
		literal::compile(&literal).unwrap()
	}

	fn eval(op: PredicateOperator, l: Literal, r: Literal) -> Option<bool> {
		let expr = compile(op, lit(l), lit(r)).unwrap();
		let result = expr.execute(&Columns::empty(1)).unwrap();
		(!result.is_null(0)).then(|| result.get_bool(0))
	}

	#[test]
	fn test_promotes_numeric_operands() {
		assert_eq!(eval(PredicateOperator::LessThan, Literal::byte(3), Literal::long(4)), Some(true));
		assert_eq!(eval(PredicateOperator::Equal, Literal::int(2), Literal::double(2.0)), Some(true));
		assert_eq!(eval(PredicateOperator::GreaterThan, Literal::float(1.5), Literal::short(1)), Some(true));
	}

	#[test]
	fn test_float_total_order() {
		assert_eq!(eval(PredicateOperator::LessThan, Literal::double(-0.0), Literal::double(0.0)), Some(true));
		assert_eq!(eval(PredicateOperator::Equal, Literal::double(f64::NAN), Literal::double(f64::NAN)), Some(true));
		assert_eq!(
			eval(PredicateOperator::GreaterThan, Literal::double(-f64::NAN), Literal::double(f64::INFINITY)),
			Some(true)
		);
	}

	#[test]
	fn test_null_operand() {
		assert_eq!(eval(PredicateOperator::Equal, Literal::null(Type::Int), Literal::int(1)), None);
		assert_eq!(eval(PredicateOperator::IsNotDistinctFrom, Literal::null(Type::Int), Literal::int(1)), Some(false));
		assert_eq!(
			eval(PredicateOperator::IsNotDistinctFrom, Literal::null(Type::Int), Literal::null(Type::Long)),
			Some(true)
		);
	}

	#[test]
	fn test_strings_and_binary_compare_bytewise() {
		assert_eq!(eval(PredicateOperator::LessThan, Literal::string("B"), Literal::string("a")), Some(true));
		assert_eq!(eval(PredicateOperator::LessThan, Literal::binary([0x7f]), Literal::binary([0x80])), Some(true));
	}

	#[test]
	fn test_incompatible_types() {
		let err = compile(PredicateOperator::Equal, lit(Literal::int(1)), lit(Literal::string("1"))).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
		assert!(err.message().contains("integer"), "{}", err.message());
		assert!(err.message().contains("string"), "{}", err.message());

		let map = Literal::null(Type::map(Type::String, Type::String, true));
		assert!(compile(PredicateOperator::Equal, lit(map.clone()), lit(map)).is_err());
	}
}
