// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use bigdecimal::BigDecimal;
use strata_column::{ColumnData, Columns};
use strata_engine::{Evaluator, EvaluatorConfig, PartitionValueDeserializer, bind, deserialize_partition_value};
use strata_expression::{Expression, Literal};
use strata_type::{Date, Decimal, ErrorKind, StructType, Timestamp, Type, Value};

fn partition(raw: Option<&str>, target: Type) -> Expression {
	let serialized = match raw {
		Some(raw) => Literal::string(raw),
		None => Literal::null(Type::String),
	};
	Expression::partition_value(serialized.into(), target)
}

fn materialize(raw: Option<&str>, target: Type, rows: usize) -> ColumnData {
	bind(&StructType::default(), &partition(raw, target.clone()), &target)
		.unwrap()
		.execute(&Columns::empty(rows))
		.unwrap()
}

#[test]
fn test_materializes_every_primitive_type() {
	let date = Date::new(2021, 12, 31).unwrap();
	let timestamp = Timestamp::new(date, 23, 59, 58, 500_000).unwrap();
	let decimal = Decimal::new(BigDecimal::from_str("-12.50").unwrap(), 6, 2).unwrap();
	let cases = [
		("true", Type::Boolean, Value::Boolean(true)),
		("-5", Type::Byte, Value::Byte(-5)),
		("1000", Type::Short, Value::Short(1000)),
		("2147483647", Type::Int, Value::Int(i32::MAX)),
		("-1", Type::Long, Value::Long(-1)),
		("0.25", Type::Float, Value::Float(0.25)),
		("1e-3", Type::Double, Value::Double(0.001)),
		("-12.5", decimal.get_type(), Value::Decimal(decimal.clone())),
		("hello", Type::String, Value::String("hello".to_string())),
		("hi", Type::Binary, Value::Binary(b"hi".to_vec())),
		("2021-12-31", Type::Date, Value::Date(date)),
		("2021-12-31 23:59:58.5", Type::Timestamp, Value::Timestamp(timestamp)),
	];

	for (raw, target, expected) in cases {
		let result = materialize(Some(raw), target.clone(), 3);
		assert_eq!(result.get_type(), target);
		assert_eq!(result.len(), 3);
		for i in 0..3 {
			assert_eq!(result.get_value(i), Some(expected.clone()), "{} as {}", raw, target);
		}
	}
}

fn round_trip(value: Value, text: String) {
	let target = value.get_type();
	let literal = deserialize_partition_value(Some(&text), &target).unwrap();
	assert_eq!(literal.value(), Some(&value), "{} as {}", text, target);
}

#[test]
fn test_round_trips_display_form() {
	for v in [true, false] {
		round_trip(Value::Boolean(v), v.to_string());
	}
	for v in [i8::MIN, 0, i8::MAX] {
		round_trip(Value::Byte(v), v.to_string());
	}
	for v in [i16::MIN, -1, i16::MAX] {
		round_trip(Value::Short(v), v.to_string());
	}
	for v in [i32::MIN, 7, i32::MAX] {
		round_trip(Value::Int(v), v.to_string());
	}
	for v in [i64::MIN, 0, i64::MAX] {
		round_trip(Value::Long(v), v.to_string());
	}
	for v in [0.1f32, -3.5e-7, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
		round_trip(Value::Float(v), v.to_string());
	}
	for v in [0.1f64, -1.0e300, f64::MIN_POSITIVE, f64::INFINITY] {
		round_trip(Value::Double(v), v.to_string());
	}
	for text in ["0.00", "-12.50", "9999.99"] {
		let d = Decimal::new(BigDecimal::from_str(text).unwrap(), 6, 2).unwrap();
		round_trip(Value::Decimal(d.clone()), d.to_string());
	}
	for v in ["", "null", "héllo wörld"] {
		round_trip(Value::String(v.to_string()), v.to_string());
	}
	for v in [&b""[..], &b"bytes"[..], &b"null"[..]] {
		round_trip(Value::Binary(v.to_vec()), String::from_utf8(v.to_vec()).unwrap());
	}

	let date = Date::new(1999, 1, 9).unwrap();
	round_trip(Value::Date(date), date.to_string());
	let before_epoch = Date::new(1969, 12, 31).unwrap();
	round_trip(Value::Date(before_epoch), before_epoch.to_string());
	for micros in [0, 456, 999_999] {
		let timestamp = Timestamp::new(date, 1, 2, 3, micros).unwrap();
		round_trip(Value::Timestamp(timestamp), timestamp.to_string());
	}
}

#[test]
fn test_null_partition_value() {
	for target in [Type::Int, Type::String, Type::Timestamp] {
		let result = materialize(None, target.clone(), 2);
		assert_eq!(result.get_type(), target);
		assert!(result.is_null(0));
		assert!(result.is_null(1));
	}

	assert!(materialize(Some(""), Type::Int, 1).is_null(0));
	assert!(materialize(Some("null"), Type::Boolean, 1).is_null(0));
	assert_eq!(materialize(Some(""), Type::String, 1).get_string(0), "");
}

#[test]
fn test_configured_null_sentinel() {
	let config = EvaluatorConfig::new().partition_null_sentinel(Some("__DEFAULT__"));
	let evaluator = Evaluator::new(config.clone());
	let expr = evaluator.bind(&StructType::default(), &partition(Some("__DEFAULT__"), Type::Int), &Type::Int).unwrap();
	assert!(expr.execute(&Columns::empty(1)).unwrap().is_null(0));

	let deserializer = PartitionValueDeserializer::new(config);
	assert!(deserializer.deserialize(Some("null"), &Type::Int).is_err());
	assert_eq!(
		deserializer.deserialize(Some("__DEFAULT__"), &Type::String).unwrap().value(),
		Some(&Value::String("__DEFAULT__".to_string()))
	);
}

#[test]
fn test_malformed_value_is_an_evaluation_error() {
	let expr = bind(&StructType::default(), &partition(Some("12x"), Type::Long), &Type::Long).unwrap();
	let err = expr.execute(&Columns::empty(2)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InvalidValue);
	assert!(err.message().contains("12x"), "{}", err.message());

	let err = deserialize_partition_value(Some("300"), &Type::Byte).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InvalidValue);
	assert!(err.message().contains("300"));
}

#[test]
fn test_bind_errors() {
	let schema = StructType::default();
	let err = bind(&schema, &Expression::partition_value(Literal::long(1).into(), Type::Long), &Type::Long)
		.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

	let target = Type::array(Type::Int, true);
	let err = bind(&schema, &partition(Some("[1]"), target.clone()), &target).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

	let err = bind(&schema, &partition(Some("1"), Type::Int), &Type::Long).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn test_partition_value_in_predicate() {
	let expr = Expression::equal(partition(Some("2024-05-01"), Type::Date), Literal::date(Date::new(2024, 5, 1).unwrap()).into());
	let result = bind(&StructType::default(), &expr, &Type::Boolean).unwrap().execute(&Columns::empty(2)).unwrap();
	assert!(result.get_bool(0));
	assert!(result.get_bool(1));
}
