// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Decoding of partition values stored as text in table metadata.

use strata_expression::Literal;
use strata_type::{
	Result, Type, TypeError, Value, error, return_error,
	value::{
		boolean::parse_bool,
		decimal::parse_decimal,
		number::{parse_float, parse_int},
		temporal::{parse_date, parse_timestamp},
	},
};
use tracing::trace;

use crate::EvaluatorConfig;

/// Turns serialized partition values into typed literals.
#[derive(Debug, Clone, Default)]
pub struct PartitionValueDeserializer {
	config: EvaluatorConfig,
}

impl PartitionValueDeserializer {
	pub fn new(config: EvaluatorConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &EvaluatorConfig {
		&self.config
	}

	/// Decodes `raw` as a value of `target`.
	///
	/// `None` is null for every primitive type. String and binary keep their
	/// text verbatim; every other type treats the empty string and the
	/// configured sentinel as null. Nested targets are unsupported.
	pub fn deserialize(&self, raw: Option<&str>, target: &Type) -> Result<Literal> {
		if !target.is_primitive() {
			return_error!(TypeError::PartitionValueUnsupportedType {
				ty: target.clone(),
			});
		}

		let Some(raw) = raw else {
			return Ok(Literal::null(target.clone()));
		};

		let value = match target {
			// Text types have no null spelling: "null" and "" are data.
			Type::String => Value::String(raw.to_string()),
			Type::Binary => Value::Binary(raw.as_bytes().to_vec()),
			_ if self.config.is_partition_null(raw) => {
				trace!(raw, %target, "partition value decoded as null");
				return Ok(Literal::null(target.clone()));
			}
			_ => parse(raw, target).map_err(|err| {
				error!(TypeError::PartitionValueInvalid {
					value: raw.to_string(),
					target: target.clone(),
					cause: Box::new(err.diagnostic()),
				})
			})?,
		};

		Literal::new(target.clone(), Some(value))
	}
}

fn parse(raw: &str, target: &Type) -> Result<Value> {
	Ok(match target {
		Type::Boolean => Value::Boolean(parse_bool(raw)?),
		Type::Byte | Type::Short | Type::Int | Type::Long => parse_int(raw, target)?,
		Type::Float | Type::Double => parse_float(raw, target)?,
		Type::Decimal {
			precision,
			scale,
		} => Value::Decimal(parse_decimal(raw, *precision, *scale)?),
		Type::Date => Value::Date(parse_date(raw)?),
		Type::Timestamp => Value::Timestamp(parse_timestamp(raw)?),
		Type::String => Value::String(raw.to_string()),
		Type::Binary => Value::Binary(raw.as_bytes().to_vec()),
		Type::Struct(_) | Type::Array(_) | Type::Map(_) => {
			return_error!(TypeError::PartitionValueUnsupportedType {
				ty: target.clone(),
			})
		}
	})
}

/// Decodes a partition value with the default configuration.
pub fn deserialize_partition_value(raw: Option<&str>, target: &Type) -> Result<Literal> {
	PartitionValueDeserializer::default().deserialize(raw, target)
}
