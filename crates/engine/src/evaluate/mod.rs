// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Binding expressions to a schema and evaluating them over batches.
//!
//! Binding checks every column path and operand type up front and yields a
//! [`CompiledExpr`]; evaluation can then only fail on malformed values or on
//! a batch that does not match the bound schema.

mod coalesce;
mod column;
mod compare;
mod compile;
mod compiled;
mod element_at;
mod literal;
mod logical;
mod null;
mod partition;

use compile::{CompileContext, compile};
pub use compiled::CompiledExpr;
use strata_expression::Expression;
use strata_type::{Result, StructType, Type, TypeError, return_error};
use tracing::{debug, instrument};

use crate::EvaluatorConfig;

/// Binds expressions under a fixed [`EvaluatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
	config: EvaluatorConfig,
}

impl Evaluator {
	pub fn new(config: EvaluatorConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &EvaluatorConfig {
		&self.config
	}

	/// Binds `expr` against `schema`. Fails if a column path does not
	/// resolve, if operand types cannot be reconciled, or if the expression
	/// does not produce `output`.
	#[instrument(name = "engine::evaluate::bind", level = "debug", skip_all, fields(expr = %expr, output = %output))]
	pub fn bind(&self, schema: &StructType, expr: &Expression, output: &Type) -> Result<CompiledExpr> {
		let ctx = CompileContext {
			schema,
			config: &self.config,
		};
		let compiled = compile(&ctx, expr)?;

		if !compiled.get_type().equivalent(output) {
			debug!(actual = %compiled.get_type(), "output type mismatch");
			return_error!(TypeError::OutputTypeMismatch {
				expression: expr.to_string(),
				expected: output.clone(),
				actual: compiled.get_type().clone(),
			});
		}

		debug!(ty = %compiled.get_type(), "bound expression");
		Ok(compiled)
	}
}

/// Binds `expr` against `schema` with the default configuration.
pub fn bind(schema: &StructType, expr: &Expression, output: &Type) -> Result<CompiledExpr> {
	Evaluator::default().bind(schema, expr, output)
}
