// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

mod diagnostic;
mod r#macro;
pub mod render;

use render::DefaultRenderer;

use crate::value::Type;

/// A structured, renderable description of a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn message(&self) -> &str {
		&self.0.message
	}

	pub fn kind(&self) -> ErrorKind {
		ErrorKind::from_code(&self.0.code)
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&DefaultRenderer::render_string(&self.0))
	}
}

impl std::error::Error for Error {}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// The error families callers can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// A column path does not exist in the bound schema.
	SchemaResolution,
	/// An operator, function or cast is not defined for the given types.
	UnsupportedOperation,
	/// A serialized value cannot be parsed as its target type.
	InvalidValue,
	/// A broken invariant between the evaluator and its inputs.
	Internal,
}

impl ErrorKind {
	fn from_code(code: &str) -> Self {
		match code.split('_').next() {
			Some("QUERY") => ErrorKind::SchemaResolution,
			Some("OPERATOR") | Some("FUNCTION") | Some("CAST") => ErrorKind::UnsupportedOperation,
			Some("VALUE") => ErrorKind::InvalidValue,
			_ => ErrorKind::Internal,
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::SchemaResolution => f.write_str("schema resolution error"),
			ErrorKind::UnsupportedOperation => f.write_str("unsupported operation"),
			ErrorKind::InvalidValue => f.write_str("invalid value"),
			ErrorKind::Internal => f.write_str("internal error"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("column {path} does not exist")]
	ColumnNotFound {
		path: String,
		segment: String,
		available: Vec<String>,
	},

	#[error("column {path} cannot be resolved: {segment} is of type {ty}, not a struct")]
	NotAStruct {
		path: String,
		segment: String,
		ty: Type,
	},

	#[error("column {column} has {actual} rows, expected {expected}")]
	RowCountMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("unknown operator '{name}'")]
	UnknownOperator {
		name: String,
	},

	#[error("operator '{operator}' expects {expected} argument(s), got {actual}")]
	InvalidArity {
		operator: String,
		expected: String,
		actual: usize,
	},

	#[error("cannot apply '{operator}' to {left} and {right}")]
	ComparisonNotApplicable {
		operator: String,
		left: Type,
		right: Type,
	},

	#[error("cannot apply {operator} to {operand}")]
	LogicalOperatorNotApplicable {
		operator: String,
		operand: Type,
	},

	#[error("COALESCE requires arguments of the same type, got {}", join_types(.types))]
	CoalesceMismatchedTypes {
		types: Vec<Type>,
	},

	#[error("COALESCE is only supported for boolean arguments, got {ty}")]
	CoalesceUnsupportedType {
		ty: Type,
	},

	#[error("ELEMENT_AT is only supported for map<string, string> with a string key, got {map} and {key}")]
	ElementAtUnsupportedType {
		map: Type,
		key: Type,
	},

	#[error("partition value of type {ty} cannot be deserialized")]
	PartitionValueUnsupportedType {
		ty: Type,
	},

	#[error("partition value expression requires a string literal, got {expression}")]
	PartitionValueNotStringLiteral {
		expression: String,
	},

	#[error("unsupported cast from {from} to {to}")]
	UnsupportedCast {
		from: Type,
		to: Type,
	},

	#[error("expression {expression} does not match expected output type {expected}")]
	OutputTypeMismatch {
		expression: String,
		expected: Type,
		actual: Type,
	},

	#[error("invalid value '{value}' for type {target}: {reason}")]
	InvalidValue {
		value: String,
		target: Type,
		reason: String,
	},

	#[error("partition value '{value}' cannot be decoded as {target}")]
	PartitionValueInvalid {
		value: String,
		target: Type,
		cause: Box<Diagnostic>,
	},
}

fn join_types(types: &[Type]) -> String {
	types.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_from_code() {
		let err: Error = TypeError::ColumnNotFound {
			path: "`a`".to_string(),
			segment: "a".to_string(),
			available: vec![],
		}
		.into();
		assert_eq!(err.kind(), ErrorKind::SchemaResolution);

		let err: Error = TypeError::CoalesceUnsupportedType {
			ty: Type::Int,
		}
		.into();
		assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

		let err: Error = TypeError::InvalidValue {
			value: "abc".to_string(),
			target: Type::Int,
			reason: "not a valid integer".to_string(),
		}
		.into();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
	}

	#[test]
	fn test_display_renders_message() {
		let err: Error = TypeError::InvalidValue {
			value: "1x".to_string(),
			target: Type::Long,
			reason: "not a valid integer".to_string(),
		}
		.into();
		let rendered = err.to_string();
		assert!(rendered.contains("VALUE_001"));
		assert!(rendered.contains("1x"));
	}

	#[test]
	fn test_partition_value_chains_cause() {
		let cause: Error = TypeError::InvalidValue {
			value: "1x".to_string(),
			target: Type::Long,
			reason: "not a valid integer".to_string(),
		}
		.into();
		let err: Error = TypeError::PartitionValueInvalid {
			value: "1x".to_string(),
			target: Type::Long,
			cause: Box::new(cause.diagnostic()),
		}
		.into();
		assert_eq!(err.kind(), ErrorKind::InvalidValue);
		assert_eq!(err.code(), "VALUE_002");

		let rendered = err.to_string();
		assert!(rendered.starts_with("[VALUE_002] partition value '1x'"), "{}", rendered);
		assert!(rendered.contains("caused by:\n  [VALUE_001] invalid value '1x'"), "{}", rendered);
	}
}
