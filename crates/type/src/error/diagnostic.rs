// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, TypeError};

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::ColumnNotFound {
				path,
				segment,
				available,
			} => {
				let mut notes = vec![format!("field `{}` was not found", segment)];
				if !available.is_empty() {
					notes.push(format!(
						"available fields: {}",
						available.iter().map(|f| format!("`{}`", f)).collect::<Vec<_>>().join(", ")
					));
				}
				Diagnostic {
					code: "QUERY_001".to_string(),
					message,
					label: Some(format!("unknown column {}", path)),
					help: Some("check the column path against the input schema".to_string()),
					notes,
					cause: None,
				}
			}

			TypeError::NotAStruct {
				path,
				ty,
				..
			} => Diagnostic {
				code: "QUERY_002".to_string(),
				message,
				label: Some(format!("{} traverses a {} value", path, ty)),
				help: Some("only struct fields can be navigated with a nested column path".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::RowCountMismatch {
				..
			} => Diagnostic {
				code: "INTERNAL_001".to_string(),
				message,
				label: Some("columns of a batch must share one row count".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::UnknownOperator {
				name,
			} => Diagnostic {
				code: "OPERATOR_001".to_string(),
				message,
				label: Some(format!("'{}' is not a known predicate or function", name)),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidArity {
				operator,
				..
			} => Diagnostic {
				code: "OPERATOR_002".to_string(),
				message,
				label: Some(format!("wrong number of arguments for '{}'", operator)),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::ComparisonNotApplicable {
				operator,
				left,
				right,
			} => Diagnostic {
				code: "OPERATOR_003".to_string(),
				message,
				label: Some(format!("'{}' operator on incompatible types", operator)),
				help: Some(
					"numeric operands are widened along byte < short < integer < long < float < double; other types must match exactly"
						.to_string(),
				),
				notes: vec![
					format!("Left operand is of type: {}", left),
					format!("Right operand is of type: {}", right),
				],
				cause: None,
			},

			TypeError::LogicalOperatorNotApplicable {
				operator,
				..
			} => Diagnostic {
				code: "OPERATOR_004".to_string(),
				message,
				label: Some(format!("{} on a non-boolean operand", operator)),
				help: Some(format!(
					"The {} operator can only be applied to boolean values. Consider using comparison operators first",
					operator
				)),
				notes: vec![],
				cause: None,
			},

			TypeError::CoalesceMismatchedTypes {
				..
			} => Diagnostic {
				code: "FUNCTION_001".to_string(),
				message,
				label: Some("COALESCE arguments of different types".to_string()),
				help: Some("cast the arguments to a common type before calling COALESCE".to_string()),
				notes: vec!["COALESCE does not apply implicit casts".to_string()],
				cause: None,
			},

			TypeError::CoalesceUnsupportedType {
				..
			} => Diagnostic {
				code: "FUNCTION_002".to_string(),
				message,
				label: Some("COALESCE on a non-boolean type".to_string()),
				help: None,
				notes: vec!["COALESCE is currently limited to boolean arguments".to_string()],
				cause: None,
			},

			TypeError::ElementAtUnsupportedType {
				..
			} => Diagnostic {
				code: "FUNCTION_003".to_string(),
				message,
				label: Some("ELEMENT_AT(map, key) on an unsupported map".to_string()),
				help: None,
				notes: vec!["ELEMENT_AT currently requires map<string, string> input".to_string()],
				cause: None,
			},

			TypeError::PartitionValueUnsupportedType {
				..
			} => Diagnostic {
				code: "FUNCTION_004".to_string(),
				message,
				label: Some("partition values must have a primitive type".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::PartitionValueNotStringLiteral {
				..
			} => Diagnostic {
				code: "FUNCTION_005".to_string(),
				message,
				label: Some("serialized partition value must be a string literal".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::UnsupportedCast {
				from,
				to,
			} => Diagnostic {
				code: "CAST_001".to_string(),
				message,
				label: Some(format!("cannot cast {} to {}", from, to)),
				help: Some("ensure the source and target types are compatible for casting".to_string()),
				notes: vec!["implicit casts only widen numeric types".to_string()],
				cause: None,
			},

			TypeError::OutputTypeMismatch {
				actual,
				..
			} => Diagnostic {
				code: "CAST_002".to_string(),
				message,
				label: Some(format!("expression evaluates to {}", actual)),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidValue {
				target,
				..
			} => Diagnostic {
				code: "VALUE_001".to_string(),
				message,
				label: Some(format!("failed to parse as {}", target)),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::PartitionValueInvalid {
				target,
				cause,
				..
			} => Diagnostic {
				code: "VALUE_002".to_string(),
				message,
				label: Some(format!("failed to decode partition value as {}", target)),
				help: Some("partition values are stored as text in the table metadata".to_string()),
				notes: vec![],
				cause: Some(cause),
			},
		}
	}
}
