// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Configuration for binding and evaluating expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
	/// Whether an empty serialized partition value is null for every type
	/// other than string and binary.
	///
	/// Default: true
	pub empty_partition_value_is_null: bool,

	/// Serialized partition text that stands for null, for every type other
	/// than string and binary.
	///
	/// Default: `Some("null")`
	pub partition_null_sentinel: Option<String>,
}

impl Default for EvaluatorConfig {
	fn default() -> Self {
		Self {
			empty_partition_value_is_null: true,
			partition_null_sentinel: Some("null".to_string()),
		}
	}
}

impl EvaluatorConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn empty_partition_value_is_null(mut self, value: bool) -> Self {
		self.empty_partition_value_is_null = value;
		self
	}

	/// Set the null sentinel. `None` disables it.
	pub fn partition_null_sentinel(mut self, sentinel: Option<impl Into<String>>) -> Self {
		self.partition_null_sentinel = sentinel.map(Into::into);
		self
	}

	/// Whether `raw` is a serialized null for a non-string, non-binary type.
	pub(crate) fn is_partition_null(&self, raw: &str) -> bool {
		(raw.is_empty() && self.empty_partition_value_is_null) || self.partition_null_sentinel.as_deref() == Some(raw)
	}
}
