// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A path of field names through nested struct types.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
	path: Vec<String>,
}

impl ColumnRef {
	pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
		Self {
			path: path.into_iter().map(Into::into).collect(),
		}
	}

	pub fn path(&self) -> &[String] {
		&self.path
	}

	/// The first `len` segments rendered as a quoted path.
	pub fn prefix(&self, len: usize) -> String {
		quote(&self.path[..len.min(self.path.len())])
	}
}

fn quote(segments: &[String]) -> String {
	segments.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(".")
}

impl Display for ColumnRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&quote(&self.path))
	}
}
