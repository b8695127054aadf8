// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Result, error::TypeError, value::Type};

/// Parses `true` or `false`, ignoring ASCII case.
pub fn parse_bool(value: &str) -> Result<bool> {
	if value.eq_ignore_ascii_case("true") {
		Ok(true)
	} else if value.eq_ignore_ascii_case("false") {
		Ok(false)
	} else {
		crate::err!(TypeError::InvalidValue {
			value: value.to_string(),
			target: Type::Boolean,
			reason: "expected 'true' or 'false'".to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_valid() {
		assert_eq!(parse_bool("true"), Ok(true));
		assert_eq!(parse_bool("false"), Ok(false));
	}

	#[test]
	fn test_case_mismatch() {
		assert_eq!(parse_bool("True"), Ok(true));
		assert_eq!(parse_bool("TRUE"), Ok(true));
		assert_eq!(parse_bool("fAlSe"), Ok(false));
	}

	#[test]
	fn test_invalid() {
		for text in ["", "1", "0", "yes", " true", "truee"] {
			let err = parse_bool(text).unwrap_err();
			assert!(err.message().contains(&format!("'{}'", text)));
		}
	}
}
