// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_column::{ColumnData, container::Utf8Container};
use strata_type::{Result, Type, TypeError, err, return_error};

use super::CompiledExpr;

fn is_string_map(ty: &Type) -> bool {
	matches!(ty, Type::Map(m) if m.key.is_string() && m.value.is_string())
}

/// `ELEMENT_AT(map, key)`, restricted to `map<string, string>` and a string
/// key. The first entry whose key equals the lookup key wins.
pub(crate) fn compile(map: CompiledExpr, key: CompiledExpr) -> Result<CompiledExpr> {
	if !is_string_map(map.get_type()) || !key.get_type().is_string() {
		return_error!(TypeError::ElementAtUnsupportedType {
			map: map.get_type().clone(),
			key: key.get_type().clone(),
		});
	}

	Ok(CompiledExpr::new(Type::String, move |columns| {
		let map_data = map.eval(columns)?;
		let key_data = key.eval(columns)?;
		let unsupported = || {
			err!(TypeError::ElementAtUnsupportedType {
				map: map_data.get_type(),
				key: key_data.get_type(),
			})
		};

		let (ColumnData::Map(m), ColumnData::Utf8(lookup)) = (&map_data, &key_data) else {
			return unsupported();
		};
		let (ColumnData::Utf8(keys), ColumnData::Utf8(values)) = (m.keys(), m.values()) else {
			return unsupported();
		};

		let mut result = Utf8Container::with_capacity(m.len());
		for i in 0..m.len() {
			let found = match lookup.get(i) {
				Some(wanted) if m.is_defined(i) => {
					m.range(i).find(|&j| keys.get(j) == Some(wanted)).and_then(|j| values.get(j))
				}
				_ => None,
			};
			match found {
				Some(v) => result.push(v),
				None => result.push_undefined(),
			}
		}
		Ok(ColumnData::Utf8(result))
	}))
}
