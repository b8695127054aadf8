// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Type;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: Type,
	pub nullable: bool,
}

impl StructField {
	pub fn new(name: impl Into<String>, ty: Type, nullable: bool) -> Self {
		Self {
			name: name.into(),
			ty,
			nullable,
		}
	}
}

/// An ordered list of named, typed fields. Also used as the schema of a
/// columnar batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructType {
	fields: Vec<StructField>,
}

impl StructType {
	pub fn new(fields: Vec<StructField>) -> Self {
		Self {
			fields,
		}
	}

	pub fn fields(&self) -> &[StructField] {
		&self.fields
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.name == name)
	}

	pub fn field(&self, name: &str) -> Option<&StructField> {
		self.fields.iter().find(|f| f.name == name)
	}

	pub fn field_names(&self) -> Vec<String> {
		self.fields.iter().map(|f| f.name.clone()).collect()
	}
}

impl Display for StructType {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		f.write_str("struct<")?;
		for (i, field) in self.fields.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", field.name, field.ty)?;
		}
		f.write_str(">")
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayType {
	pub element: Type,
	pub contains_null: bool,
}

impl ArrayType {
	pub fn new(element: Type, contains_null: bool) -> Self {
		Self {
			element,
			contains_null,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapType {
	pub key: Type,
	pub value: Type,
	pub value_contains_null: bool,
}

impl MapType {
	pub fn new(key: Type, value: Type, value_contains_null: bool) -> Self {
		Self {
			key,
			value,
			value_contains_null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_by_name() {
		let schema = StructType::new(vec![
			StructField::new("id", Type::Long, false),
			StructField::new("name", Type::String, true),
		]);
		assert_eq!(schema.index_of("name"), Some(1));
		assert_eq!(schema.field("id").map(|f| &f.ty), Some(&Type::Long));
		assert!(schema.field("ID").is_none());
	}

	#[test]
	fn test_schema_from_json() {
		let json = r#"{
			"fields": [
				{ "name": "id", "type": "long", "nullable": false },
				{ "name": "price", "type": { "decimal": { "precision": 10, "scale": 2 } }, "nullable": true },
				{ "name": "tags", "type": { "map": { "key": "string", "value": "string", "value_contains_null": true } }, "nullable": true }
			]
		}"#;

		let schema: StructType = serde_json::from_str(json).unwrap();
		assert_eq!(schema.len(), 3);
		assert_eq!(
			schema.fields()[1].ty,
			Type::Decimal {
				precision: 10,
				scale: 2
			}
		);
		assert_eq!(schema.fields()[2].ty, Type::map(Type::String, Type::String, true));
	}
}
