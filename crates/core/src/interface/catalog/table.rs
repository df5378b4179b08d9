// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use super::{Document, QualifiedName, StorageDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
	pub name: String,
	pub ty: String,
	pub comment: Option<String>,
	pub partition_key: bool,
}

impl FieldEntry {
	pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
			comment: None,
			partition_key: false,
		}
	}

	pub fn partition_key(mut self) -> Self {
		self.partition_key = true;
		self
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
	pub name: QualifiedName,
	pub fields: Vec<FieldEntry>,
	pub storage: Option<StorageDescriptor>,
	pub definition_metadata: Option<Document>,
	pub data_metadata: Option<Document>,
}

impl TableEntry {
	pub fn new(name: QualifiedName) -> Self {
		Self {
			name,
			fields: vec![],
			storage: None,
			definition_metadata: None,
			data_metadata: None,
		}
	}

	pub fn with_field(mut self, field: FieldEntry) -> Self {
		self.fields.push(field);
		self
	}

	pub fn with_storage(mut self, storage: StorageDescriptor) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Merges `metadata` into the definition metadata of this entry.
	///
	/// When both sides are JSON objects the keys of `metadata` are inserted, replacing
	/// keys already present. Any other combination replaces the document.
	pub fn merge_definition_metadata(&mut self, metadata: Document) {
		match (&mut self.definition_metadata, metadata) {
			(Some(Document::Object(existing)), Document::Object(incoming)) => {
				existing.extend(incoming);
			}
			(slot, metadata) => *slot = Some(metadata),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewListEntry {
	pub name: QualifiedName,
}
