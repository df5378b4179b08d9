// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use metaview_core::{
	Result,
	interface::{Document, MetadataStore, QualifiedName},
};
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryMetadataStore {
	definitions: RwLock<HashMap<QualifiedName, Document>>,
}

impl MemoryMetadataStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_definition_metadata(&self, name: QualifiedName, metadata: Document) {
		self.definitions.write().insert(name, metadata);
	}
}

impl MetadataStore for MemoryMetadataStore {
	fn get_definition_metadata(&self, name: &QualifiedName) -> Result<Option<Document>> {
		Ok(self.definitions.read().get(name).cloned())
	}
}
