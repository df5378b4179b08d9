// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use super::{Document, QualifiedName};

/// Where a table or partition keeps its data and how that data is (de)serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDescriptor {
	pub uri: Option<String>,
	pub input_format: Option<String>,
	pub output_format: Option<String>,
	pub serialization_lib: Option<String>,
}

impl StorageDescriptor {
	pub fn with_uri(uri: impl Into<String>) -> Self {
		Self {
			uri: Some(uri.into()),
			..Self::default()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.uri.is_none()
			&& self.input_format.is_none()
			&& self.output_format.is_none()
			&& self.serialization_lib.is_none()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRecord {
	pub name: QualifiedName,
	pub storage: Option<StorageDescriptor>,
	pub definition_metadata: Option<Document>,
	pub data_metadata: Option<Document>,
}

impl PartitionRecord {
	pub fn new(name: QualifiedName) -> Self {
		Self {
			name,
			storage: None,
			definition_metadata: None,
			data_metadata: None,
		}
	}

	pub fn with_storage(mut self, storage: StorageDescriptor) -> Self {
		self.storage = Some(storage);
		self
	}

	/// The partition key/value string, e.g. `dateint=20240101/hour=00`.
	pub fn partition_name(&self) -> Option<&str> {
		self.name.partition()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionsSaveResult {
	pub added: Vec<String>,
	pub updated: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
	#[default]
	Ascending,
	Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
	pub sort_by: String,
	pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
	pub offset: usize,
	pub limit: Option<usize>,
}

/// Selects partitions of one table. Every field is optional; the default selects all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionQuery {
	/// Filter expression understood by the partition store.
	pub filter: Option<String>,
	pub names: Option<Vec<String>>,
	pub sort: Option<Sort>,
	pub page: Option<Pageable>,
}

impl PartitionQuery {
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());
		self
	}

	pub fn with_names(mut self, names: Vec<String>) -> Self {
		self.names = Some(names);
		self
	}

	pub fn with_sort(mut self, sort: Sort) -> Self {
		self.sort = Some(sort);
		self
	}

	pub fn with_page(mut self, page: Pageable) -> Self {
		self.page = Some(page);
		self
	}
}

/// What a partition listing should carry besides the partition names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionListOptions {
	pub include_definition_metadata: bool,
	pub include_data_metadata: bool,
	pub include_details: bool,
}
