// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Collaborators the view catalog delegates to. Implementations own persistence,
//! sessions and concurrency control; every name they receive is table-level.

use crate::{
	Result,
	interface::catalog::{
		Document, PartitionListOptions, PartitionQuery, PartitionRecord, PartitionsSaveResult, QualifiedName,
		TableEntry,
	},
};

pub trait TableStore: Send + Sync {
	/// Returns `Ok(None)` when the table does not exist. Implementations may instead
	/// fail with [`StoreError::TableNotFound`](crate::StoreError::TableNotFound).
	fn get_table(&self, name: &QualifiedName, include_info: bool) -> Result<Option<TableEntry>>;

	/// Creates `target` with the schema of `source`.
	///
	/// Must be idempotent, or fail with
	/// [`StoreError::Conflict`](crate::StoreError::Conflict), when `target` is created
	/// concurrently by another caller.
	fn copy_table(&self, source: &TableEntry, target: &QualifiedName) -> Result<TableEntry>;

	fn delete_table(&self, name: &QualifiedName, force: bool) -> Result<TableEntry>;

	fn update_table(&self, name: &QualifiedName, entry: TableEntry) -> Result<()>;

	fn rename_table(&self, old: &QualifiedName, new: &QualifiedName, force: bool) -> Result<()>;

	fn table_exists(&self, name: &QualifiedName) -> Result<bool>;

	fn save_table_metadata(
		&self,
		name: &QualifiedName,
		definition: Option<Document>,
		data: Option<Document>,
	) -> Result<()>;
}

pub trait PartitionStore: Send + Sync {
	fn list_partitions(
		&self,
		table: &QualifiedName,
		query: &PartitionQuery,
		options: PartitionListOptions,
	) -> Result<Vec<PartitionRecord>>;

	fn save_partitions(
		&self,
		table: &QualifiedName,
		records: Vec<PartitionRecord>,
		deletes: &[String],
		check_if_exists: bool,
		alter_if_exists: bool,
	) -> Result<PartitionsSaveResult>;

	fn delete_partitions(&self, table: &QualifiedName, names: &[String]) -> Result<()>;

	fn partition_keys(&self, table: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>>;

	fn partition_uris(&self, table: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>>;

	fn partition_count(&self, table: &QualifiedName) -> Result<u64>;
}

pub trait CatalogEnumerator: Send + Sync {
	/// Names of the tables in `catalog.database`. A missing database is reported as
	/// [`StoreError::DatabaseNotFound`](crate::StoreError::DatabaseNotFound).
	fn list_tables(&self, catalog: &str, database: &str) -> Result<Vec<String>>;
}

pub trait MetadataStore: Send + Sync {
	fn get_definition_metadata(&self, name: &QualifiedName) -> Result<Option<Document>>;
}
