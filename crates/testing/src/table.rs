// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, BTreeSet},
	sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use metaview_core::{
	Result, StoreError,
	interface::{CatalogEnumerator, Document, QualifiedName, StorageDescriptor, TableEntry, TableStore},
};
use metaview_type::Error;
use parking_lot::{Mutex, RwLock};

/// Tables keyed by their table-level name. Copies are idempotent: copying onto an
/// existing table returns that table.
///
/// `get_table` reports a missing table as `Ok(None)` unless
/// [`MemoryTableStore::report_missing_as_error`] switches it to `TableNotFound`.
#[derive(Default)]
pub struct MemoryTableStore {
	tables: RwLock<BTreeMap<QualifiedName, TableEntry>>,
	databases: RwLock<BTreeSet<(String, String)>>,
	calls: AtomicUsize,
	copies: AtomicUsize,
	missing_as_error: AtomicBool,
	get_failure: Mutex<Option<StoreError>>,
	list_failure: Mutex<Option<StoreError>>,
}

impl MemoryTableStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn create_database(&self, catalog: &str, database: &str) {
		self.databases.write().insert((catalog.to_string(), database.to_string()));
	}

	/// Stores `table`, creating its database when needed.
	pub fn insert(&self, table: TableEntry) {
		if let (Some(database), Some(_)) = (table.name.database(), table.name.table()) {
			self.create_database(table.name.catalog(), database);
		}
		self.tables.write().insert(table.name.clone(), table);
	}

	pub fn table(&self, name: &QualifiedName) -> Option<TableEntry> {
		self.tables.read().get(name).cloned()
	}

	/// Every store call made so far, enumeration included.
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Copies that created a table.
	pub fn copy_count(&self) -> usize {
		self.copies.load(Ordering::SeqCst)
	}

	pub fn report_missing_as_error(&self) {
		self.missing_as_error.store(true, Ordering::SeqCst);
	}

	/// Makes the next `get_table` call fail with `err`.
	pub fn fail_next_get(&self, err: StoreError) {
		*self.get_failure.lock() = Some(err);
	}

	/// Makes the next `list_tables` call fail with `err`.
	pub fn fail_next_list(&self, err: StoreError) {
		*self.list_failure.lock() = Some(err);
	}

	fn called(&self) {
		self.calls.fetch_add(1, Ordering::SeqCst);
	}

	fn not_found(name: &QualifiedName) -> Error {
		StoreError::TableNotFound {
			name: name.to_string(),
		}
		.into()
	}
}

impl TableStore for MemoryTableStore {
	fn get_table(&self, name: &QualifiedName, _include_info: bool) -> Result<Option<TableEntry>> {
		self.called();
		if let Some(err) = self.get_failure.lock().take() {
			return Err(err.into());
		}

		match self.table(name) {
			Some(table) => Ok(Some(table)),
			None if self.missing_as_error.load(Ordering::SeqCst) => Err(Self::not_found(name)),
			None => Ok(None),
		}
	}

	fn copy_table(&self, source: &TableEntry, target: &QualifiedName) -> Result<TableEntry> {
		self.called();
		let mut tables = self.tables.write();
		if let Some(existing) = tables.get(target) {
			return Ok(existing.clone());
		}

		let copy = TableEntry {
			name: target.clone(),
			fields: source.fields.clone(),
			storage: source.storage.as_ref().map(|s| StorageDescriptor {
				uri: None,
				..s.clone()
			}),
			definition_metadata: None,
			data_metadata: None,
		};
		tables.insert(target.clone(), copy.clone());
		drop(tables);

		if let Some(database) = target.database() {
			self.create_database(target.catalog(), database);
		}
		self.copies.fetch_add(1, Ordering::SeqCst);
		Ok(copy)
	}

	fn delete_table(&self, name: &QualifiedName, _force: bool) -> Result<TableEntry> {
		self.called();
		self.tables.write().remove(name).ok_or_else(|| Self::not_found(name))
	}

	fn update_table(&self, name: &QualifiedName, mut entry: TableEntry) -> Result<()> {
		self.called();
		let mut tables = self.tables.write();
		let Some(slot) = tables.get_mut(name) else {
			return Err(Self::not_found(name));
		};
		entry.name = name.clone();
		*slot = entry;
		Ok(())
	}

	fn rename_table(&self, old: &QualifiedName, new: &QualifiedName, _force: bool) -> Result<()> {
		self.called();
		let mut tables = self.tables.write();
		if tables.contains_key(new) {
			return Err(StoreError::Conflict {
				name: new.to_string(),
				reason: "table already exists".to_string(),
			}
			.into());
		}
		let Some(mut entry) = tables.remove(old) else {
			return Err(Self::not_found(old));
		};
		entry.name = new.clone();
		tables.insert(new.clone(), entry);
		Ok(())
	}

	fn table_exists(&self, name: &QualifiedName) -> Result<bool> {
		self.called();
		Ok(self.tables.read().contains_key(name))
	}

	fn save_table_metadata(
		&self,
		name: &QualifiedName,
		definition: Option<Document>,
		data: Option<Document>,
	) -> Result<()> {
		self.called();
		let mut tables = self.tables.write();
		let Some(entry) = tables.get_mut(name) else {
			return Err(Self::not_found(name));
		};
		if definition.is_some() {
			entry.definition_metadata = definition;
		}
		if data.is_some() {
			entry.data_metadata = data;
		}
		Ok(())
	}
}

impl CatalogEnumerator for MemoryTableStore {
	fn list_tables(&self, catalog: &str, database: &str) -> Result<Vec<String>> {
		self.called();
		if let Some(err) = self.list_failure.lock().take() {
			return Err(err.into());
		}

		if !self.databases.read().contains(&(catalog.to_string(), database.to_string())) {
			return Err(StoreError::DatabaseNotFound {
				name: format!("{}/{}", catalog, database),
			}
			.into());
		}

		Ok(self
			.tables
			.read()
			.keys()
			.filter(|name| name.catalog() == catalog && name.database() == Some(database))
			.filter_map(|name| name.table().map(str::to_string))
			.collect())
	}
}
