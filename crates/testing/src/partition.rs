// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, HashSet},
	sync::atomic::{AtomicUsize, Ordering},
};

use metaview_core::{
	Result, StoreError,
	interface::{
		PartitionListOptions, PartitionQuery, PartitionRecord, PartitionStore, PartitionsSaveResult,
		QualifiedName, SortOrder,
	},
};
use parking_lot::{Mutex, RwLock};

/// Arguments of one `save_partitions` call, as received.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveCall {
	pub table: QualifiedName,
	pub records: Vec<PartitionRecord>,
	pub deletes: Vec<String>,
	pub check_if_exists: bool,
	pub alter_if_exists: bool,
}

/// Partitions per table, ordered by partition name.
///
/// A query filter matches partitions whose name contains the filter text; sorting is
/// by partition name. Saving follows the hive semantics:
///
/// * without `check_if_exists` every record is added, and one already present is a conflict
/// * with `check_if_exists`, present records are replaced when `alter_if_exists` is set and
///   otherwise keep their storage and only take the record's user metadata
#[derive(Default)]
pub struct MemoryPartitionStore {
	tables: RwLock<BTreeMap<QualifiedName, BTreeMap<String, PartitionRecord>>>,
	calls: AtomicUsize,
	saves: Mutex<Vec<SaveCall>>,
}

impl MemoryPartitionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `records` for `table` directly, bypassing the save semantics.
	pub fn insert(&self, table: &QualifiedName, records: impl IntoIterator<Item = PartitionRecord>) {
		let mut tables = self.tables.write();
		let partitions = tables.entry(table.clone()).or_default();
		for record in records {
			if let Some(name) = record.partition_name() {
				partitions.insert(name.to_string(), record);
			}
		}
	}

	pub fn partitions(&self, table: &QualifiedName) -> Vec<PartitionRecord> {
		self.tables.read().get(table).map(|p| p.values().cloned().collect()).unwrap_or_default()
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn save_calls(&self) -> Vec<SaveCall> {
		self.saves.lock().clone()
	}

	fn called(&self) {
		self.calls.fetch_add(1, Ordering::SeqCst);
	}

	fn select(&self, table: &QualifiedName, query: &PartitionQuery) -> Vec<PartitionRecord> {
		let tables = self.tables.read();
		let Some(partitions) = tables.get(table) else {
			return vec![];
		};

		let names: Option<HashSet<&str>> = query.names.as_ref().map(|n| n.iter().map(String::as_str).collect());

		let mut selected: Vec<PartitionRecord> = partitions
			.iter()
			.filter(|(name, _)| names.as_ref().is_none_or(|names| names.contains(name.as_str())))
			.filter(|(name, _)| query.filter.as_ref().is_none_or(|filter| name.contains(filter.as_str())))
			.map(|(_, record)| record.clone())
			.collect();

		if let Some(sort) = &query.sort {
			if sort.order == SortOrder::Descending {
				selected.reverse();
			}
		}

		match query.page {
			Some(page) => selected
				.into_iter()
				.skip(page.offset)
				.take(page.limit.unwrap_or(usize::MAX))
				.collect(),
			None => selected,
		}
	}
}

impl PartitionStore for MemoryPartitionStore {
	fn list_partitions(
		&self,
		table: &QualifiedName,
		query: &PartitionQuery,
		options: PartitionListOptions,
	) -> Result<Vec<PartitionRecord>> {
		self.called();
		Ok(self
			.select(table, query)
			.into_iter()
			.map(|mut record| {
				if !options.include_details {
					record.storage = None;
				}
				if !options.include_definition_metadata {
					record.definition_metadata = None;
				}
				if !options.include_data_metadata {
					record.data_metadata = None;
				}
				record
			})
			.collect())
	}

	fn save_partitions(
		&self,
		table: &QualifiedName,
		records: Vec<PartitionRecord>,
		deletes: &[String],
		check_if_exists: bool,
		alter_if_exists: bool,
	) -> Result<PartitionsSaveResult> {
		self.called();
		self.saves.lock().push(SaveCall {
			table: table.clone(),
			records: records.clone(),
			deletes: deletes.to_vec(),
			check_if_exists,
			alter_if_exists,
		});

		let mut tables = self.tables.write();
		let partitions = tables.entry(table.clone()).or_default();
		for name in deletes {
			partitions.remove(name);
		}

		let mut result = PartitionsSaveResult::default();
		for record in records {
			let Some(name) = record.partition_name().map(str::to_string) else {
				return Err(StoreError::Backend {
					reason: format!("{} does not name a partition", record.name),
				}
				.into());
			};

			match partitions.get_mut(&name) {
				None => {
					partitions.insert(name.clone(), record);
					result.added.push(name);
				}
				Some(_) if !check_if_exists => {
					return Err(StoreError::Conflict {
						name: record.name.to_string(),
						reason: "partition already exists".to_string(),
					}
					.into());
				}
				Some(existing) if alter_if_exists => {
					*existing = record;
					result.updated.push(name);
				}
				Some(existing) => {
					if record.definition_metadata.is_some() {
						existing.definition_metadata = record.definition_metadata;
					}
					if record.data_metadata.is_some() {
						existing.data_metadata = record.data_metadata;
					}
					result.updated.push(name);
				}
			}
		}

		Ok(result)
	}

	fn delete_partitions(&self, table: &QualifiedName, names: &[String]) -> Result<()> {
		self.called();
		if let Some(partitions) = self.tables.write().get_mut(table) {
			for name in names {
				partitions.remove(name);
			}
		}
		Ok(())
	}

	fn partition_keys(&self, table: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>> {
		self.called();
		Ok(self.select(table, query).into_iter().filter_map(|p| p.partition_name().map(str::to_string)).collect())
	}

	fn partition_uris(&self, table: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>> {
		self.called();
		Ok(self.select(table, query).into_iter().filter_map(|p| p.storage.and_then(|s| s.uri)).collect())
	}

	fn partition_count(&self, table: &QualifiedName) -> Result<u64> {
		self.called();
		Ok(self.tables.read().get(table).map(|p| p.len() as u64).unwrap_or(0))
	}
}
