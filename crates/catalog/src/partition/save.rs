// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use metaview_core::interface::{
	PartitionListOptions, PartitionQuery, PartitionRecord, PartitionsSaveResult, QualifiedName,
};
use metaview_type::{Result, return_err};
use tracing::{debug, instrument};

use crate::{CatalogError, PhysicalName, ViewCatalog, merge_partitions};

impl ViewCatalog {
	/// Saves `records` as partitions of the view.
	///
	/// With `merge`, storage fields a record leaves unset are taken from the partition
	/// already stored under the same name (see [`merge_partitions`]). `deletes`,
	/// `check_if_exists` and `alter_if_exists` go to the partition store as given.
	#[instrument(
		name = "catalog::partition::save",
		level = "debug",
		skip(self, name, records, deletes),
		fields(view = %name, count = records.len())
	)]
	pub fn save_partitions(
		&self,
		name: &QualifiedName,
		records: Vec<PartitionRecord>,
		deletes: &[String],
		merge: bool,
		check_if_exists: bool,
		alter_if_exists: bool,
	) -> Result<PartitionsSaveResult> {
		if records.is_empty() {
			return Ok(PartitionsSaveResult::default());
		}

		let physical = self.codec.physical_name(name)?;
		let table = physical.to_qualified();
		let records = records.into_iter().map(|record| retarget(&physical, record)).collect::<Result<Vec<_>>>()?;

		let records = if merge {
			let names = records.iter().filter_map(|r| r.partition_name()).map(str::to_string).collect();
			let existing: HashMap<String, PartitionRecord> = self
				.partitions
				.list_partitions(
					&table,
					&PartitionQuery::default().with_names(names),
					PartitionListOptions {
						include_details: true,
						..PartitionListOptions::default()
					},
				)?
				.into_iter()
				.filter_map(|p| Some((p.partition_name()?.to_string(), p)))
				.collect();
			debug!("Merging {} partitions against {} stored", records.len(), existing.len());
			merge_partitions(records, &existing)
		} else {
			records
		};

		self.partitions.save_partitions(&table, records, deletes, check_if_exists, alter_if_exists)
	}
}

/// Moves a partition record into the namespace of the view's backing table.
fn retarget(physical: &PhysicalName, mut record: PartitionRecord) -> Result<PartitionRecord> {
	let Some(partition) = record.partition_name().filter(|_| record.name.is_partition_definition()) else {
		return_err!(CatalogError::InvalidIdentity {
			name: record.name.to_string(),
			reason: "partition records must name a partition".to_string(),
		});
	};
	record.name = physical.partition(partition);
	Ok(record)
}
