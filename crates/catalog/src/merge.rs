// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use metaview_core::interface::{PartitionRecord, StorageDescriptor};

/// Reconciles `incoming` partitions with the stored ones, keyed by partition name.
///
/// Order is preserved and nothing is dropped; see [`merge_partition`].
pub fn merge_partitions(
	incoming: Vec<PartitionRecord>,
	existing: &HashMap<String, PartitionRecord>,
) -> Vec<PartitionRecord> {
	incoming.into_iter()
		.map(|record| {
			let prior = record.partition_name().and_then(|name| existing.get(name));
			merge_partition(record, prior)
		})
		.collect()
}

/// Fills the storage fields `record` leaves unset from `existing`.
///
/// Nothing is inherited when `existing` has no storage, or when `record` points at a
/// different URI: a new URI marks a relocation and its formats are taken as given.
pub fn merge_partition(mut record: PartitionRecord, existing: Option<&PartitionRecord>) -> PartitionRecord {
	let Some(prior) = existing.and_then(|p| p.storage.as_ref()).filter(|s| !s.is_empty()) else {
		return record;
	};

	let storage = record.storage.get_or_insert_with(StorageDescriptor::default);
	if storage.uri.is_none() || storage.uri == prior.uri {
		inherit(storage, prior);
	}

	record
}

fn inherit(storage: &mut StorageDescriptor, prior: &StorageDescriptor) {
	if storage.uri.is_none() {
		storage.uri = prior.uri.clone();
	}
	if storage.input_format.is_none() {
		storage.input_format = prior.input_format.clone();
	}
	if storage.output_format.is_none() {
		storage.output_format = prior.output_format.clone();
	}
	if storage.serialization_lib.is_none() {
		storage.serialization_lib = prior.serialization_lib.clone();
	}
}
