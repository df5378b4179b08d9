// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{PartitionListOptions, PartitionQuery, PartitionRecord, QualifiedName};
use metaview_type::Result;
use tracing::instrument;

use crate::ViewCatalog;

impl ViewCatalog {
	#[instrument(name = "catalog::partition::list", level = "trace", skip(self, name, query), fields(view = %name))]
	pub fn list_partitions(
		&self,
		name: &QualifiedName,
		query: &PartitionQuery,
		options: PartitionListOptions,
	) -> Result<Vec<PartitionRecord>> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.partitions.list_partitions(&physical, query, options)
	}

	#[instrument(name = "catalog::partition::keys", level = "trace", skip(self, name, query), fields(view = %name))]
	pub fn partition_keys(&self, name: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.partitions.partition_keys(&physical, query)
	}

	#[instrument(name = "catalog::partition::uris", level = "trace", skip(self, name, query), fields(view = %name))]
	pub fn partition_uris(&self, name: &QualifiedName, query: &PartitionQuery) -> Result<Vec<String>> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.partitions.partition_uris(&physical, query)
	}

	#[instrument(name = "catalog::partition::count", level = "trace", skip(self, name), fields(view = %name))]
	pub fn partition_count(&self, name: &QualifiedName) -> Result<u64> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.partitions.partition_count(&physical)
	}
}
