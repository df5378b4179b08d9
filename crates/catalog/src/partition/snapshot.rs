// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{PartitionListOptions, PartitionQuery, PartitionsSaveResult, QualifiedName};
use metaview_type::Result;
use tracing::{info, instrument};

use crate::ViewCatalog;

impl ViewCatalog {
	/// Copies the source table's partitions matching `filter` into the view.
	///
	/// The copy is saved without merging, with the existence check on and without
	/// altering partitions the view already has.
	#[instrument(name = "catalog::partition::snapshot", level = "debug", skip(self, name), fields(view = %name))]
	pub fn snapshot_partitions(&self, name: &QualifiedName, filter: Option<&str>) -> Result<PartitionsSaveResult> {
		// validates the view identity before the source is read
		self.codec.physical_name(name)?;
		let source = self.codec.source_table(name)?;

		let query = PartitionQuery {
			filter: filter.map(str::to_string),
			..PartitionQuery::default()
		};
		let options = PartitionListOptions {
			include_definition_metadata: false,
			include_data_metadata: false,
			include_details: true,
		};

		let partitions = self.partitions.list_partitions(&source, &query, options)?;
		if partitions.is_empty() {
			return Ok(PartitionsSaveResult::default());
		}

		info!("Snapshot partitions({}) for view {}", partitions.len(), name);
		self.save_partitions(name, partitions, &[], false, true, false)
	}
}
