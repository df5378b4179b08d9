// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::QualifiedName;
use metaview_type::Result;
use tracing::instrument;

use crate::ViewCatalog;

impl ViewCatalog {
	#[instrument(name = "catalog::partition::delete", level = "debug", skip(self, name, partitions), fields(view = %name))]
	pub fn delete_partitions(&self, name: &QualifiedName, partitions: &[String]) -> Result<()> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.partitions.delete_partitions(&physical, partitions)
	}
}
