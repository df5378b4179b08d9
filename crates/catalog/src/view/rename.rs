// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::QualifiedName;
use metaview_type::Result;
use tracing::{info, instrument};

use crate::ViewCatalog;

impl ViewCatalog {
	#[instrument(
		name = "catalog::view::rename",
		level = "debug",
		skip(self, name, new_name),
		fields(view = %name, to = %new_name)
	)]
	pub fn rename(&self, name: &QualifiedName, new_name: &QualifiedName) -> Result<()> {
		let old = self.codec.physical_name(name)?.to_qualified();
		let new = self.codec.physical_name(new_name)?.to_qualified();
		info!("Renaming view {} to {}", old, new);
		self.tables.rename_table(&old, &new, true)
	}
}
