// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{QualifiedName, TableEntry};
use metaview_type::Result;
use tracing::{info, instrument};

use crate::ViewCatalog;

impl ViewCatalog {
	pub fn delete(&self, name: &QualifiedName) -> Result<()> {
		self.delete_and_return(name).map(|_| ())
	}

	/// Drops the view's backing table and returns it as it was before the drop.
	#[instrument(name = "catalog::view::delete", level = "debug", skip(self, name), fields(view = %name))]
	pub fn delete_and_return(&self, name: &QualifiedName) -> Result<TableEntry> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		info!("Deleting view {}", physical);
		self.tables.delete_table(&physical, true)
	}
}
