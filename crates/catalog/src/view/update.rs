// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{Document, QualifiedName, TableEntry};
use metaview_type::Result;
use tracing::{info, instrument};

use crate::ViewCatalog;

impl ViewCatalog {
	#[instrument(name = "catalog::view::update", level = "debug", skip(self, name, table), fields(view = %name))]
	pub fn update(&self, name: &QualifiedName, table: TableEntry) -> Result<()> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		info!("Updating view {}", physical);
		self.tables.update_table(&physical, table)
	}

	#[instrument(
		name = "catalog::view::save_metadata",
		level = "debug",
		skip(self, name, definition, data),
		fields(view = %name)
	)]
	pub fn save_metadata(
		&self,
		name: &QualifiedName,
		definition: Option<Document>,
		data: Option<Document>,
	) -> Result<()> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.tables.save_table_metadata(&physical, definition, data)
	}
}
