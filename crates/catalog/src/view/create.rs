// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{QualifiedName, TableEntry};
use metaview_type::{Result, return_err};
use tracing::{debug, info, instrument};

use crate::{CatalogError, ViewCatalog};

impl ViewCatalog {
	/// Creates the view's backing table from the schema of the table it is defined over.
	///
	/// Returns the existing backing table unchanged when there already is one.
	#[instrument(name = "catalog::view::create", level = "debug", skip(self, name), fields(view = %name))]
	pub fn create(&self, name: &QualifiedName) -> Result<TableEntry> {
		self.support.check(name)?;
		let physical = self.codec.physical_name(name)?.to_qualified();
		let source_name = self.codec.source_table(name)?;

		debug!("Get the table {}", source_name);
		let Some(source) = self.find_table(&source_name)? else {
			return_err!(CatalogError::SourceTableNotFound {
				name: source_name.to_string(),
			});
		};

		debug!("Check if the view table {} exists", physical);
		if let Some(existing) = self.find_table(&physical)? {
			return Ok(existing);
		}

		info!("Creating view {}", physical);
		self.tables.copy_table(&source, &physical)
	}

	/// Same as [`ViewCatalog::create`]. The supplied entry is ignored: a view always
	/// takes the current schema of its source table.
	pub fn create_from(&self, name: &QualifiedName, _entry: TableEntry) -> Result<TableEntry> {
		self.create(name)
	}
}
