// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::interface::{QualifiedName, TableEntry};
use metaview_type::{Result, return_err};
use tracing::instrument;

use crate::{CatalogError, ViewCatalog};

impl ViewCatalog {
	/// The view's backing table, named as stored.
	#[instrument(name = "catalog::view::get", level = "trace", skip(self, name), fields(view = %name))]
	pub fn get(&self, name: &QualifiedName) -> Result<TableEntry> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		match self.find_table(&physical)? {
			Some(table) => Ok(table),
			None => return_err!(CatalogError::ViewNotFound {
				name: name.to_string(),
			}),
		}
	}

	/// The view's backing table under the view's own name, carrying the definition
	/// metadata of the source table. `None` when the view does not exist.
	#[instrument(name = "catalog::view::get_opt", level = "trace", skip(self, name), fields(view = %name))]
	pub fn get_opt(&self, name: &QualifiedName) -> Result<Option<TableEntry>> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		let Some(mut table) = self.find_table(&physical)? else {
			return Ok(None);
		};

		table.name = name.clone();

		let source = self.codec.source_table(name)?;
		if let Some(metadata) = self.metadata.get_definition_metadata(&source)? {
			table.merge_definition_metadata(metadata);
		}

		Ok(Some(table))
	}

	#[instrument(name = "catalog::view::exists", level = "trace", skip(self, name), fields(view = %name))]
	pub fn exists(&self, name: &QualifiedName) -> Result<bool> {
		let physical = self.codec.physical_name(name)?.to_qualified();
		self.tables.table_exists(&physical)
	}
}
