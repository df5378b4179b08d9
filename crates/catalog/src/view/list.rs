// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_core::{
	StoreError,
	interface::{QualifiedName, ViewListEntry},
};
use tracing::{debug, instrument, warn};

use crate::{NameCodec, ViewCatalog, codec::SEPARATOR};

impl ViewCatalog {
	/// Lists views within the scope of `name`.
	///
	/// * catalog: every backing table in the view database, named as stored
	/// * database: every view over any table of the database
	/// * table (or deeper): every view over that table
	///
	/// Names with an empty component list nothing. Never fails: a catalog whose view database cannot be enumerated has no views.
	#[instrument(name = "catalog::view::list", level = "debug", skip(self, name), fields(scope = %name))]
	pub fn list(&self, name: &QualifiedName) -> Vec<ViewListEntry> {
		let catalog = name.catalog();
		let tables = self.list_view_tables(catalog);

		if name.is_catalog_definition() {
			return tables
				.into_iter()
				.map(|table| ViewListEntry {
					name: QualifiedName::of_table(catalog, self.codec.view_database(), table),
				})
				.collect();
		}

		match (name.database(), name.table()) {
			(Some(database), None) if name.is_database_definition() => {
				Self::database_views(catalog, database, &tables)
			}
			(Some(database), Some(table)) => Self::table_views(catalog, database, table, &tables),
			_ => vec![],
		}
	}

	fn database_views(catalog: &str, database: &str, tables: &[String]) -> Vec<ViewListEntry> {
		let prefix = format!("{database}{SEPARATOR}");
		tables.iter()
			.filter_map(|physical| NameCodec::decode_prefix(physical, &prefix))
			.filter_map(|rest| rest.split_once(SEPARATOR))
			.filter(|(table, view)| !table.is_empty() && !view.is_empty())
			.map(|(table, view)| ViewListEntry {
				name: QualifiedName::of_view(catalog, database, table, view),
			})
			.collect()
	}

	fn table_views(catalog: &str, database: &str, table: &str, tables: &[String]) -> Vec<ViewListEntry> {
		let prefix = NameCodec::view_prefix(database, table);
		tables.iter()
			.filter_map(|physical| NameCodec::decode_prefix(physical, &prefix))
			.filter(|view| !view.is_empty())
			.map(|view| ViewListEntry {
				name: QualifiedName::of_view(catalog, database, table, view),
			})
			.collect()
	}

	fn list_view_tables(&self, catalog: &str) -> Vec<String> {
		let database = self.codec.view_database();
		match self.enumerator.list_tables(catalog, database) {
			Ok(tables) => tables,
			Err(err) if StoreError::is_not_found(&err) => {
				debug!("View database {}/{} does not exist", catalog, database);
				vec![]
			}
			Err(err) => {
				warn!("Listing views of {}/{} failed, treating as empty: {}", catalog, database, err);
				vec![]
			}
		}
	}
}
