// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
	Catalog,
	Database,
	Table,
	View,
	Partition,
}

/// Hierarchical catalog identity: `catalog[/database[/table[/view|/partition]]]`.
///
/// A name is immutable once built. The constructors do not reject empty components;
/// consumers that need a complete identity check it through the `is_*_definition`
/// predicates, which require every present component to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
	catalog: String,
	database: Option<String>,
	table: Option<String>,
	view: Option<String>,
	partition: Option<String>,
}

impl QualifiedName {
	pub fn of_catalog(catalog: impl Into<String>) -> Self {
		Self {
			catalog: catalog.into(),
			database: None,
			table: None,
			view: None,
			partition: None,
		}
	}

	pub fn of_database(catalog: impl Into<String>, database: impl Into<String>) -> Self {
		Self {
			database: Some(database.into()),
			..Self::of_catalog(catalog)
		}
	}

	pub fn of_table(catalog: impl Into<String>, database: impl Into<String>, table: impl Into<String>) -> Self {
		Self {
			table: Some(table.into()),
			..Self::of_database(catalog, database)
		}
	}

	pub fn of_view(
		catalog: impl Into<String>,
		database: impl Into<String>,
		table: impl Into<String>,
		view: impl Into<String>,
	) -> Self {
		Self {
			view: Some(view.into()),
			..Self::of_table(catalog, database, table)
		}
	}

	pub fn of_partition(
		catalog: impl Into<String>,
		database: impl Into<String>,
		table: impl Into<String>,
		partition: impl Into<String>,
	) -> Self {
		Self {
			partition: Some(partition.into()),
			..Self::of_table(catalog, database, table)
		}
	}

	pub fn catalog(&self) -> &str {
		&self.catalog
	}

	pub fn database(&self) -> Option<&str> {
		self.database.as_deref()
	}

	pub fn table(&self) -> Option<&str> {
		self.table.as_deref()
	}

	pub fn view(&self) -> Option<&str> {
		self.view.as_deref()
	}

	pub fn partition(&self) -> Option<&str> {
		self.partition.as_deref()
	}

	pub fn kind(&self) -> NameKind {
		if self.partition.is_some() {
			NameKind::Partition
		} else if self.view.is_some() {
			NameKind::View
		} else if self.table.is_some() {
			NameKind::Table
		} else if self.database.is_some() {
			NameKind::Database
		} else {
			NameKind::Catalog
		}
	}

	pub fn is_catalog_definition(&self) -> bool {
		self.kind() == NameKind::Catalog && !self.catalog.is_empty()
	}

	pub fn is_database_definition(&self) -> bool {
		self.kind() == NameKind::Database && self.components().all(|c| !c.is_empty())
	}

	pub fn is_table_definition(&self) -> bool {
		self.kind() == NameKind::Table && self.components().all(|c| !c.is_empty())
	}

	pub fn is_view_definition(&self) -> bool {
		self.kind() == NameKind::View && self.components().all(|c| !c.is_empty())
	}

	pub fn is_partition_definition(&self) -> bool {
		self.kind() == NameKind::Partition && self.components().all(|c| !c.is_empty())
	}

	/// The table that owns this name, for table, view and partition names.
	pub fn table_name(&self) -> Option<QualifiedName> {
		match (&self.database, &self.table) {
			(Some(database), Some(table)) => {
				Some(QualifiedName::of_table(self.catalog.as_str(), database.as_str(), table.as_str()))
			}
			_ => None,
		}
	}

	fn components(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.catalog.as_str())
			.chain(self.database.as_deref())
			.chain(self.table.as_deref())
			.chain(self.view.as_deref())
			.chain(self.partition.as_deref())
	}
}

impl Display for QualifiedName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut first = true;
		for component in self.components() {
			if !first {
				f.write_str("/")?;
			}
			f.write_str(component)?;
			first = false;
		}
		Ok(())
	}
}
