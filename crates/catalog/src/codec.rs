// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use metaview_core::interface::QualifiedName;
use metaview_type::{Result, return_err};
use tracing::warn;

use crate::{CatalogError, NameEncoding};

pub const SEPARATOR: char = '_';

/// The table backing a view: `catalog/<view database>/<database>_<table>_<view>`.
///
/// Only [`NameCodec`] builds these, so a physical name always corresponds to a valid
/// view identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalName {
	catalog: String,
	database: String,
	table: String,
}

impl PhysicalName {
	pub fn catalog(&self) -> &str {
		&self.catalog
	}

	pub fn database(&self) -> &str {
		&self.database
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn to_qualified(&self) -> QualifiedName {
		QualifiedName::of_table(self.catalog.as_str(), self.database.as_str(), self.table.as_str())
	}

	/// Names partition `partition` of the backing table.
	pub fn partition(&self, partition: &str) -> QualifiedName {
		QualifiedName::of_partition(self.catalog.as_str(), self.database.as_str(), self.table.as_str(), partition)
	}
}

impl Display for PhysicalName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}/{}", self.catalog, self.database, self.table)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCodec {
	view_database: String,
	encoding: NameEncoding,
}

impl NameCodec {
	pub fn new(view_database: impl Into<String>, encoding: NameEncoding) -> Self {
		Self {
			view_database: view_database.into(),
			encoding,
		}
	}

	pub fn view_database(&self) -> &str {
		&self.view_database
	}

	/// Encodes a view identity as `"{database}_{table}_{view}"`.
	pub fn encode(&self, name: &QualifiedName) -> Result<String> {
		let (database, table, view) = match (name.database(), name.table(), name.view()) {
			(Some(database), Some(table), Some(view))
				if !database.is_empty() && !table.is_empty() && !view.is_empty() =>
			{
				(database, table, view)
			}
			_ => return_err!(invalid(name, "database, table and view must all be present and non-empty")),
		};

		let ambiguous = database.contains(SEPARATOR) || table.contains(SEPARATOR);
		if ambiguous {
			match self.encoding {
				NameEncoding::Strict => {
					return_err!(invalid(
						name,
						format!("database and table names must not contain '{}'", SEPARATOR)
					))
				}
				NameEncoding::Permissive => {
					warn!("View {} encodes to a table name other views may share", name);
				}
			}
		}

		Ok(format!("{database}{SEPARATOR}{table}{SEPARATOR}{view}"))
	}

	pub fn physical_name(&self, name: &QualifiedName) -> Result<PhysicalName> {
		Ok(PhysicalName {
			catalog: name.catalog().to_string(),
			database: self.view_database.clone(),
			table: self.encode(name)?,
		})
	}

	/// The table a view is defined over.
	pub fn source_table(&self, name: &QualifiedName) -> Result<QualifiedName> {
		match name.table_name().filter(QualifiedName::is_table_definition) {
			Some(table) => Ok(table),
			None => return_err!(invalid(name, "database and table must be present")),
		}
	}

	/// Prefix shared by the backing tables of every view over `database.table`.
	pub fn view_prefix(database: &str, table: &str) -> String {
		format!("{database}{SEPARATOR}{table}{SEPARATOR}")
	}

	/// Strips `prefix` from a backing table name. Names without the prefix yield `None`.
	pub fn decode_prefix<'a>(physical_table: &'a str, prefix: &str) -> Option<&'a str> {
		physical_table.strip_prefix(prefix)
	}
}

fn invalid(name: &QualifiedName, reason: impl Into<String>) -> CatalogError {
	CatalogError::InvalidIdentity {
		name: name.to_string(),
		reason: reason.into(),
	}
}
