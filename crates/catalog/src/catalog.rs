// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use metaview_core::{
	StoreError,
	interface::{CatalogEnumerator, MetadataStore, PartitionStore, QualifiedName, TableEntry, TableStore},
};
use metaview_type::Result;

use crate::{NameCodec, NameEncoding, SupportedCatalogs, ViewCatalogConfig};

/// The collaborators a [`ViewCatalog`] delegates to.
#[derive(Clone)]
pub struct ViewStores {
	pub tables: Arc<dyn TableStore>,
	pub partitions: Arc<dyn PartitionStore>,
	pub enumerator: Arc<dyn CatalogEnumerator>,
	pub metadata: Arc<dyn MetadataStore>,
}

/// Manages views as tables in the reserved view database of their catalog.
///
/// Holds no per-view state; every call resolves names afresh and goes to the stores.
/// Concurrent `create` calls for one view rely on [`TableStore::copy_table`] being
/// idempotent or reporting a conflict.
#[derive(Clone)]
pub struct ViewCatalog {
	pub(crate) codec: NameCodec,
	pub(crate) support: SupportedCatalogs,
	pub(crate) tables: Arc<dyn TableStore>,
	pub(crate) partitions: Arc<dyn PartitionStore>,
	pub(crate) enumerator: Arc<dyn CatalogEnumerator>,
	pub(crate) metadata: Arc<dyn MetadataStore>,
}

impl ViewCatalog {
	pub fn builder(stores: ViewStores) -> ViewCatalogBuilder {
		ViewCatalogBuilder::new(stores)
	}

	pub fn supported_catalogs(&self) -> &SupportedCatalogs {
		&self.support
	}

	/// Looks up a table, treating a not-found failure of the store as absence.
	pub(crate) fn find_table(&self, name: &QualifiedName) -> Result<Option<TableEntry>> {
		match self.tables.get_table(name, false) {
			Ok(table) => Ok(table),
			Err(err) if StoreError::is_not_found(&err) => Ok(None),
			Err(err) => Err(err),
		}
	}
}

pub struct ViewCatalogBuilder {
	config: ViewCatalogConfig,
	stores: ViewStores,
}

impl ViewCatalogBuilder {
	pub fn new(stores: ViewStores) -> Self {
		Self {
			config: ViewCatalogConfig::default(),
			stores,
		}
	}

	/// Replace every setting with `config`.
	pub fn config(mut self, config: ViewCatalogConfig) -> Self {
		self.config = config;
		self
	}

	/// Set the database holding backing tables. Defaults to `franklinviews`.
	pub fn view_database(mut self, database: impl Into<String>) -> Self {
		self.config.view_database = database.into();
		self
	}

	/// Set the catalogs allowed to host views. Defaults to `hive`, `s3` and `aegisthus`.
	pub fn supported_catalogs<S: Into<String>>(mut self, catalogs: impl IntoIterator<Item = S>) -> Self {
		self.config.supported_catalogs = catalogs.into_iter().map(Into::into).collect();
		self
	}

	pub fn name_encoding(mut self, encoding: NameEncoding) -> Self {
		self.config.name_encoding = encoding;
		self
	}

	pub fn build(self) -> ViewCatalog {
		let ViewCatalogConfig {
			view_database,
			supported_catalogs,
			name_encoding,
		} = self.config;

		ViewCatalog {
			codec: NameCodec::new(view_database, name_encoding),
			support: SupportedCatalogs::new(supported_catalogs),
			tables: self.stores.tables,
			partitions: self.stores.partitions,
			enumerator: self.stores.enumerator,
			metadata: self.stores.metadata,
		}
	}
}
