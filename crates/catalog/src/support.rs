// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use metaview_core::interface::QualifiedName;
use metaview_type::{Result, return_err};

use crate::CatalogError;

/// The catalogs allowed to host views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedCatalogs {
	catalogs: BTreeSet<String>,
}

impl SupportedCatalogs {
	pub fn new<S: Into<String>>(catalogs: impl IntoIterator<Item = S>) -> Self {
		Self {
			catalogs: catalogs.into_iter().map(Into::into).collect(),
		}
	}

	pub fn contains(&self, catalog: &str) -> bool {
		self.catalogs.contains(catalog)
	}

	/// Fails unless `name` is a complete view identity in a supported catalog.
	pub fn check(&self, name: &QualifiedName) -> Result<()> {
		if !name.is_view_definition() {
			return_err!(CatalogError::InvalidIdentity {
				name: name.to_string(),
				reason: "name is not for a view".to_string(),
			});
		}

		if !self.contains(name.catalog()) {
			return_err!(CatalogError::UnsupportedCatalog {
				catalog: name.catalog().to_string(),
				supported: self.catalogs.iter().cloned().collect(),
			});
		}

		Ok(())
	}
}
