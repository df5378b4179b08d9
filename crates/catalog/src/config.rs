// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use metaview_type::Result;
use serde::{Deserialize, Serialize};

/// Database that holds the backing tables of all views of a catalog.
pub const DEFAULT_VIEW_DATABASE: &str = "franklinviews";

pub const DEFAULT_SUPPORTED_CATALOGS: [&str; 3] = ["hive", "s3", "aegisthus"];

/// How strictly view identities are checked before they are encoded into a table name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameEncoding {
	/// Database and table components must not contain the separator, so every backing
	/// table name decodes to exactly one view.
	#[default]
	Strict,
	/// Any non-empty component is accepted. Distinct views may share a backing table
	/// name, e.g. `a/b_c/d` and `a_b/c/d`.
	Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewCatalogConfig {
	pub view_database: String,
	pub supported_catalogs: BTreeSet<String>,
	pub name_encoding: NameEncoding,
}

impl Default for ViewCatalogConfig {
	fn default() -> Self {
		Self {
			view_database: DEFAULT_VIEW_DATABASE.to_string(),
			supported_catalogs: DEFAULT_SUPPORTED_CATALOGS.iter().map(|c| c.to_string()).collect(),
			name_encoding: NameEncoding::default(),
		}
	}
}

impl ViewCatalogConfig {
	/// Parses a JSON fragment; missing keys fall back to their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}
