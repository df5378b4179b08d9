// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_type::error::{Diagnostic, IntoDiagnostic};

pub const INVALID_IDENTITY: &str = "VIEW_001";
pub const UNSUPPORTED_CATALOG: &str = "VIEW_002";
pub const SOURCE_TABLE_NOT_FOUND: &str = "VIEW_003";
pub const VIEW_NOT_FOUND: &str = "VIEW_004";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("{name} is not a valid view identity: {reason}")]
	InvalidIdentity {
		name: String,
		reason: String,
	},

	#[error("catalog {catalog} does not support views")]
	UnsupportedCatalog {
		catalog: String,
		supported: Vec<String>,
	},

	#[error("source table {name} not found")]
	SourceTableNotFound {
		name: String,
	},

	#[error("view {name} not found")]
	ViewNotFound {
		name: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::InvalidIdentity {
				name,
				reason,
			} => Diagnostic {
				code: INVALID_IDENTITY.to_string(),
				message: format!("{} is not a valid view identity: {}", name, reason),
				subject: Some(name),
				label: Some("invalid view identity".to_string()),
				help: Some("a view is named catalog/database/table/view with every component non-empty"
					.to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::UnsupportedCatalog {
				catalog,
				supported,
			} => Diagnostic {
				code: UNSUPPORTED_CATALOG.to_string(),
				message: format!("catalog {} does not support views", catalog),
				subject: Some(catalog),
				label: Some("views are not enabled for this catalog".to_string()),
				help: Some(format!("views can be created in: {}", supported.join(", "))),
				notes: vec![],
				cause: None,
			},
			CatalogError::SourceTableNotFound {
				name,
			} => Diagnostic {
				code: SOURCE_TABLE_NOT_FOUND.to_string(),
				message: format!("source table {} not found", name),
				subject: Some(name),
				label: Some("a view needs an existing table to copy its schema from".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			CatalogError::ViewNotFound {
				name,
			} => Diagnostic {
				code: VIEW_NOT_FOUND.to_string(),
				message: format!("view {} not found", name),
				subject: Some(name),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}
