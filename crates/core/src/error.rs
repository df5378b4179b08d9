// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_type::{
	Error,
	error::{Diagnostic, IntoDiagnostic},
};

pub const TABLE_NOT_FOUND: &str = "STORE_001";
pub const DATABASE_NOT_FOUND: &str = "STORE_002";
pub const CONFLICT: &str = "STORE_003";
pub const BACKEND: &str = "STORE_004";

/// Failures reported by the table, partition and enumeration stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
	#[error("table {name} not found")]
	TableNotFound {
		name: String,
	},

	#[error("database {name} not found")]
	DatabaseNotFound {
		name: String,
	},

	#[error("conflicting change to {name}: {reason}")]
	Conflict {
		name: String,
		reason: String,
	},

	#[error("store failure: {reason}")]
	Backend {
		reason: String,
	},
}

impl StoreError {
	/// Whether `err` reports a missing table or database.
	pub fn is_not_found(err: &Error) -> bool {
		matches!(err.code(), TABLE_NOT_FOUND | DATABASE_NOT_FOUND)
	}
}

impl IntoDiagnostic for StoreError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			StoreError::TableNotFound {
				name,
			} => Diagnostic {
				code: TABLE_NOT_FOUND.to_string(),
				message: format!("table {} not found", name),
				subject: Some(name),
				label: Some("unknown table".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			StoreError::DatabaseNotFound {
				name,
			} => Diagnostic {
				code: DATABASE_NOT_FOUND.to_string(),
				message: format!("database {} not found", name),
				subject: Some(name),
				label: Some("unknown database".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			StoreError::Conflict {
				name,
				reason,
			} => Diagnostic {
				code: CONFLICT.to_string(),
				message: format!("conflicting change to {}: {}", name, reason),
				subject: Some(name),
				label: None,
				help: Some("the change raced with another writer; re-read and retry".to_string()),
				notes: vec![],
				cause: None,
			},
			StoreError::Backend {
				reason,
			} => Diagnostic {
				code: BACKEND.to_string(),
				message: format!("store failure: {}", reason),
				subject: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_is_not_found() {
		let table: Error = StoreError::TableNotFound {
			name: "hive/franklinviews/sales_orders_v1".to_string(),
		}
		.into();
		let database: Error = StoreError::DatabaseNotFound {
			name: "hive/franklinviews".to_string(),
		}
		.into();
		let backend: Error = StoreError::Backend {
			reason: "connection reset".to_string(),
		}
		.into();

		assert!(StoreError::is_not_found(&table));
		assert!(StoreError::is_not_found(&database));
		assert!(!StoreError::is_not_found(&backend));
	}
}
