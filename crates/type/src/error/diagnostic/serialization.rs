// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic};

/// SERDE_001: JSON document could not be parsed or mapped onto the target type
pub fn json_error(err: serde_json::Error) -> Diagnostic {
	Diagnostic {
		code: "SERDE_001".to_string(),
		message: format!("json error: {}", err),
		subject: None,
		label: Some(format!("at line {}, column {}", err.line(), err.column())),
		help: Some("check the document against the expected structure".to_string()),
		notes: vec![],
		cause: None,
	}
}

impl IntoDiagnostic for serde_json::Error {
	fn into_diagnostic(self) -> Diagnostic {
		json_error(self)
	}
}
