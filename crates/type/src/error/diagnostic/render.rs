// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_one(output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

		if let Some(subject) = &d.subject {
			let _ = writeln!(output, "{indent}  --> {}", subject);
		}

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent}   = {}", label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "{indent}help: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "{indent}note: {}", note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "{indent}caused by:");
			Self::render_one(output, cause, depth + 1);
		}
	}
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render_one(&mut output, d, 0);
		output
	}
}
