// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metaview_type::{Diagnostic, Result, error};
use tracing_subscriber::{EnvFilter, fmt};

/// Configuration function applied to a default [`TracingBuilder`]
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	format: TracingFormat,
	with_target: bool,
	test_writer: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			format: TracingFormat::default(),
			with_target: true,
			test_writer: false,
		}
	}

	/// Apply a configurator, e.g. one handed over by an embedding service.
	pub fn configure(self, configurator: TracingConfigurator) -> Self {
		configurator(self)
	}

	/// Set the filter directives used when `RUST_LOG` is not set. Defaults to `info`.
	pub fn filter(mut self, directives: impl Into<String>) -> Self {
		self.filter = directives.into();
		self
	}

	pub fn format(mut self, format: TracingFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	/// Write through the test harness so output is captured per test.
	pub fn test_writer(mut self) -> Self {
		self.test_writer = true;
		self
	}

	pub fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
	}

	/// Install the subscriber globally. Fails when a global subscriber is already set.
	pub fn try_init(self) -> Result<()> {
		let builder = fmt().with_env_filter(self.env_filter()).with_target(self.with_target);

		let result = match (self.format, self.test_writer) {
			(TracingFormat::Pretty, false) => builder.pretty().try_init(),
			(TracingFormat::Pretty, true) => builder.pretty().with_test_writer().try_init(),
			(TracingFormat::Compact, false) => builder.compact().try_init(),
			(TracingFormat::Compact, true) => builder.compact().with_test_writer().try_init(),
			(TracingFormat::Json, false) => builder.json().try_init(),
			(TracingFormat::Json, true) => builder.json().with_test_writer().try_init(),
		};

		result.map_err(|err| error!(init_failed(err.to_string())))
	}
}

/// TRACING_001: the global subscriber could not be installed
fn init_failed(reason: String) -> Diagnostic {
	Diagnostic {
		code: "TRACING_001".to_string(),
		message: format!("failed to install tracing subscriber: {}", reason),
		subject: None,
		label: None,
		help: Some("install the subscriber once per process".to_string()),
		notes: vec![],
		cause: None,
	}
}
