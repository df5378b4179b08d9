// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory collaborators for exercising the view catalog without a real backend.

use std::sync::{Arc, Once};

pub use metadata::MemoryMetadataStore;
use metaview_sub_tracing::TracingBuilder;
pub use partition::{MemoryPartitionStore, SaveCall};
pub use table::MemoryTableStore;

mod metadata;
mod partition;
mod table;

/// One of each in-memory store. The table store doubles as the catalog enumerator.
#[derive(Clone, Default)]
pub struct TestStores {
	pub tables: Arc<MemoryTableStore>,
	pub partitions: Arc<MemoryPartitionStore>,
	pub metadata: Arc<MemoryMetadataStore>,
}

impl TestStores {
	pub fn new() -> Self {
		Self::default()
	}
}

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per process. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
	TRACING.call_once(|| {
		let _ = TracingBuilder::new().filter("debug").test_writer().try_init();
	});
}
