// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use name::{NameKind, QualifiedName};
pub use partition::{
	Pageable, PartitionListOptions, PartitionQuery, PartitionRecord, PartitionsSaveResult, Sort, SortOrder,
	StorageDescriptor,
};
pub use table::{FieldEntry, TableEntry, ViewListEntry};

mod name;
mod partition;
mod table;

/// Free-form user metadata attached to tables, views and partitions.
pub type Document = serde_json::Value;
