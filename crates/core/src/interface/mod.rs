// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod catalog;
pub mod store;

pub use catalog::{
	Document, FieldEntry, NameKind, Pageable, PartitionListOptions, PartitionQuery, PartitionRecord,
	PartitionsSaveResult, QualifiedName, Sort, SortOrder, StorageDescriptor, TableEntry, ViewListEntry,
};
pub use store::{CatalogEnumerator, MetadataStore, PartitionStore, TableStore};
