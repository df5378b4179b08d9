// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use metaview_catalog::{ViewCatalog, ViewCatalogBuilder, ViewStores};
use metaview_core::interface::{FieldEntry, QualifiedName, StorageDescriptor, TableEntry};
use metaview_testing::{TestStores, init_tracing};

pub fn stores(stores: &TestStores) -> ViewStores {
	ViewStores {
		tables: stores.tables.clone(),
		partitions: stores.partitions.clone(),
		enumerator: stores.tables.clone(),
		metadata: stores.metadata.clone(),
	}
}

pub fn builder(test: &TestStores) -> ViewCatalogBuilder {
	init_tracing();
	ViewCatalog::builder(stores(test))
}

pub fn catalog(test: &TestStores) -> ViewCatalog {
	builder(test).build()
}

pub fn orders() -> TableEntry {
	TableEntry::new(QualifiedName::of_table("hive", "sales", "orders"))
		.with_field(FieldEntry::new("order_id", "bigint"))
		.with_field(FieldEntry::new("amount", "decimal(18,2)"))
		.with_field(FieldEntry::new("dateint", "int").partition_key())
		.with_storage(StorageDescriptor {
			uri: Some("s3://warehouse/sales/orders".to_string()),
			input_format: Some("org.apache.hadoop.hive.ql.io.orc.OrcInputFormat".to_string()),
			output_format: Some("org.apache.hadoop.hive.ql.io.orc.OrcOutputFormat".to_string()),
			serialization_lib: Some("org.apache.hadoop.hive.ql.io.orc.OrcSerde".to_string()),
		})
}

pub fn view(name: &str) -> QualifiedName {
	QualifiedName::of_view("hive", "sales", "orders", name)
}

pub fn backing(table: &str) -> QualifiedName {
	QualifiedName::of_table("hive", "franklinviews", table)
}
