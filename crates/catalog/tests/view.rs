// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use common::{backing, catalog, orders, view};
use metaview_catalog::error::{INVALID_IDENTITY, SOURCE_TABLE_NOT_FOUND, UNSUPPORTED_CATALOG, VIEW_NOT_FOUND};
use metaview_core::{
	StoreError,
	error::{BACKEND, CONFLICT, TABLE_NOT_FOUND},
	interface::{FieldEntry, QualifiedName, TableEntry},
};
use metaview_testing::TestStores;
use serde_json::json;

#[test]
fn test_create_copies_source_schema() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);

	let created = catalog.create(&view("v1")).unwrap();

	assert_eq!(created.name, backing("sales_orders_v1"));
	assert_eq!(created.fields, orders().fields);
	assert_eq!(stores.tables.table(&backing("sales_orders_v1")), Some(created));
	assert_eq!(stores.tables.copy_count(), 1);
}

#[test]
fn test_create_twice_copies_once() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);

	let first = catalog.create(&view("v1")).unwrap();
	let second = catalog.create(&view("v1")).unwrap();

	assert_eq!(first, second);
	assert_eq!(stores.tables.copy_count(), 1);
}

#[test]
fn test_create_keeps_existing_backing_table() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let existing = TableEntry::new(backing("sales_orders_v1")).with_field(FieldEntry::new("legacy", "string"));
	stores.tables.insert(existing.clone());
	let catalog = catalog(&stores);

	assert_eq!(catalog.create(&view("v1")).unwrap(), existing);
	assert_eq!(stores.tables.copy_count(), 0);
}

#[test]
fn test_create_from_ignores_supplied_schema() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);

	let supplied = TableEntry::new(view("v1")).with_field(FieldEntry::new("ignored", "string"));
	let created = catalog.create_from(&view("v1"), supplied).unwrap();

	assert_eq!(created.fields, orders().fields);
}

#[test]
fn test_create_without_source_table() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	let err = catalog.create(&view("v1")).unwrap_err();

	assert_eq!(err.code(), SOURCE_TABLE_NOT_FOUND);
	assert_eq!(err.subject.as_deref(), Some("hive/sales/orders"));
	assert_eq!(stores.tables.copy_count(), 0);
}

#[test]
fn test_create_in_unsupported_catalog_touches_no_store() {
	let stores = TestStores::new();
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("mysql", "sales", "orders")));
	let catalog = catalog(&stores);
	let calls = stores.tables.call_count();

	let err = catalog.create(&QualifiedName::of_view("mysql", "sales", "orders", "v1")).unwrap_err();

	assert_eq!(err.code(), UNSUPPORTED_CATALOG);
	assert_eq!(stores.tables.call_count(), calls);
	assert_eq!(stores.partitions.call_count(), 0);
}

#[test]
fn test_create_with_configured_catalogs() {
	let stores = TestStores::new();
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("mysql", "sales", "orders")));
	let catalog = common::builder(&stores).supported_catalogs(["mysql"]).build();

	let created = catalog.create(&QualifiedName::of_view("mysql", "sales", "orders", "v1")).unwrap();
	assert_eq!(created.name, QualifiedName::of_table("mysql", "franklinviews", "sales_orders_v1"));

	let err = catalog.create(&view("v1")).unwrap_err();
	assert_eq!(err.code(), UNSUPPORTED_CATALOG);
}

#[test]
fn test_create_in_custom_view_database() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = common::builder(&stores).view_database("views").build();

	let created = catalog.create(&view("v1")).unwrap();
	assert_eq!(created.name, QualifiedName::of_table("hive", "views", "sales_orders_v1"));
}

#[test]
fn test_create_rejects_table_names() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);

	let err = catalog.create(&QualifiedName::of_table("hive", "sales", "orders")).unwrap_err();
	assert_eq!(err.code(), INVALID_IDENTITY);
}

#[test]
fn test_get() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();

	let table = catalog.get(&view("v1")).unwrap();
	assert_eq!(table.name, backing("sales_orders_v1"));
}

#[test]
fn test_get_missing_view() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	let err = catalog.get(&view("v1")).unwrap_err();
	assert_eq!(err.code(), VIEW_NOT_FOUND);
	assert_eq!(err.subject.as_deref(), Some("hive/sales/orders/v1"));
}

#[test]
fn test_get_opt_renames_and_inherits_source_metadata() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	stores.metadata.set_definition_metadata(
		QualifiedName::of_table("hive", "sales", "orders"),
		json!({"owner": "sales-eng", "lifetime": {"days": 90}}),
	);
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();
	catalog.save_metadata(&view("v1"), Some(json!({"description": "daily orders"})), None).unwrap();

	let table = catalog.get_opt(&view("v1")).unwrap().unwrap();

	assert_eq!(table.name, view("v1"));
	assert_eq!(
		table.definition_metadata,
		Some(json!({"description": "daily orders", "owner": "sales-eng", "lifetime": {"days": 90}}))
	);
}

#[test]
fn test_get_opt_missing_view() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	assert_eq!(catalog.get_opt(&view("v1")).unwrap(), None);
}

#[test]
fn test_exists() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);

	assert!(!catalog.exists(&view("v1")).unwrap());
	catalog.create(&view("v1")).unwrap();
	assert!(catalog.exists(&view("v1")).unwrap());
}

#[test]
fn test_update() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();

	let updated = TableEntry::new(view("v1")).with_field(FieldEntry::new("order_id", "bigint"));
	catalog.update(&view("v1"), updated).unwrap();

	let stored = stores.tables.table(&backing("sales_orders_v1")).unwrap();
	assert_eq!(stored.name, backing("sales_orders_v1"));
	assert_eq!(stored.fields, vec![FieldEntry::new("order_id", "bigint")]);
}

#[test]
fn test_update_missing_view_propagates_store_error() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	let err = catalog.update(&view("v1"), TableEntry::new(view("v1"))).unwrap_err();
	assert_eq!(err.code(), TABLE_NOT_FOUND);
}

#[test]
fn test_delete_and_return() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	let created = catalog.create(&view("v1")).unwrap();

	assert_eq!(catalog.delete_and_return(&view("v1")).unwrap(), created);
	assert!(!catalog.exists(&view("v1")).unwrap());

	let err = catalog.delete(&view("v1")).unwrap_err();
	assert!(StoreError::is_not_found(&err));
}

#[test]
fn test_rename() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();

	catalog.rename(&view("v1"), &view("v2")).unwrap();

	assert!(stores.tables.table(&backing("sales_orders_v1")).is_none());
	assert_eq!(catalog.get(&view("v2")).unwrap().name, backing("sales_orders_v2"));
}

#[test]
fn test_rename_onto_existing_view() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();
	catalog.create(&view("v2")).unwrap();

	let err = catalog.rename(&view("v1"), &view("v2")).unwrap_err();
	assert_eq!(err.code(), CONFLICT);
}

#[test]
fn test_rename_validates_both_names() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	let err = catalog.rename(&view("v1"), &QualifiedName::of_table("hive", "sales", "orders")).unwrap_err();
	assert_eq!(err.code(), INVALID_IDENTITY);
	assert_eq!(stores.tables.call_count(), 0);
}

#[test]
fn test_save_metadata() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();

	catalog.save_metadata(&view("v1"), Some(json!({"owner": "a"})), Some(json!({"rows": 10}))).unwrap();

	let stored = stores.tables.table(&backing("sales_orders_v1")).unwrap();
	assert_eq!(stored.definition_metadata, Some(json!({"owner": "a"})));
	assert_eq!(stored.data_metadata, Some(json!({"rows": 10})));
}

#[test]
fn test_builder_from_config() {
	let stores = TestStores::new();
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("prodhive", "sales", "orders")));
	let config = metaview_catalog::ViewCatalogConfig::from_json(
		r#"{"view_database": "views", "supported_catalogs": ["prodhive"], "name_encoding": "permissive"}"#,
	)
	.unwrap();
	let catalog = common::builder(&stores).config(config).build();

	let name = QualifiedName::of_view("prodhive", "sales", "orders", "v1");
	let created = catalog.create(&name).unwrap();
	assert_eq!(created.name, QualifiedName::of_table("prodhive", "views", "sales_orders_v1"));
	assert!(catalog.supported_catalogs().contains("prodhive"));
	assert!(!catalog.supported_catalogs().contains("hive"));
}

#[test]
fn test_create_when_store_reports_missing_tables_as_errors() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	stores.tables.report_missing_as_error();
	let catalog = catalog(&stores);

	let created = catalog.create(&view("v1")).unwrap();
	assert_eq!(created.name, backing("sales_orders_v1"));
	assert_eq!(stores.tables.copy_count(), 1);

	let err = catalog.create(&QualifiedName::of_view("hive", "sales", "returns", "v1")).unwrap_err();
	assert_eq!(err.code(), SOURCE_TABLE_NOT_FOUND);
}

#[test]
fn test_get_when_store_reports_missing_tables_as_errors() {
	let stores = TestStores::new();
	stores.tables.report_missing_as_error();
	let catalog = catalog(&stores);

	let err = catalog.get(&view("v1")).unwrap_err();
	assert_eq!(err.code(), VIEW_NOT_FOUND);
	assert_eq!(catalog.get_opt(&view("v1")).unwrap(), None);
}

#[test]
fn test_create_propagates_store_failure() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	stores.tables.fail_next_get(StoreError::Backend {
		reason: "metastore unavailable".to_string(),
	});
	let catalog = catalog(&stores);

	let err = catalog.create(&view("v1")).unwrap_err();
	assert_eq!(err.code(), BACKEND);
	assert_eq!(stores.tables.copy_count(), 0);
}

#[test]
fn test_get_propagates_store_failure() {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	let catalog = catalog(&stores);
	catalog.create(&view("v1")).unwrap();

	stores.tables.fail_next_get(StoreError::Backend {
		reason: "metastore unavailable".to_string(),
	});
	assert_eq!(catalog.get(&view("v1")).unwrap_err().code(), BACKEND);

	stores.tables.fail_next_get(StoreError::Backend {
		reason: "metastore unavailable".to_string(),
	});
	assert_eq!(catalog.get_opt(&view("v1")).unwrap_err().code(), BACKEND);
}
