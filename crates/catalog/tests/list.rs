// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use common::{backing, catalog, orders, view};
use metaview_catalog::NameEncoding;
use metaview_core::{
	StoreError,
	interface::{QualifiedName, TableEntry},
};
use metaview_testing::TestStores;

fn setup() -> TestStores {
	let stores = TestStores::new();
	stores.tables.insert(orders());
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("hive", "sales", "returns")));
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("hive", "finance", "ledger")));

	let catalog = catalog(&stores);
	for name in [
		view("v1"),
		view("v2"),
		QualifiedName::of_view("hive", "sales", "returns", "daily"),
		QualifiedName::of_view("hive", "finance", "ledger", "v1"),
	] {
		catalog.create(&name).unwrap();
	}
	stores
}

fn names(entries: Vec<metaview_core::interface::ViewListEntry>) -> Vec<QualifiedName> {
	entries.into_iter().map(|e| e.name).collect()
}

#[test]
fn test_list_table_scope() {
	let stores = setup();
	let catalog = catalog(&stores);

	let listed = names(catalog.list(&QualifiedName::of_table("hive", "sales", "orders")));
	assert_eq!(listed, vec![view("v1"), view("v2")]);
}

#[test]
fn test_list_view_scope_lists_siblings() {
	let stores = setup();
	let catalog = catalog(&stores);

	let listed = names(catalog.list(&view("v1")));
	assert_eq!(listed, vec![view("v1"), view("v2")]);
}

#[test]
fn test_list_database_scope() {
	let stores = setup();
	let catalog = catalog(&stores);

	let listed = names(catalog.list(&QualifiedName::of_database("hive", "sales")));
	assert_eq!(listed, vec![
		view("v1"),
		view("v2"),
		QualifiedName::of_view("hive", "sales", "returns", "daily"),
	]);
}

#[test]
fn test_list_catalog_scope_returns_backing_tables() {
	let stores = setup();
	let catalog = catalog(&stores);

	let listed = names(catalog.list(&QualifiedName::of_catalog("hive")));
	assert_eq!(listed, vec![
		backing("finance_ledger_v1"),
		backing("sales_orders_v1"),
		backing("sales_orders_v2"),
		backing("sales_returns_daily"),
	]);
}

#[test]
fn test_list_without_view_database() {
	let stores = TestStores::new();
	let catalog = catalog(&stores);

	assert!(catalog.list(&QualifiedName::of_catalog("hive")).is_empty());
	assert!(catalog.list(&QualifiedName::of_table("hive", "sales", "orders")).is_empty());
}

#[test]
fn test_list_suppresses_store_failure() {
	let stores = setup();
	let catalog = catalog(&stores);
	stores.tables.fail_next_list(StoreError::Backend {
		reason: "metastore unavailable".to_string(),
	});

	assert!(catalog.list(&QualifiedName::of_table("hive", "sales", "orders")).is_empty());
	assert_eq!(catalog.list(&QualifiedName::of_table("hive", "sales", "orders")).len(), 2);
}

#[test]
fn test_list_other_catalog() {
	let stores = setup();
	let catalog = catalog(&stores);

	assert!(catalog.list(&QualifiedName::of_catalog("s3")).is_empty());
}

#[test]
fn test_list_incomplete_names() {
	let stores = setup();
	let catalog = catalog(&stores);

	assert!(catalog.list(&QualifiedName::of_database("hive", "")).is_empty());
	assert!(catalog.list(&QualifiedName::of_catalog("")).is_empty());
}

#[test]
fn test_list_permissive_encoding_misattributes_shared_names() {
	let stores = TestStores::new();
	stores.tables.insert(TableEntry::new(QualifiedName::of_table("hive", "a_b", "c")));
	let catalog = common::builder(&stores).name_encoding(NameEncoding::Permissive).build();

	let created = catalog.create(&QualifiedName::of_view("hive", "a_b", "c", "d")).unwrap();
	assert_eq!(created.name, backing("a_b_c_d"));

	assert_eq!(names(catalog.list(&QualifiedName::of_table("hive", "a_b", "c"))), vec![
		QualifiedName::of_view("hive", "a_b", "c", "d")
	]);
	// the same backing table also decodes as a view over a/b_c
	assert_eq!(names(catalog.list(&QualifiedName::of_table("hive", "a", "b_c"))), vec![
		QualifiedName::of_view("hive", "a", "b_c", "d")
	]);
	assert_eq!(names(catalog.list(&QualifiedName::of_database("hive", "a"))), vec![
		QualifiedName::of_view("hive", "a", "b", "c_d")
	]);
}
