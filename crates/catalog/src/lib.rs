// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Materialized views stored as tables inside a reserved database of their catalog.
//!
//! A view `catalog/database/table/view` is backed by the table
//! `catalog/<view database>/<database>_<table>_<view>`, created from the schema of
//! `catalog/database/table`. [`ViewCatalog`] translates every operation on the view into an
//! operation on that backing table and keeps the view's partitions in step with it.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::{ViewCatalog, ViewCatalogBuilder, ViewStores};
pub use codec::{NameCodec, PhysicalName};
pub use config::{NameEncoding, ViewCatalogConfig};
pub use error::CatalogError;
pub use merge::{merge_partition, merge_partitions};
pub use metaview_type::{Error, Result};
pub use support::SupportedCatalogs;

mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod merge;
mod partition;
pub mod support;
mod view;
