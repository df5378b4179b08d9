// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::StoreError;
pub use metaview_type::{Error, Result};

pub mod error;
pub mod interface;
