// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod delete;
mod get;
mod list;
mod rename;
mod update;
