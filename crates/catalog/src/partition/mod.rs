// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod delete;
mod list;
mod save;
mod snapshot;
