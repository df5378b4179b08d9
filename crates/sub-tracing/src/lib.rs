// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Global `tracing` subscriber setup for services and tests embedding the view catalog.

pub use builder::{TracingBuilder, TracingConfigurator, TracingFormat};

mod builder;
