// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a [`Diagnostic`](crate::Diagnostic) into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Returns early with an [`Error`](crate::Error) built from anything implementing
/// [`IntoDiagnostic`](crate::error::IntoDiagnostic).
#[macro_export]
macro_rules! return_err {
	($err:expr) => {
		return Err($crate::Error($crate::error::IntoDiagnostic::into_diagnostic($err)))
	};
}
