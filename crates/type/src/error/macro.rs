// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Builds an [`Error`](crate::error::Error) from anything implementing
/// [`IntoDiagnostic`](crate::error::IntoDiagnostic).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($crate::error::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}
