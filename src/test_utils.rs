// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

pub use approx::assert_abs_diff_eq;
