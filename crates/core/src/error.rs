// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during a calculation.
///
/// A calculation either succeeds completely or fails with one of these;
/// partial results are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A parameter is missing, malformed or out of range.
    #[error("Invalid parameter '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// A selected vendor id is not in the catalog.
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),
}

impl CalculationError {
    pub(crate) fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
