// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod comparison;
mod engine;
mod error;
mod narrative;
mod recommend;
mod sensitivity;
mod summary;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use engine::{COMPLIANCE_GAP_THRESHOLD, calculate_tco};
pub use error::CalculationError;
pub use narrative::generate_summary;
pub use recommend::{MAX_RECOMMENDATIONS, Priority, VendorScore, recommend_vendors};
pub use sensitivity::{
    MAX_SENSITIVITY_STEPS, SensitivityPoint, SensitivityVariable, VendorTotal, sensitivity_analysis,
};
pub use validation::{MAX_YEARS_TO_PROJECT, validate_params, validate_projection};
