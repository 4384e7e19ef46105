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

mod catalog;
mod error;
mod industry;
mod params;
mod results;
mod types;
mod validation;
mod vendor;

#[cfg(test)]
mod tests;

pub use catalog::VendorCatalog;
pub use error::DomainError;
pub use industry::{Industry, IndustryProfile, OrgSize, OrgSizeProfile};
pub use params::{CalculationParams, CostParameters};
pub use results::{
    CalculationResults, ComparisonResult, CostBreakdown, CumulativeCosts, ExecutiveSummary,
    VendorResult,
};
pub use types::{PricingModel, VendorId};
pub use validation::validate_vendor;
pub use vendor::Vendor;
