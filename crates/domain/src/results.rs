// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calculation output types.
//!
//! Every type here is plain serializable data. Results are produced fresh on
//! each calculation and never mutated afterwards.

use crate::industry::{Industry, OrgSize};
use crate::types::{PricingModel, VendorId};
use serde::{Deserialize, Serialize};

/// Cost components of one vendor over the whole projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Recurring license or subscription fees.
    pub licenses: f64,
    /// Recurring maintenance, charged as a share of licenses.
    pub maintenance: f64,
    /// One-time implementation.
    pub implementation: f64,
    /// Staff time spent operating the product.
    pub operations: f64,
    /// One-time appliances.
    pub hardware: f64,
    /// One-time servers, storage and network.
    pub infrastructure: f64,
}

impl CostBreakdown {
    /// Sums the components in a fixed order.
    ///
    /// `VendorResult::total_tco` is always produced by this method, so the
    /// breakdown and the total cannot drift apart.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.licenses
            + self.maintenance
            + self.implementation
            + self.operations
            + self.hardware
            + self.infrastructure
    }

    /// One-time components charged before the first year.
    #[must_use]
    pub fn one_time(&self) -> f64 {
        self.implementation + self.hardware + self.infrastructure
    }
}

/// Running total of one vendor's spend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CumulativeCosts {
    /// Spend before the first year (one-time components).
    pub initial: f64,
    /// Running total at the end of each projected year; `by_year[0]` is year 1.
    pub by_year: Vec<f64>,
}

impl CumulativeCosts {
    /// Returns the running total at the end of `year` (1-based); year 0 is `initial`.
    #[must_use]
    pub fn at_year(&self, year: usize) -> Option<f64> {
        if year == 0 {
            return Some(self.initial);
        }
        self.by_year.get(year - 1).copied()
    }
}

/// Calculation output for one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorResult {
    /// The vendor's identifier.
    pub vendor_id: VendorId,
    /// The vendor's display name.
    pub name: String,
    /// The vendor's pricing model.
    pub pricing_model: PricingModel,
    /// Sum of `cost_breakdown` over the projection horizon.
    pub total_tco: f64,
    /// Cost components.
    pub cost_breakdown: CostBreakdown,
    /// Year-indexed running total.
    pub cumulative_costs: CumulativeCosts,
    /// ROI anchor total minus this vendor's total.
    pub savings: f64,
    /// Savings as a percentage of this vendor's total. `None` when either is zero.
    pub roi: Option<f64>,
    /// Months until savings repay implementation. `None` when there are no savings.
    pub payback_period_months: Option<f64>,
    /// Percentage of breach risk the vendor mitigates.
    pub risk_reduction: f64,
    /// Frameworks the industry requires that the vendor does not adequately cover.
    pub compliance_gaps: Vec<String>,
}

/// One non-baseline vendor compared against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The compared vendor.
    pub vendor_id: VendorId,
    /// The baseline vendor.
    pub baseline_vendor_id: VendorId,
    /// Baseline total minus this vendor's total.
    pub savings: f64,
    /// Savings as a percentage of the baseline total. `None` when the baseline total is zero.
    pub savings_percentage: Option<f64>,
}

/// Cross-vendor aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    /// Vendor every comparison is made against.
    pub baseline_vendor_id: VendorId,
    /// Vendor every ROI figure is measured against.
    pub roi_anchor_vendor_id: VendorId,
    /// Vendor with the lowest total.
    pub lowest_tco_vendor_id: VendorId,
    /// Vendor with the highest ROI, if any vendor has one.
    pub best_roi_vendor_id: Option<VendorId>,
    /// Sum of comparison savings.
    pub total_savings: f64,
    /// Mean vendor risk reduction.
    pub avg_risk_reduction: f64,
    /// Sum of vendor compliance gaps.
    pub total_compliance_gaps: usize,
    /// Expected annual breach loss without NAC.
    pub annual_risk_exposure: f64,
    /// Share of the exposure the organization expects to avoid.
    pub annual_risk_avoided: f64,
    /// Expected annual reduction in cyber-insurance premiums.
    pub annual_insurance_savings: f64,
    /// Expected annual downtime cost avoided.
    pub annual_downtime_avoided: f64,
}

/// Full output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Number of managed devices the figures are for.
    pub device_count: u32,
    /// Projection horizon in years.
    pub years_to_project: u32,
    /// Industry the figures are for.
    pub industry: Industry,
    /// Organization size the figures are for.
    pub org_size: OrgSize,
    /// One result per selected vendor, in selection order.
    pub vendor_results: Vec<VendorResult>,
    /// One result per non-baseline vendor, in selection order.
    pub comparison_results: Vec<ComparisonResult>,
    /// Cross-vendor aggregates.
    pub executive_summary: ExecutiveSummary,
}

impl CalculationResults {
    /// Looks up one vendor's result.
    #[must_use]
    pub fn vendor_result(&self, vendor_id: &VendorId) -> Option<&VendorResult> {
        self.vendor_results
            .iter()
            .find(|result| &result.vendor_id == vendor_id)
    }

    /// Looks up one vendor's comparison against the baseline.
    #[must_use]
    pub fn comparison(&self, vendor_id: &VendorId) -> Option<&ComparisonResult> {
        self.comparison_results
            .iter()
            .find(|result| &result.vendor_id == vendor_id)
    }
}
