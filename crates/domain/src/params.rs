// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::industry::{Industry, OrgSize};
use crate::types::VendorId;
use serde::{Deserialize, Serialize};

/// Organization-specific cost overrides.
///
/// All percentages are expressed as 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Fully loaded annual cost of one full-time employee.
    pub fte_cost: f64,
    /// Share of one FTE spent operating the NAC product.
    pub fte_allocation: f64,
    /// Annual maintenance as a share of license cost.
    pub maintenance_percentage: f64,
    /// Negotiated discount. When set it replaces every vendor's own discount.
    pub discount_percentage: Option<f64>,
    /// Cost of one hour of network downtime.
    pub downtime_cost_per_hour: f64,
    /// Expected reduction in breach risk.
    pub risk_reduction: f64,
    /// Expected reduction in cyber-insurance premiums.
    pub insurance_reduction: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            fte_cost: 100_000.0,
            fte_allocation: 25.0,
            maintenance_percentage: 18.0,
            discount_percentage: None,
            downtime_cost_per_hour: 5_000.0,
            risk_reduction: 35.0,
            insurance_reduction: 10.0,
        }
    }
}

/// One calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Vendors to evaluate, in display order.
    pub selected_vendors: Vec<VendorId>,
    /// Number of managed devices.
    pub device_count: u32,
    /// Projection horizon in years.
    pub years_to_project: u32,
    /// Industry lookup key.
    pub industry: Industry,
    /// Organization size lookup key.
    pub org_size: OrgSize,
    /// Organization-specific overrides.
    pub cost_parameters: CostParameters,
    /// Vendor to compare every other vendor against.
    /// `None` selects the lowest-cost vendor for comparisons and the most
    /// expensive vendor as the ROI anchor.
    pub baseline_vendor: Option<VendorId>,
}

impl CalculationParams {
    /// Creates params with default cost parameters and no explicit baseline.
    ///
    /// # Arguments
    ///
    /// * `selected_vendors` - Vendors to evaluate
    /// * `device_count` - Number of managed devices
    /// * `years_to_project` - Projection horizon in years
    /// * `industry` - Industry lookup key
    /// * `org_size` - Organization size lookup key
    #[must_use]
    pub fn new(
        selected_vendors: Vec<VendorId>,
        device_count: u32,
        years_to_project: u32,
        industry: Industry,
        org_size: OrgSize,
    ) -> Self {
        Self {
            selected_vendors,
            device_count,
            years_to_project,
            industry,
            org_size,
            cost_parameters: CostParameters::default(),
            baseline_vendor: None,
        }
    }

    /// Returns a copy with the given cost parameters.
    #[must_use]
    pub fn with_cost_parameters(mut self, cost_parameters: CostParameters) -> Self {
        self.cost_parameters = cost_parameters;
        self
    }

    /// Returns a copy with an explicit baseline vendor.
    #[must_use]
    pub fn with_baseline(mut self, baseline: VendorId) -> Self {
        self.baseline_vendor = Some(baseline);
        self
    }
}
