// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::lowest_index;
use nac_tco_domain::{
    CalculationParams, ComparisonResult, ExecutiveSummary, IndustryProfile, OrgSizeProfile,
    VendorId, VendorResult,
};

/// Annual cyber-insurance premium assumed per managed device.
const INSURANCE_PREMIUM_PER_DEVICE: f64 = 25.0;

/// Baseline hours of network downtime per year before the industry multiplier.
const DOWNTIME_HOURS_PER_YEAR: f64 = 8.0;

pub(crate) fn build_executive_summary(
    params: &CalculationParams,
    vendor_results: &[VendorResult],
    comparison_results: &[ComparisonResult],
    baseline_index: usize,
    anchor_index: usize,
) -> ExecutiveSummary {
    let industry: IndustryProfile = params.industry.profile();
    let org_size: OrgSizeProfile = params.org_size.profile();
    let cost_parameters = &params.cost_parameters;

    let totals: Vec<f64> = vendor_results.iter().map(|r| r.total_tco).collect();
    let total_savings: f64 = comparison_results.iter().map(|c| c.savings).sum();

    #[allow(clippy::cast_precision_loss)]
    let vendor_count: f64 = vendor_results.len() as f64;
    let avg_risk_reduction: f64 = if vendor_results.is_empty() {
        0.0
    } else {
        vendor_results.iter().map(|r| r.risk_reduction).sum::<f64>() / vendor_count
    };

    let total_compliance_gaps: usize = vendor_results
        .iter()
        .map(|r| r.compliance_gaps.len())
        .sum();

    let annual_risk_exposure: f64 =
        industry.average_breach_cost * org_size.annual_breach_probability * industry.risk_multiplier;
    let annual_risk_avoided: f64 = annual_risk_exposure * cost_parameters.risk_reduction / 100.0;
    let annual_insurance_savings: f64 = f64::from(params.device_count)
        * INSURANCE_PREMIUM_PER_DEVICE
        * cost_parameters.insurance_reduction
        / 100.0;
    let annual_downtime_avoided: f64 = cost_parameters.downtime_cost_per_hour
        * DOWNTIME_HOURS_PER_YEAR
        * industry.downtime_multiplier
        * cost_parameters.risk_reduction
        / 100.0;

    ExecutiveSummary {
        baseline_vendor_id: vendor_results[baseline_index].vendor_id.clone(),
        roi_anchor_vendor_id: vendor_results[anchor_index].vendor_id.clone(),
        lowest_tco_vendor_id: vendor_results[lowest_index(&totals)].vendor_id.clone(),
        best_roi_vendor_id: best_roi_vendor(vendor_results),
        total_savings,
        avg_risk_reduction,
        total_compliance_gaps,
        annual_risk_exposure,
        annual_risk_avoided,
        annual_insurance_savings,
        annual_downtime_avoided,
    }
}

/// The vendor with the highest ROI; the first one wins ties.
fn best_roi_vendor(vendor_results: &[VendorResult]) -> Option<VendorId> {
    let mut best: Option<(&VendorId, f64)> = None;
    for result in vendor_results {
        if let Some(roi) = result.roi {
            match best {
                Some((_, best_roi)) if roi <= best_roi => {}
                _ => best = Some((&result.vendor_id, roi)),
            }
        }
    }
    best.map(|(vendor_id, _)| vendor_id.clone())
}
