// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The TCO calculation engine.
//!
//! `calculate_tco` is a pure function: it reads the catalog and the request,
//! and returns freshly built results. It performs no I/O and keeps no state
//! between calls, so identical inputs always produce identical outputs.

use crate::comparison::compare_with_baseline;
use crate::error::CalculationError;
use crate::summary::build_executive_summary;
use crate::validation::validate_params;
use nac_tco_domain::{
    CalculationParams, CalculationResults, CostBreakdown, CostParameters, CumulativeCosts,
    Vendor, VendorCatalog, VendorId, VendorResult,
};

/// Coverage percentage below which a required framework counts as a gap.
pub const COMPLIANCE_GAP_THRESHOLD: f64 = 80.0;

/// Computes per-vendor costs, comparisons and an executive summary.
///
/// # Arguments
///
/// * `catalog` - The vendor catalog to resolve selected ids against
/// * `params` - The calculation request
///
/// # Returns
///
/// * `Ok(CalculationResults)` with one vendor result per selected vendor, in
///   selection order
///
/// # Errors
///
/// Returns an error if:
/// - The request fails validation (`CalculationError::Validation`)
/// - A selected vendor is not in the catalog (`CalculationError::UnknownVendor`),
///   reported for the first missing id in selection order
pub fn calculate_tco(
    catalog: &VendorCatalog,
    params: &CalculationParams,
) -> Result<CalculationResults, CalculationError> {
    validate_params(params)?;
    let vendors: Vec<&Vendor> = resolve_vendors(catalog, &params.selected_vendors)?;

    let projections: Vec<(CostBreakdown, CumulativeCosts)> = vendors
        .iter()
        .map(|vendor| {
            project_costs(
                vendor,
                params.device_count,
                params.years_to_project,
                &params.cost_parameters,
            )
        })
        .collect();
    let totals: Vec<f64> = projections
        .iter()
        .map(|(breakdown, _)| breakdown.total())
        .collect();

    let (anchor_index, baseline_index): (usize, usize) = match &params.baseline_vendor {
        Some(baseline) => {
            let index: usize = selection_index(&params.selected_vendors, baseline)?;
            (index, index)
        }
        None => (highest_index(&totals), lowest_index(&totals)),
    };
    let anchor_total: f64 = totals[anchor_index];

    let required_frameworks: &[&str] = params.industry.profile().required_frameworks;
    let vendor_results: Vec<VendorResult> = vendors
        .iter()
        .zip(projections)
        .map(|(vendor, (cost_breakdown, cumulative_costs))| {
            let total_tco: f64 = cost_breakdown.total();
            let savings: f64 = anchor_total - total_tco;
            let (roi, payback_period_months) = roi_metrics(
                savings,
                total_tco,
                cost_breakdown.implementation,
                params.years_to_project,
            );

            VendorResult {
                vendor_id: vendor.id.clone(),
                name: vendor.name.clone(),
                pricing_model: vendor.pricing_model,
                total_tco,
                cost_breakdown,
                cumulative_costs,
                savings,
                roi,
                payback_period_months,
                risk_reduction: vendor.breach_risk_reduction,
                compliance_gaps: compliance_gaps(vendor, required_frameworks),
            }
        })
        .collect();

    let comparison_results = compare_with_baseline(&vendor_results, baseline_index);
    let executive_summary = build_executive_summary(
        params,
        &vendor_results,
        &comparison_results,
        baseline_index,
        anchor_index,
    );

    Ok(CalculationResults {
        device_count: params.device_count,
        years_to_project: params.years_to_project,
        industry: params.industry,
        org_size: params.org_size,
        vendor_results,
        comparison_results,
        executive_summary,
    })
}

/// Resolves every selected id before anything is computed.
fn resolve_vendors<'a>(
    catalog: &'a VendorCatalog,
    selected: &[VendorId],
) -> Result<Vec<&'a Vendor>, CalculationError> {
    selected
        .iter()
        .map(|vendor_id| {
            catalog
                .get_vendor(vendor_id)
                .ok_or_else(|| CalculationError::UnknownVendor(vendor_id.value().to_string()))
        })
        .collect()
}

fn selection_index(selected: &[VendorId], vendor_id: &VendorId) -> Result<usize, CalculationError> {
    selected
        .iter()
        .position(|candidate| candidate == vendor_id)
        .ok_or_else(|| {
            CalculationError::validation(
                "baseline_vendor",
                &format!("vendor '{vendor_id}' is not among the selected vendors"),
            )
        })
}

/// Projects one vendor's costs over the horizon.
///
/// Components are accumulated one year at a time, and every cumulative entry
/// is the running breakdown's `total()`, so the final entry is exactly the
/// vendor's total.
pub(crate) fn project_costs(
    vendor: &Vendor,
    device_count: u32,
    years_to_project: u32,
    cost_parameters: &CostParameters,
) -> (CostBreakdown, CumulativeCosts) {
    let discount: f64 = cost_parameters
        .discount_percentage
        .unwrap_or(vendor.annual_discount);
    let recurring: f64 = vendor.per_user_cost.mul_add(f64::from(device_count), vendor.base_cost)
        * (1.0 - discount / 100.0);
    let maintenance: f64 = recurring * cost_parameters.maintenance_percentage / 100.0;
    let operations: f64 = cost_parameters.fte_cost * cost_parameters.fte_allocation / 100.0;

    let mut breakdown: CostBreakdown = CostBreakdown {
        implementation: vendor.setup_cost,
        hardware: vendor.effective_hardware_cost(),
        infrastructure: vendor.effective_infrastructure_cost(),
        ..CostBreakdown::default()
    };
    let initial: f64 = breakdown.one_time();
    let mut by_year: Vec<f64> = Vec::with_capacity(years_to_project as usize);

    for _ in 0..years_to_project {
        breakdown.licenses += recurring;
        breakdown.maintenance += maintenance;
        breakdown.operations += operations;
        by_year.push(breakdown.total());
    }

    (breakdown, CumulativeCosts { initial, by_year })
}

/// Returns `(roi, payback_period_months)` for one vendor.
fn roi_metrics(
    savings: f64,
    total_tco: f64,
    implementation: f64,
    years_to_project: u32,
) -> (Option<f64>, Option<f64>) {
    let roi: Option<f64> = if total_tco == 0.0 || savings == 0.0 {
        None
    } else {
        Some(savings / total_tco * 100.0)
    };

    let payback: Option<f64> = if savings > 0.0 {
        let monthly_savings: f64 = savings / (f64::from(years_to_project) * 12.0);
        Some(implementation / monthly_savings)
    } else {
        None
    };

    (roi, payback)
}

/// Required frameworks, in industry order, that the vendor covers below the threshold.
fn compliance_gaps(vendor: &Vendor, required_frameworks: &[&str]) -> Vec<String> {
    required_frameworks
        .iter()
        .filter(|framework| vendor.compliance_coverage(framework) < COMPLIANCE_GAP_THRESHOLD)
        .map(|framework| (*framework).to_string())
        .collect()
}

/// Index of the lowest total; the first one wins ties.
pub(crate) fn lowest_index(totals: &[f64]) -> usize {
    extreme_index(totals, |candidate, best| candidate < best)
}

/// Index of the highest total; the first one wins ties.
pub(crate) fn highest_index(totals: &[f64]) -> usize {
    extreme_index(totals, |candidate, best| candidate > best)
}

fn extreme_index(totals: &[f64], replaces: impl Fn(f64, f64) -> bool) -> usize {
    let mut best: usize = 0;
    for (index, total) in totals.iter().enumerate().skip(1) {
        if replaces(*total, totals[best]) {
            best = index;
        }
    }
    best
}
