// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CalculationError;
use nac_tco_domain::{CalculationParams, CostParameters, VendorId};
use std::collections::BTreeSet;

/// Longest projection horizon accepted, in years.
pub const MAX_YEARS_TO_PROJECT: u32 = 10;

/// Validates a calculation request before any vendor is resolved.
///
/// # Arguments
///
/// * `params` - The request to validate
///
/// # Errors
///
/// Returns `CalculationError::Validation` if:
/// - No vendor is selected, or a vendor is selected twice
/// - The device count is zero
/// - The projection horizon is zero or longer than `MAX_YEARS_TO_PROJECT`
/// - Any cost parameter is out of range or not finite
/// - The baseline vendor is not among the selected vendors
pub fn validate_params(params: &CalculationParams) -> Result<(), CalculationError> {
    if params.selected_vendors.is_empty() {
        return Err(CalculationError::validation(
            "selected_vendors",
            "at least one vendor must be selected",
        ));
    }

    let mut seen: BTreeSet<&VendorId> = BTreeSet::new();
    for vendor_id in &params.selected_vendors {
        if !seen.insert(vendor_id) {
            return Err(CalculationError::validation(
                "selected_vendors",
                &format!("vendor '{vendor_id}' is selected more than once"),
            ));
        }
    }

    validate_projection(
        params.device_count,
        params.years_to_project,
        &params.cost_parameters,
    )?;

    if let Some(baseline) = params
        .baseline_vendor
        .as_ref()
        .filter(|baseline| !params.selected_vendors.contains(baseline))
    {
        return Err(CalculationError::validation(
            "baseline_vendor",
            &format!("vendor '{baseline}' is not among the selected vendors"),
        ));
    }

    Ok(())
}

/// Validates the sizing and cost inputs shared by every projection.
///
/// # Errors
///
/// Returns `CalculationError::Validation` naming the first offending field.
pub fn validate_projection(
    device_count: u32,
    years_to_project: u32,
    cost_parameters: &CostParameters,
) -> Result<(), CalculationError> {
    if device_count == 0 {
        return Err(CalculationError::validation(
            "device_count",
            "must be greater than zero",
        ));
    }

    if years_to_project == 0 || years_to_project > MAX_YEARS_TO_PROJECT {
        return Err(CalculationError::validation(
            "years_to_project",
            &format!("must be between 1 and {MAX_YEARS_TO_PROJECT}, got {years_to_project}"),
        ));
    }

    validate_amount("fte_cost", cost_parameters.fte_cost)?;
    validate_percentage("fte_allocation", cost_parameters.fte_allocation)?;
    validate_percentage(
        "maintenance_percentage",
        cost_parameters.maintenance_percentage,
    )?;
    if let Some(discount) = cost_parameters.discount_percentage {
        validate_percentage("discount_percentage", discount)?;
    }
    validate_amount(
        "downtime_cost_per_hour",
        cost_parameters.downtime_cost_per_hour,
    )?;
    validate_percentage("risk_reduction", cost_parameters.risk_reduction)?;
    validate_percentage("insurance_reduction", cost_parameters.insurance_reduction)?;

    Ok(())
}

fn validate_amount(field: &str, value: f64) -> Result<(), CalculationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalculationError::validation(
            field,
            &format!("must be a finite, non-negative amount, got {value}"),
        ));
    }
    Ok(())
}

fn validate_percentage(field: &str, value: f64) -> Result<(), CalculationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CalculationError::validation(
            field,
            &format!("must be a percentage between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}
