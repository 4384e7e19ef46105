// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-variable sensitivity sweeps.
//!
//! A sweep re-runs `calculate_tco` at evenly spaced values of one input and
//! records every selected vendor's total at each value. Cost multipliers
//! scale the selected vendors' catalog figures; every other variable replaces
//! the matching request field.

use crate::engine::calculate_tco;
use crate::error::CalculationError;
use crate::validation::validate_params;
use nac_tco_domain::{CalculationParams, CalculationResults, Vendor, VendorCatalog, VendorId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest number of points a single sweep may request.
pub const MAX_SENSITIVITY_STEPS: u32 = 50;

/// The input a sensitivity sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityVariable {
    /// Number of managed devices; values are rounded to whole devices.
    DeviceCount,
    /// Projection horizon; values are rounded to whole years.
    YearsToProject,
    /// Fully loaded annual FTE cost.
    FteCost,
    /// Annual maintenance as a share of licenses.
    MaintenancePercentage,
    /// Factor applied to each vendor's base and per-device costs.
    LicenseCostMultiplier,
    /// Factor applied to each vendor's hardware and infrastructure costs.
    HardwareCostMultiplier,
}

impl SensitivityVariable {
    /// All variables, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::DeviceCount,
        Self::YearsToProject,
        Self::FteCost,
        Self::MaintenancePercentage,
        Self::LicenseCostMultiplier,
        Self::HardwareCostMultiplier,
    ];

    /// Converts this variable to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeviceCount => "device_count",
            Self::YearsToProject => "years_to_project",
            Self::FteCost => "fte_cost",
            Self::MaintenancePercentage => "maintenance_percentage",
            Self::LicenseCostMultiplier => "license_cost_multiplier",
            Self::HardwareCostMultiplier => "hardware_cost_multiplier",
        }
    }
}

impl FromStr for SensitivityVariable {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variable| variable.as_str() == s)
            .ok_or_else(|| {
                CalculationError::validation("variable", &format!("unknown variable '{s}'"))
            })
    }
}

impl std::fmt::Display for SensitivityVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One vendor's total at one sweep point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorTotal {
    pub vendor_id: VendorId,
    pub total_tco: f64,
}

/// Totals of every selected vendor at one value of the swept variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// The value the calculation ran with.
    pub value: f64,
    /// One total per selected vendor, in selection order.
    pub vendor_totals: Vec<VendorTotal>,
    /// The cheapest vendor at this value.
    pub lowest_tco_vendor_id: VendorId,
}

/// Sweeps `variable` from `min` to `max` in `steps` evenly spaced points.
///
/// Both ends are included. Every other input comes from `params`.
///
/// # Arguments
///
/// * `catalog` - The vendor catalog
/// * `params` - The calculation request the sweep starts from
/// * `variable` - The input to vary
/// * `min` - First value
/// * `max` - Last value
/// * `steps` - Number of points, at least 2
///
/// # Errors
///
/// Returns an error if:
/// - `steps` is outside `2..=MAX_SENSITIVITY_STEPS`
/// - `min` or `max` is negative or not finite, or `min > max`
/// - `params`, or `params` with a swept value applied, fails validation
/// - A selected vendor is not in the catalog
pub fn sensitivity_analysis(
    catalog: &VendorCatalog,
    params: &CalculationParams,
    variable: SensitivityVariable,
    min: f64,
    max: f64,
    steps: u32,
) -> Result<Vec<SensitivityPoint>, CalculationError> {
    validate_sweep(min, max, steps)?;
    validate_params(params)?;

    (0..steps)
        .map(|step| {
            let value: f64 = sweep_value(min, max, steps, step);
            run_point(catalog, params, variable, value)
        })
        .collect()
}

fn validate_sweep(min: f64, max: f64, steps: u32) -> Result<(), CalculationError> {
    if !(2..=MAX_SENSITIVITY_STEPS).contains(&steps) {
        return Err(CalculationError::validation(
            "steps",
            &format!("must be between 2 and {MAX_SENSITIVITY_STEPS}, got {steps}"),
        ));
    }
    for (field, value) in [("min", min), ("max", max)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CalculationError::validation(
                field,
                &format!("must be a finite, non-negative value, got {value}"),
            ));
        }
    }
    if min > max {
        return Err(CalculationError::validation(
            "min",
            &format!("must not exceed max ({min} > {max})"),
        ));
    }
    Ok(())
}

fn sweep_value(min: f64, max: f64, steps: u32, step: u32) -> f64 {
    if step + 1 == steps {
        return max;
    }
    (max - min).mul_add(f64::from(step) / f64::from(steps - 1), min)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    value.round() as u32
}

fn run_point(
    catalog: &VendorCatalog,
    params: &CalculationParams,
    variable: SensitivityVariable,
    value: f64,
) -> Result<SensitivityPoint, CalculationError> {
    let mut swept: CalculationParams = params.clone();
    let mut applied: f64 = value;

    let results: CalculationResults = match variable {
        SensitivityVariable::DeviceCount => {
            swept.device_count = to_count(value);
            applied = f64::from(swept.device_count);
            calculate_tco(catalog, &swept)?
        }
        SensitivityVariable::YearsToProject => {
            swept.years_to_project = to_count(value);
            applied = f64::from(swept.years_to_project);
            calculate_tco(catalog, &swept)?
        }
        SensitivityVariable::FteCost => {
            swept.cost_parameters.fte_cost = value;
            calculate_tco(catalog, &swept)?
        }
        SensitivityVariable::MaintenancePercentage => {
            swept.cost_parameters.maintenance_percentage = value;
            calculate_tco(catalog, &swept)?
        }
        SensitivityVariable::LicenseCostMultiplier => {
            let scaled: VendorCatalog = scaled_catalog(catalog, params, |vendor| {
                vendor.base_cost *= value;
                vendor.per_user_cost *= value;
            })?;
            calculate_tco(&scaled, &swept)?
        }
        SensitivityVariable::HardwareCostMultiplier => {
            let scaled: VendorCatalog = scaled_catalog(catalog, params, |vendor| {
                vendor.hardware_cost *= value;
                vendor.infrastructure_cost *= value;
            })?;
            calculate_tco(&scaled, &swept)?
        }
    };

    Ok(SensitivityPoint {
        value: applied,
        vendor_totals: results
            .vendor_results
            .iter()
            .map(|result| VendorTotal {
                vendor_id: result.vendor_id.clone(),
                total_tco: result.total_tco,
            })
            .collect(),
        lowest_tco_vendor_id: results.executive_summary.lowest_tco_vendor_id,
    })
}

/// Builds a catalog holding only the selected vendors, each adjusted by `scale`.
fn scaled_catalog(
    catalog: &VendorCatalog,
    params: &CalculationParams,
    scale: impl Fn(&mut Vendor),
) -> Result<VendorCatalog, CalculationError> {
    let vendors: Vec<Vendor> = params
        .selected_vendors
        .iter()
        .map(|vendor_id| {
            let mut vendor: Vendor = catalog
                .get_vendor(vendor_id)
                .ok_or_else(|| CalculationError::UnknownVendor(vendor_id.value().to_string()))?
                .clone();
            scale(&mut vendor);
            Ok(vendor)
        })
        .collect::<Result<_, CalculationError>>()?;

    VendorCatalog::new(vendors).map_err(|e| CalculationError::validation("variable", &e.to_string()))
}
