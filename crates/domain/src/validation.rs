// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::vendor::Vendor;

/// Highest score a capability may carry.
const MAX_FEATURE_SCORE: u8 = 10;

/// Validates that a vendor record's field constraints are met.
///
/// This function checks each field in isolation.
/// It does NOT check for id uniqueness (that requires the whole catalog).
///
/// # Arguments
///
/// * `vendor` - The vendor to validate
///
/// # Errors
///
/// Returns an error if:
/// - The id or name is empty
/// - Any currency amount is negative or not finite
/// - Any percentage lies outside 0-100
/// - Any feature score exceeds 10
pub fn validate_vendor(vendor: &Vendor) -> Result<(), DomainError> {
    let vendor_id: &str = vendor.id.value();

    if vendor_id.trim().is_empty() {
        return Err(invalid(vendor_id, "id", "must not be empty"));
    }

    if vendor.name.trim().is_empty() {
        return Err(invalid(vendor_id, "name", "must not be empty"));
    }

    validate_amount(vendor_id, "base_cost", vendor.base_cost)?;
    validate_amount(vendor_id, "per_user_cost", vendor.per_user_cost)?;
    validate_amount(vendor_id, "setup_cost", vendor.setup_cost)?;
    validate_amount(vendor_id, "hardware_cost", vendor.hardware_cost)?;
    validate_amount(vendor_id, "infrastructure_cost", vendor.infrastructure_cost)?;
    validate_percentage(vendor_id, "annual_discount", vendor.annual_discount)?;
    validate_percentage(
        vendor_id,
        "breach_risk_reduction",
        vendor.breach_risk_reduction,
    )?;

    for (capability, score) in &vendor.feature_scores {
        if *score > MAX_FEATURE_SCORE {
            return Err(invalid(
                vendor_id,
                &format!("feature_scores.{capability}"),
                &format!("must be between 0 and {MAX_FEATURE_SCORE}, got {score}"),
            ));
        }
    }

    for (framework, coverage) in &vendor.compliance_scores {
        validate_percentage(
            vendor_id,
            &format!("compliance_scores.{framework}"),
            *coverage,
        )?;
    }

    Ok(())
}

/// Rejects negative or non-finite currency amounts.
fn validate_amount(vendor_id: &str, field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            vendor_id,
            field,
            &format!("must be a finite, non-negative amount, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects percentages outside 0-100.
fn validate_percentage(vendor_id: &str, field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(invalid(
            vendor_id,
            field,
            &format!("must be a percentage between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

fn invalid(vendor_id: &str, field: &str, reason: &str) -> DomainError {
    DomainError::InvalidVendor {
        vendor_id: vendor_id.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
