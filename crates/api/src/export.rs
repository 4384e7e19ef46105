// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::request_response::SensitivityResponse;
use nac_tco_domain::{CalculationResults, VendorResult};
use serde::Serialize;

/// One CSV row per vendor.
#[derive(Debug, Serialize)]
struct VendorRow<'a> {
    vendor_id: &'a str,
    name: &'a str,
    pricing_model: &'a str,
    licenses: f64,
    maintenance: f64,
    implementation: f64,
    operations: f64,
    hardware: f64,
    infrastructure: f64,
    total_tco: f64,
    savings: f64,
    roi: Option<f64>,
    payback_period_months: Option<f64>,
    risk_reduction: f64,
    compliance_gaps: String,
}

impl<'a> From<&'a VendorResult> for VendorRow<'a> {
    fn from(result: &'a VendorResult) -> Self {
        Self {
            vendor_id: result.vendor_id.value(),
            name: &result.name,
            pricing_model: result.pricing_model.as_str(),
            licenses: result.cost_breakdown.licenses,
            maintenance: result.cost_breakdown.maintenance,
            implementation: result.cost_breakdown.implementation,
            operations: result.cost_breakdown.operations,
            hardware: result.cost_breakdown.hardware,
            infrastructure: result.cost_breakdown.infrastructure,
            total_tco: result.total_tco,
            savings: result.savings,
            roi: result.roi,
            payback_period_months: result.payback_period_months,
            risk_reduction: result.risk_reduction,
            compliance_gaps: result.compliance_gaps.join(";"),
        }
    }
}

/// Renders per-vendor results as CSV: a header row, then one row per vendor
/// in selection order. Missing ROI and payback figures are empty cells.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn export_csv(results: &CalculationResults) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for result in &results.vendor_results {
        writer
            .serialize(VendorRow::from(result))
            .map_err(|e| ApiError::internal(format!("Failed to write CSV row: {e}")))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ApiError::internal(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ApiError::internal(format!("CSV is not UTF-8: {e}")))
}

/// Renders a sensitivity sweep as CSV: a header naming the swept variable
/// and every vendor, then one row per point.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn export_sensitivity_csv(response: &SensitivityResponse) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = vec![response.variable.as_str()];
    if let Some(first) = response.points.first() {
        header.extend(first.vendor_totals.iter().map(|t| t.vendor_id.value()));
    }
    header.push("lowest_tco_vendor_id");
    writer
        .write_record(&header)
        .map_err(|e| ApiError::internal(format!("Failed to write CSV header: {e}")))?;

    for point in &response.points {
        let mut record: Vec<String> = vec![point.value.to_string()];
        record.extend(point.vendor_totals.iter().map(|t| t.total_tco.to_string()));
        record.push(point.lowest_tco_vendor_id.value().to_string());
        writer
            .write_record(&record)
            .map_err(|e| ApiError::internal(format!("Failed to write CSV row: {e}")))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ApiError::internal(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ApiError::internal(format!("CSV is not UTF-8: {e}")))
}
