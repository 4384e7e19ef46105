// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use nac_tco::{SensitivityPoint, SensitivityVariable, VendorScore};
use nac_tco_domain::{CalculationResults, CostParameters, ExecutiveSummary, Vendor};
use std::collections::BTreeMap;

/// Optional overrides for the organization cost parameters.
///
/// Any field left out keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CostParametersInput {
    pub fte_cost: Option<f64>,
    pub fte_allocation: Option<f64>,
    pub maintenance_percentage: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub downtime_cost_per_hour: Option<f64>,
    pub risk_reduction: Option<f64>,
    pub insurance_reduction: Option<f64>,
}

impl CostParametersInput {
    /// Applies the overrides on top of the defaults.
    #[must_use]
    pub fn resolve(&self) -> CostParameters {
        let defaults: CostParameters = CostParameters::default();
        CostParameters {
            fte_cost: self.fte_cost.unwrap_or(defaults.fte_cost),
            fte_allocation: self.fte_allocation.unwrap_or(defaults.fte_allocation),
            maintenance_percentage: self
                .maintenance_percentage
                .unwrap_or(defaults.maintenance_percentage),
            discount_percentage: self.discount_percentage.or(defaults.discount_percentage),
            downtime_cost_per_hour: self
                .downtime_cost_per_hour
                .unwrap_or(defaults.downtime_cost_per_hour),
            risk_reduction: self.risk_reduction.unwrap_or(defaults.risk_reduction),
            insurance_reduction: self
                .insurance_reduction
                .unwrap_or(defaults.insurance_reduction),
        }
    }
}

/// API request to run a TCO calculation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalculateRequest {
    /// Vendor ids to evaluate, in display order.
    pub selected_vendors: Vec<String>,
    /// Number of managed devices.
    pub device_count: u32,
    /// Projection horizon in years.
    pub years_to_project: u32,
    /// Industry key (e.g. "healthcare").
    pub industry: String,
    /// Organization size key. Derived from `device_count` when omitted.
    #[serde(default)]
    pub org_size: Option<String>,
    /// Cost parameter overrides.
    #[serde(default)]
    pub cost_parameters: CostParametersInput,
    /// Vendor to compare against instead of the automatic choice.
    #[serde(default)]
    pub baseline_vendor: Option<String>,
}

/// API response for a calculation.
pub type CalculateResponse = CalculationResults;

/// Public view of one catalog vendor.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VendorInfo {
    pub id: String,
    pub name: String,
    pub pricing_model: String,
    pub cloud_delivered: bool,
    pub base_cost: f64,
    pub per_user_cost: f64,
    pub setup_cost: f64,
    pub annual_discount: f64,
    pub hardware_cost: f64,
    pub infrastructure_cost: f64,
    pub breach_risk_reduction: f64,
    pub feature_scores: BTreeMap<String, u8>,
    pub compliance_scores: BTreeMap<String, f64>,
}

impl From<&Vendor> for VendorInfo {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.value().to_string(),
            name: vendor.name.clone(),
            pricing_model: vendor.pricing_model.as_str().to_string(),
            cloud_delivered: vendor.pricing_model.is_cloud_delivered(),
            base_cost: vendor.base_cost,
            per_user_cost: vendor.per_user_cost,
            setup_cost: vendor.setup_cost,
            annual_discount: vendor.annual_discount,
            hardware_cost: vendor.effective_hardware_cost(),
            infrastructure_cost: vendor.effective_infrastructure_cost(),
            breach_risk_reduction: vendor.breach_risk_reduction,
            feature_scores: vendor.feature_scores.clone(),
            compliance_scores: vendor.compliance_scores.clone(),
        }
    }
}

/// API response listing the catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListVendorsResponse {
    /// Every vendor, in ascending id order.
    pub vendors: Vec<VendorInfo>,
}

/// API response carrying the narrative summary of a calculation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryResponse {
    /// Plain-text narrative.
    pub summary: String,
    /// The figures the narrative was rendered from.
    pub executive_summary: ExecutiveSummary,
}

/// API request for vendor recommendations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecommendRequest {
    /// Number of managed devices.
    pub device_count: u32,
    /// Projection horizon in years.
    pub years_to_project: u32,
    /// Industry key.
    pub industry: String,
    /// Cost parameter overrides.
    #[serde(default)]
    pub cost_parameters: CostParametersInput,
    /// Priority keys ("cost", "security", "compliance", "features"). Empty means all.
    #[serde(default)]
    pub priorities: Vec<String>,
}

/// API response for vendor recommendations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecommendResponse {
    /// Best vendors first.
    pub recommendations: Vec<VendorScore>,
}

/// API request for a one-variable sensitivity sweep.
///
/// The calculation fields sit at the top level next to the sweep fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SensitivityRequest {
    /// The calculation every point starts from.
    #[serde(flatten)]
    pub calculation: CalculateRequest,
    /// Variable key (e.g. "device_count", "license_cost_multiplier").
    pub variable: String,
    /// First swept value.
    pub min: f64,
    /// Last swept value.
    pub max: f64,
    /// Number of points, both ends included.
    pub steps: u32,
}

/// API response for a sensitivity sweep.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SensitivityResponse {
    /// The swept variable.
    pub variable: SensitivityVariable,
    /// One point per step, in ascending value order.
    pub points: Vec<SensitivityPoint>,
}
