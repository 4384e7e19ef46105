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
    clippy::all
)]

mod cache;
mod error;
mod export;
mod request_response;

#[cfg(test)]
mod tests;

use nac_tco::{
    Priority, SensitivityPoint, SensitivityVariable, VendorScore, calculate_tco, generate_summary,
    recommend_vendors, sensitivity_analysis,
};
use nac_tco_domain::{
    CalculationParams, CalculationResults, CostParameters, Industry, OrgSize, VendorCatalog,
    VendorId,
};
use std::str::FromStr;
use time::OffsetDateTime;

pub use cache::ResultCache;
pub use error::{ApiError, translate_calculation_error, translate_domain_error};
pub use export::{export_csv, export_sensitivity_csv};
pub use request_response::{
    CalculateRequest, CalculateResponse, CostParametersInput, ListVendorsResponse,
    RecommendRequest, RecommendResponse, SensitivityRequest, SensitivityResponse, SummaryResponse,
    VendorInfo,
};

/// Lists every catalog vendor in ascending id order.
#[must_use]
pub fn list_vendors(catalog: &VendorCatalog) -> ListVendorsResponse {
    ListVendorsResponse {
        vendors: catalog.vendors().map(VendorInfo::from).collect(),
    }
}

/// Looks up one catalog vendor.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is not in the catalog.
pub fn get_vendor(catalog: &VendorCatalog, vendor_id: &str) -> Result<VendorInfo, ApiError> {
    catalog
        .get_vendor(&VendorId::new(vendor_id))
        .map(VendorInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Vendor"),
            message: format!("Vendor '{vendor_id}' does not exist"),
        })
}

/// Translates a calculation request into engine parameters.
///
/// The organization size is derived from the device count when the request
/// leaves it out.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the industry or organization size is unknown.
pub fn parse_calculate_request(request: &CalculateRequest) -> Result<CalculationParams, ApiError> {
    let industry: Industry =
        Industry::from_str(&request.industry).map_err(translate_domain_error)?;
    let org_size: OrgSize = match &request.org_size {
        Some(size) => OrgSize::from_str(size).map_err(translate_domain_error)?,
        None => OrgSize::for_device_count(request.device_count),
    };

    let mut params: CalculationParams = CalculationParams::new(
        request
            .selected_vendors
            .iter()
            .map(|id| VendorId::new(id))
            .collect(),
        request.device_count,
        request.years_to_project,
        industry,
        org_size,
    )
    .with_cost_parameters(request.cost_parameters.resolve());
    params.baseline_vendor = request.baseline_vendor.as_deref().map(VendorId::new);

    Ok(params)
}

/// Runs the engine on already parsed parameters, translating any error.
///
/// # Errors
///
/// Returns an error if the engine rejects the parameters.
pub fn calculate_params(
    catalog: &VendorCatalog,
    params: &CalculationParams,
) -> Result<CalculationResults, ApiError> {
    let results: CalculationResults = calculate_tco(catalog, params).map_err(|e| {
        tracing::warn!(error = %e, "Calculation rejected");
        translate_calculation_error(e)
    })?;

    tracing::info!(
        vendors = results.vendor_results.len(),
        device_count = results.device_count,
        years = results.years_to_project,
        industry = %results.industry,
        "Calculated TCO"
    );

    Ok(results)
}

/// Runs a TCO calculation.
///
/// # Arguments
///
/// * `catalog` - The vendor catalog
/// * `request` - The calculation request
///
/// # Errors
///
/// Returns an error if:
/// - The industry or organization size is unknown
/// - The engine rejects the parameters
/// - A selected vendor does not exist
pub fn calculate(
    catalog: &VendorCatalog,
    request: &CalculateRequest,
) -> Result<CalculateResponse, ApiError> {
    let params: CalculationParams = parse_calculate_request(request)?;
    calculate_params(catalog, &params)
}

/// Returns fresh cached results for already parsed parameters.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the stored entry cannot be decoded.
pub fn cached_lookup(
    cache: &ResultCache,
    params: &CalculationParams,
    now: OffsetDateTime,
) -> Result<Option<CalculationResults>, ApiError> {
    let key: String = ResultCache::cache_key(params);
    let cached: Option<CalculationResults> = cache.get(&key, now)?;

    if cached.is_some() {
        tracing::debug!(key = %key, "Result cache hit");
    } else {
        tracing::debug!(key = %key, "Result cache miss");
    }

    Ok(cached)
}

/// Stores results computed for `params`, replacing any previous entry.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the results cannot be serialized.
pub fn store_result(
    cache: &mut ResultCache,
    params: &CalculationParams,
    results: &CalculationResults,
    now: OffsetDateTime,
) -> Result<(), ApiError> {
    cache.insert(ResultCache::cache_key(params), results, now)
}

/// Pairs the narrative summary with the executive summary of `results`.
#[must_use]
pub fn summarize(results: CalculationResults) -> SummaryResponse {
    SummaryResponse {
        summary: generate_summary(&results),
        executive_summary: results.executive_summary,
    }
}

/// Ranks catalog vendors for an organization.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the industry, a priority, or a sizing
/// input is invalid.
pub fn recommend(
    catalog: &VendorCatalog,
    request: &RecommendRequest,
) -> Result<RecommendResponse, ApiError> {
    let industry: Industry =
        Industry::from_str(&request.industry).map_err(translate_domain_error)?;
    let priorities: Vec<Priority> = request
        .priorities
        .iter()
        .map(|p| Priority::from_str(p))
        .collect::<Result<_, _>>()
        .map_err(translate_calculation_error)?;
    let cost_parameters: CostParameters = request.cost_parameters.resolve();

    let recommendations: Vec<VendorScore> = recommend_vendors(
        catalog,
        request.device_count,
        request.years_to_project,
        industry,
        &cost_parameters,
        &priorities,
    )
    .map_err(translate_calculation_error)?;

    tracing::info!(
        industry = %industry,
        returned = recommendations.len(),
        "Ranked vendors"
    );

    Ok(RecommendResponse { recommendations })
}

/// Sweeps one input of a calculation and reports per-vendor totals at each step.
///
/// # Errors
///
/// Returns an error if:
/// - The variable, industry or organization size is unknown
/// - The sweep bounds or step count are invalid
/// - The engine rejects the parameters at any point
/// - A selected vendor does not exist
pub fn sensitivity(
    catalog: &VendorCatalog,
    request: &SensitivityRequest,
) -> Result<SensitivityResponse, ApiError> {
    let variable: SensitivityVariable =
        SensitivityVariable::from_str(&request.variable).map_err(translate_calculation_error)?;
    let params: CalculationParams = parse_calculate_request(&request.calculation)?;

    let points: Vec<SensitivityPoint> = sensitivity_analysis(
        catalog,
        &params,
        variable,
        request.min,
        request.max,
        request.steps,
    )
    .map_err(|e| {
        tracing::warn!(error = %e, variable = %variable, "Sensitivity sweep rejected");
        translate_calculation_error(e)
    })?;

    tracing::info!(
        variable = %variable,
        points = points.len(),
        vendors = params.selected_vendors.len(),
        "Ran sensitivity sweep"
    );

    Ok(SensitivityResponse { variable, points })
}
