// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for per-vendor cost projection and ROI figures.

use crate::{CalculationError, calculate_tco};
use nac_tco_domain::{
    CalculationParams, CalculationResults, CostParameters, PricingModel, VendorCatalog, VendorId,
    VendorResult,
};

use super::helpers::{
    LEGACY_TOTAL, PORTNOX_RECURRING, PORTNOX_TOTAL, assert_close, create_portnox, create_test_catalog,
    create_test_params,
};

#[test]
fn test_portnox_scenario_breakdown() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["portnox"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let portnox: &VendorResult = &results.vendor_results[0];

    assert_close(portnox.cost_breakdown.licenses, PORTNOX_RECURRING * 3.0);
    assert_close(portnox.cost_breakdown.maintenance, PORTNOX_RECURRING * 0.18 * 3.0);
    assert_close(portnox.cost_breakdown.operations, 75_000.0);
    assert_close(portnox.cost_breakdown.implementation, 10_000.0);
    assert_close(portnox.cost_breakdown.hardware, 0.0);
    assert_close(portnox.cost_breakdown.infrastructure, 0.0);
    assert_close(portnox.total_tco, PORTNOX_TOTAL);
}

#[test]
fn test_on_premise_breakdown_includes_hardware_and_infrastructure() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["legacy"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let legacy: &VendorResult = &results.vendor_results[0];

    assert_close(legacy.cost_breakdown.licenses, 121_500.0);
    assert_close(legacy.cost_breakdown.maintenance, 21_870.0);
    assert_close(legacy.cost_breakdown.hardware, 30_000.0);
    assert_close(legacy.cost_breakdown.infrastructure, 15_000.0);
    assert_close(legacy.total_tco, LEGACY_TOTAL);
}

#[test]
fn test_cloud_vendor_ignores_declared_hardware() {
    let mut cloud = create_portnox();
    cloud.hardware_cost = 50_000.0;
    cloud.infrastructure_cost = 20_000.0;
    let catalog: VendorCatalog = VendorCatalog::new(vec![cloud]).unwrap();
    let params: CalculationParams = create_test_params(&["portnox"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert_eq!(
        results.vendor_results[0].pricing_model,
        PricingModel::PerDeviceSubscription
    );
    assert_close(results.vendor_results[0].cost_breakdown.hardware, 0.0);
    assert_close(results.vendor_results[0].cost_breakdown.infrastructure, 0.0);
    assert_close(results.vendor_results[0].total_tco, PORTNOX_TOTAL);
}

#[test]
fn test_discount_override_replaces_vendor_discount() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams =
        create_test_params(&["portnox"]).with_cost_parameters(CostParameters {
            discount_percentage: Some(0.0),
            ..CostParameters::default()
        });

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert_close(results.vendor_results[0].cost_breakdown.licenses, 1_503.0 * 3.0);
}

#[test]
fn test_total_equals_sum_of_components_for_builtin_catalog() {
    let catalog: VendorCatalog = VendorCatalog::builtin().unwrap();
    let ids: Vec<&str> = catalog.list_vendor_ids().into_iter().map(VendorId::value).collect();
    let params: CalculationParams = create_test_params(&ids);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert_eq!(results.vendor_results.len(), catalog.len());
    for result in &results.vendor_results {
        let b = &result.cost_breakdown;
        let summed: f64 = b.licenses
            + b.maintenance
            + b.implementation
            + b.operations
            + b.hardware
            + b.infrastructure;
        assert!(
            (summed - result.total_tco).abs() < 1e-9 * result.total_tco.max(1.0),
            "{}",
            result.vendor_id
        );
    }
}

#[test]
fn test_cumulative_costs_are_monotonic_and_end_at_total() {
    let catalog: VendorCatalog = VendorCatalog::builtin().unwrap();
    let ids: Vec<&str> = catalog.list_vendor_ids().into_iter().map(VendorId::value).collect();
    let mut params: CalculationParams = create_test_params(&ids);
    params.years_to_project = 5;

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    for result in &results.vendor_results {
        let cumulative = &result.cumulative_costs;
        assert_eq!(cumulative.by_year.len(), 5);
        assert!(cumulative.initial <= cumulative.by_year[0]);
        assert!(cumulative.by_year.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(
            cumulative.by_year.last().unwrap().to_bits(),
            result.total_tco.to_bits()
        );
    }
}

#[test]
fn test_cumulative_costs_start_with_one_time_components() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["legacy", "portnox"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert_close(results.vendor_results[0].cumulative_costs.initial, 85_000.0);
    assert_close(results.vendor_results[1].cumulative_costs.initial, 10_000.0);
    assert_close(
        results.vendor_results[1].cumulative_costs.at_year(1).unwrap(),
        10_000.0 + PORTNOX_RECURRING * 1.18 + 25_000.0,
    );
}

#[test]
fn test_results_keep_selection_order() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["legacy", "portnox_twin", "portnox"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let order: Vec<&str> = results
        .vendor_results
        .iter()
        .map(|r| r.vendor_id.value())
        .collect();

    assert_eq!(order, vec!["legacy", "portnox_twin", "portnox"]);
}

#[test]
fn test_calculation_is_pure() {
    let catalog: VendorCatalog = create_test_catalog();
    let snapshot: VendorCatalog = catalog.clone();
    let params: CalculationParams = create_test_params(&["portnox", "legacy"]);

    let first: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let second: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert_eq!(first, second);
    assert_eq!(catalog, snapshot);
}

#[test]
fn test_roi_is_measured_against_most_expensive_vendor() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["portnox", "legacy"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let portnox: &VendorResult = results.vendor_result(&VendorId::new("portnox")).unwrap();
    let legacy: &VendorResult = results.vendor_result(&VendorId::new("legacy")).unwrap();

    let savings: f64 = LEGACY_TOTAL - PORTNOX_TOTAL;
    assert_eq!(results.executive_summary.roi_anchor_vendor_id, legacy.vendor_id);
    assert_close(portnox.savings, savings);
    assert_close(portnox.roi.unwrap(), savings / PORTNOX_TOTAL * 100.0);
    assert_close(
        portnox.payback_period_months.unwrap(),
        10_000.0 / (savings / 36.0),
    );

    assert_close(legacy.savings, 0.0);
    assert_eq!(legacy.roi, None);
    assert_eq!(legacy.payback_period_months, None);
}

#[test]
fn test_explicit_baseline_is_the_roi_anchor() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["legacy", "portnox"])
        .with_baseline(VendorId::new("portnox"));

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();
    let legacy: &VendorResult = results.vendor_result(&VendorId::new("legacy")).unwrap();

    assert_eq!(
        results.executive_summary.roi_anchor_vendor_id,
        VendorId::new("portnox")
    );
    assert_close(legacy.savings, PORTNOX_TOTAL - LEGACY_TOTAL);
    assert!(legacy.roi.unwrap() < 0.0);
    assert_eq!(legacy.payback_period_months, None);
}

#[test]
fn test_compliance_gaps_follow_industry_requirements() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["portnox", "legacy"]);

    let results: CalculationResults = calculate_tco(&catalog, &params).unwrap();

    assert!(results.vendor_results[0].compliance_gaps.is_empty());
    assert_eq!(
        results.vendor_results[1].compliance_gaps,
        vec![String::from("HIPAA"), String::from("PCI-DSS")]
    );
}

#[test]
fn test_unknown_vendor_is_reported() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["nonexistent"]);

    let result: Result<CalculationResults, CalculationError> = calculate_tco(&catalog, &params);

    assert_eq!(
        result.unwrap_err(),
        CalculationError::UnknownVendor(String::from("nonexistent"))
    );
}

#[test]
fn test_first_unknown_vendor_in_selection_order_is_reported() {
    let catalog: VendorCatalog = create_test_catalog();
    let params: CalculationParams = create_test_params(&["ghost_b", "portnox", "ghost_a"]);

    let result: Result<CalculationResults, CalculationError> = calculate_tco(&catalog, &params);

    assert_eq!(
        result.unwrap_err(),
        CalculationError::UnknownVendor(String::from("ghost_b"))
    );
}
