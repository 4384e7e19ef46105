// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{CostBreakdown, CumulativeCosts, DomainError, PricingModel, VendorId};

use super::helpers::create_test_vendor;

#[test]
fn test_vendor_id_is_compared_verbatim() {
    assert_eq!(VendorId::new("cisco"), VendorId::new("cisco"));
    assert_ne!(VendorId::new("cisco"), VendorId::new("Cisco"));
    assert_eq!(VendorId::new("cisco").value(), "cisco");
    assert_eq!(format!("{}", VendorId::new("cisco")), "cisco");
}

#[test]
fn test_vendor_id_serializes_as_plain_string() {
    let json: String = serde_json::to_string(&VendorId::new("portnox")).unwrap();
    assert_eq!(json, "\"portnox\"");
}

#[test]
fn test_pricing_model_parses_known_values() {
    for model in [
        PricingModel::PerDeviceSubscription,
        PricingModel::PerpetualLicense,
        PricingModel::PerDevicePerpetual,
    ] {
        assert_eq!(PricingModel::from_str(model.as_str()).unwrap(), model);
    }
}

#[test]
fn test_pricing_model_rejects_unknown_value() {
    let result: Result<PricingModel, DomainError> = PricingModel::from_str("freemium");
    assert_eq!(
        result,
        Err(DomainError::UnknownPricingModel(String::from("freemium")))
    );
}

#[test]
fn test_only_subscription_is_cloud_delivered() {
    assert!(PricingModel::PerDeviceSubscription.is_cloud_delivered());
    assert!(!PricingModel::PerpetualLicense.is_cloud_delivered());
    assert!(!PricingModel::PerDevicePerpetual.is_cloud_delivered());
}

#[test]
fn test_cloud_vendor_ignores_declared_hardware() {
    let mut vendor = create_test_vendor("cloud");
    vendor.pricing_model = PricingModel::PerDeviceSubscription;

    assert!((vendor.effective_hardware_cost() - 0.0).abs() < f64::EPSILON);
    assert!((vendor.effective_infrastructure_cost() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_on_premise_vendor_keeps_declared_hardware() {
    let vendor = create_test_vendor("onprem");

    assert!((vendor.effective_hardware_cost() - 20_000.0).abs() < f64::EPSILON);
    assert!((vendor.effective_infrastructure_cost() - 8_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_compliance_framework_has_zero_coverage() {
    let vendor = create_test_vendor("v");
    assert!((vendor.compliance_coverage("HIPAA") - 90.0).abs() < f64::EPSILON);
    assert!((vendor.compliance_coverage("FedRAMP") - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_mean_feature_score() {
    let mut vendor = create_test_vendor("v");
    assert!((vendor.mean_feature_score() - 7.0).abs() < f64::EPSILON);

    vendor.feature_scores.clear();
    assert!((vendor.mean_feature_score() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_cost_breakdown_total_sums_every_component() {
    let breakdown: CostBreakdown = CostBreakdown {
        licenses: 1.0,
        maintenance: 2.0,
        implementation: 4.0,
        operations: 8.0,
        hardware: 16.0,
        infrastructure: 32.0,
    };
    assert!((breakdown.total() - 63.0).abs() < f64::EPSILON);
    assert!((breakdown.one_time() - 52.0).abs() < f64::EPSILON);
}

#[test]
fn test_cumulative_costs_year_lookup() {
    let cumulative: CumulativeCosts = CumulativeCosts {
        initial: 100.0,
        by_year: vec![150.0, 200.0],
    };
    assert_eq!(cumulative.at_year(0), Some(100.0));
    assert_eq!(cumulative.at_year(2), Some(200.0));
    assert_eq!(cumulative.at_year(3), None);
}
