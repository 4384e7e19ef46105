// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use nac_tco_domain::{
    CalculationParams, Industry, OrgSize, PricingModel, Vendor, VendorCatalog, VendorId,
};

pub const TOLERANCE: f64 = 1e-6;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

fn scores<T: Copy>(entries: &[(&str, T)]) -> BTreeMap<String, T> {
    entries
        .iter()
        .map(|(name, score)| ((*name).to_string(), *score))
        .collect()
}

/// Cloud vendor: base 3, per device 3, setup 10000, 15% discount.
pub fn create_portnox() -> Vendor {
    Vendor {
        id: VendorId::new("portnox"),
        name: String::from("Portnox"),
        pricing_model: PricingModel::PerDeviceSubscription,
        base_cost: 3.0,
        per_user_cost: 3.0,
        setup_cost: 10_000.0,
        annual_discount: 15.0,
        hardware_cost: 0.0,
        infrastructure_cost: 0.0,
        breach_risk_reduction: 87.0,
        feature_scores: scores(&[("automation", 9), ("zero_trust", 9)]),
        compliance_scores: scores(&[("HIPAA", 95.0), ("ISO27001", 92.0), ("PCI-DSS", 90.0)]),
    }
}

/// Same costs as `create_portnox`, different id and security figures.
pub fn create_portnox_twin() -> Vendor {
    Vendor {
        id: VendorId::new("portnox_twin"),
        name: String::from("Portnox Twin"),
        breach_risk_reduction: 80.0,
        ..create_portnox()
    }
}

/// On-premise vendor with hardware and infrastructure.
pub fn create_legacy() -> Vendor {
    Vendor {
        id: VendorId::new("legacy"),
        name: String::from("Legacy NAC"),
        pricing_model: PricingModel::PerpetualLicense,
        base_cost: 20_000.0,
        per_user_cost: 50.0,
        setup_cost: 40_000.0,
        annual_discount: 10.0,
        hardware_cost: 30_000.0,
        infrastructure_cost: 15_000.0,
        breach_risk_reduction: 70.0,
        feature_scores: scores(&[("automation", 5), ("zero_trust", 6)]),
        compliance_scores: scores(&[("HIPAA", 70.0), ("ISO27001", 85.0)]),
    }
}

pub fn create_test_catalog() -> VendorCatalog {
    VendorCatalog::new(vec![create_portnox(), create_portnox_twin(), create_legacy()]).unwrap()
}

/// 500 devices, 3 years, healthcare, medium, default cost parameters.
pub fn create_test_params(vendors: &[&str]) -> CalculationParams {
    CalculationParams::new(
        vendors.iter().map(|id| VendorId::new(id)).collect(),
        500,
        3,
        Industry::Healthcare,
        OrgSize::Medium,
    )
}

// Expected figures for the fixture vendors under `create_test_params`.
pub const PORTNOX_RECURRING: f64 = 1_277.55;
pub const PORTNOX_TOTAL: f64 = 89_522.527;
pub const LEGACY_TOTAL: f64 = 303_370.0;
