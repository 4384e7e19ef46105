// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::{PricingModel, Vendor, VendorId};

pub fn create_test_vendor(id: &str) -> Vendor {
    let mut feature_scores: BTreeMap<String, u8> = BTreeMap::new();
    feature_scores.insert(String::from("zero_trust"), 8);
    feature_scores.insert(String::from("automation"), 6);

    let mut compliance_scores: BTreeMap<String, f64> = BTreeMap::new();
    compliance_scores.insert(String::from("HIPAA"), 90.0);
    compliance_scores.insert(String::from("PCI-DSS"), 70.0);

    Vendor {
        id: VendorId::new(id),
        name: String::from("Test Vendor"),
        pricing_model: PricingModel::PerpetualLicense,
        base_cost: 1_000.0,
        per_user_cost: 10.0,
        setup_cost: 5_000.0,
        annual_discount: 10.0,
        hardware_cost: 20_000.0,
        infrastructure_cost: 8_000.0,
        breach_risk_reduction: 60.0,
        feature_scores,
        compliance_scores,
    }
}
