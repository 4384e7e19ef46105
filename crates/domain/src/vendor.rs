// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{PricingModel, VendorId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A static catalog entry describing one NAC vendor.
///
/// Recurring amounts (`base_cost`, `per_user_cost`) are annual. `setup_cost`,
/// `hardware_cost` and `infrastructure_cost` are charged once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// The vendor's unique identifier.
    pub id: VendorId,
    /// Display name.
    pub name: String,
    /// How the vendor charges.
    pub pricing_model: PricingModel,
    /// Annual platform fee.
    pub base_cost: f64,
    /// Annual cost per managed device.
    pub per_user_cost: f64,
    /// One-time implementation cost.
    pub setup_cost: f64,
    /// Percentage discount applied to the recurring cost.
    pub annual_discount: f64,
    /// One-time appliance cost for on-premise deployments.
    pub hardware_cost: f64,
    /// One-time server, storage and network cost for on-premise deployments.
    pub infrastructure_cost: f64,
    /// Percentage of breach risk the product mitigates.
    pub breach_risk_reduction: f64,
    /// Capability name to score (0-10).
    pub feature_scores: BTreeMap<String, u8>,
    /// Compliance framework name to coverage percentage (0-100).
    pub compliance_scores: BTreeMap<String, f64>,
}

impl Vendor {
    /// Returns the hardware cost that applies under this vendor's pricing model.
    #[must_use]
    pub const fn effective_hardware_cost(&self) -> f64 {
        if self.pricing_model.is_cloud_delivered() {
            0.0
        } else {
            self.hardware_cost
        }
    }

    /// Returns the infrastructure cost that applies under this vendor's pricing model.
    #[must_use]
    pub const fn effective_infrastructure_cost(&self) -> f64 {
        if self.pricing_model.is_cloud_delivered() {
            0.0
        } else {
            self.infrastructure_cost
        }
    }

    /// Returns the coverage percentage for a framework, or 0 if not covered at all.
    #[must_use]
    pub fn compliance_coverage(&self, framework: &str) -> f64 {
        self.compliance_scores.get(framework).copied().unwrap_or(0.0)
    }

    /// Mean feature score across all declared capabilities, 0 when none are declared.
    #[must_use]
    pub fn mean_feature_score(&self) -> f64 {
        if self.feature_scores.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.feature_scores.values().map(|s| f64::from(*s)).sum();
        #[allow(clippy::cast_precision_loss)]
        let count: f64 = self.feature_scores.len() as f64;
        sum / count
    }
}
