// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weighted vendor recommendations.
//!
//! Every catalog vendor is scored 0-100 on cost, security, compliance and
//! features. The caller picks which of those matter; the final score is the
//! weighted mean of the picked dimensions, with compliance weighted up or
//! down by the industry's compliance multiplier.

use crate::engine::project_costs;
use crate::error::CalculationError;
use crate::validation::validate_projection;
use nac_tco_domain::{CostParameters, Industry, IndustryProfile, Vendor, VendorCatalog, VendorId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of vendors returned by `recommend_vendors`.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// A dimension the caller wants recommendations to favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Cost,
    Security,
    Compliance,
    Features,
}

impl Priority {
    /// All priorities, in weight order.
    pub const ALL: [Self; 4] = [Self::Cost, Self::Security, Self::Compliance, Self::Features];

    /// Relative weight of this priority in the final score.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        match self {
            Self::Cost | Self::Security => 0.3,
            Self::Compliance | Self::Features => 0.2,
        }
    }

    /// Weight of this priority for an organization in the given industry.
    ///
    /// The compliance weight scales with the industry's compliance multiplier.
    #[must_use]
    pub const fn weight_in(&self, industry: &IndustryProfile) -> f64 {
        match self {
            Self::Compliance => self.weight() * industry.compliance_multiplier,
            Self::Cost | Self::Security | Self::Features => self.weight(),
        }
    }

    /// Converts this priority to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Security => "security",
            Self::Compliance => "compliance",
            Self::Features => "features",
        }
    }
}

impl FromStr for Priority {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| {
                CalculationError::validation("priorities", &format!("unknown priority '{s}'"))
            })
    }
}

/// One vendor's recommendation score and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorScore {
    pub vendor_id: VendorId,
    pub name: String,
    /// Weighted score over the requested priorities (0-100).
    pub score: f64,
    pub cost_score: f64,
    pub security_score: f64,
    pub compliance_score: f64,
    pub feature_score: f64,
    pub total_tco: f64,
}

/// Ranks every catalog vendor for an organization and returns the best few.
///
/// An empty `priorities` slice weighs every dimension. Repeated priorities
/// count once.
///
/// # Arguments
///
/// * `catalog` - Vendors to rank
/// * `device_count` - Number of managed devices
/// * `years_to_project` - Projection horizon in years
/// * `industry` - Industry whose required frameworks drive the compliance score
/// * `cost_parameters` - Organization-specific cost overrides
/// * `priorities` - Dimensions to favor
///
/// # Returns
///
/// * At most `MAX_RECOMMENDATIONS` scores, highest first, ties broken by id
///
/// # Errors
///
/// Returns `CalculationError::Validation` if the sizing or cost inputs are invalid.
pub fn recommend_vendors(
    catalog: &VendorCatalog,
    device_count: u32,
    years_to_project: u32,
    industry: Industry,
    cost_parameters: &CostParameters,
    priorities: &[Priority],
) -> Result<Vec<VendorScore>, CalculationError> {
    validate_projection(device_count, years_to_project, cost_parameters)?;

    let mut requested: Vec<Priority> = if priorities.is_empty() {
        Priority::ALL.to_vec()
    } else {
        priorities.to_vec()
    };
    requested.sort_unstable();
    requested.dedup();

    let totals: Vec<(&Vendor, f64)> = catalog
        .vendors()
        .map(|vendor| {
            let (breakdown, _) =
                project_costs(vendor, device_count, years_to_project, cost_parameters);
            (vendor, breakdown.total())
        })
        .collect();
    let min_tco: f64 = totals
        .iter()
        .map(|(_, total)| *total)
        .fold(f64::INFINITY, f64::min);

    let profile: IndustryProfile = industry.profile();
    let mut scores: Vec<VendorScore> = totals
        .into_iter()
        .map(|(vendor, total_tco)| score_vendor(vendor, total_tco, min_tco, &profile, &requested))
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.vendor_id.cmp(&b.vendor_id))
    });
    scores.truncate(MAX_RECOMMENDATIONS);

    Ok(scores)
}

fn score_vendor(
    vendor: &Vendor,
    total_tco: f64,
    min_tco: f64,
    industry: &IndustryProfile,
    requested: &[Priority],
) -> VendorScore {
    let required_frameworks: &[&str] = industry.required_frameworks;
    let cost_score: f64 = if total_tco > 0.0 {
        100.0 * min_tco / total_tco
    } else {
        100.0
    };
    let security_score: f64 = vendor.breach_risk_reduction;
    let compliance_score: f64 = if required_frameworks.is_empty() {
        100.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count: f64 = required_frameworks.len() as f64;
        required_frameworks
            .iter()
            .map(|framework| vendor.compliance_coverage(framework))
            .sum::<f64>()
            / count
    };
    let feature_score: f64 = vendor.mean_feature_score() * 10.0;

    let mut weighted: f64 = 0.0;
    let mut weight_sum: f64 = 0.0;
    for priority in requested {
        let dimension: f64 = match priority {
            Priority::Cost => cost_score,
            Priority::Security => security_score,
            Priority::Compliance => compliance_score,
            Priority::Features => feature_score,
        };
        let weight: f64 = priority.weight_in(industry);
        weighted = weight.mul_add(dimension, weighted);
        weight_sum += weight;
    }

    VendorScore {
        vendor_id: vendor.id.clone(),
        name: vendor.name.clone(),
        score: if weight_sum > 0.0 {
            weighted / weight_sum
        } else {
            0.0
        },
        cost_score,
        security_score,
        compliance_score,
        feature_score,
        total_tco,
    }
}
