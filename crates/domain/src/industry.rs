// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Industry and organization-size lookup tables.
//!
//! These tables feed the risk and compliance figures of the executive
//! summary. They are static and never mutated.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The industry an organization operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Healthcare,
    FinancialServices,
    Retail,
    Manufacturing,
    Education,
    Government,
    Technology,
    EnergyUtilities,
}

/// Risk and compliance factors for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndustryProfile {
    /// Scales the baseline breach exposure.
    pub risk_multiplier: f64,
    /// Scales compliance effort.
    pub compliance_multiplier: f64,
    /// Scales the expected annual downtime.
    pub downtime_multiplier: f64,
    /// Average cost of a single breach.
    pub average_breach_cost: f64,
    /// Frameworks an organization in this industry is expected to satisfy.
    pub required_frameworks: &'static [&'static str],
}

impl Industry {
    /// All industries, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Healthcare,
        Self::FinancialServices,
        Self::Retail,
        Self::Manufacturing,
        Self::Education,
        Self::Government,
        Self::Technology,
        Self::EnergyUtilities,
    ];

    /// Converts this industry to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::FinancialServices => "financial_services",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Education => "education",
            Self::Government => "government",
            Self::Technology => "technology",
            Self::EnergyUtilities => "energy_utilities",
        }
    }

    /// Returns the lookup profile for this industry.
    #[must_use]
    pub const fn profile(&self) -> IndustryProfile {
        match self {
            Self::Healthcare => IndustryProfile {
                risk_multiplier: 2.0,
                compliance_multiplier: 1.5,
                downtime_multiplier: 3.0,
                average_breach_cost: 10_930_000.0,
                required_frameworks: &["HIPAA", "PCI-DSS", "ISO27001"],
            },
            Self::FinancialServices => IndustryProfile {
                risk_multiplier: 2.5,
                compliance_multiplier: 1.8,
                downtime_multiplier: 4.0,
                average_breach_cost: 5_850_000.0,
                required_frameworks: &["PCI-DSS", "SOX", "GDPR", "ISO27001"],
            },
            Self::Retail => IndustryProfile {
                risk_multiplier: 1.5,
                compliance_multiplier: 1.2,
                downtime_multiplier: 2.0,
                average_breach_cost: 3_280_000.0,
                required_frameworks: &["PCI-DSS", "GDPR"],
            },
            Self::Manufacturing => IndustryProfile {
                risk_multiplier: 1.8,
                compliance_multiplier: 1.0,
                downtime_multiplier: 2.5,
                average_breach_cost: 4_990_000.0,
                required_frameworks: &["ISO27001", "NIST"],
            },
            Self::Education => IndustryProfile {
                risk_multiplier: 1.2,
                compliance_multiplier: 0.8,
                downtime_multiplier: 1.5,
                average_breach_cost: 3_790_000.0,
                required_frameworks: &["FERPA", "ISO27001"],
            },
            Self::Government => IndustryProfile {
                risk_multiplier: 3.0,
                compliance_multiplier: 2.0,
                downtime_multiplier: 5.0,
                average_breach_cost: 4_910_000.0,
                required_frameworks: &["FedRAMP", "NIST", "ISO27001"],
            },
            Self::Technology => IndustryProfile {
                risk_multiplier: 1.6,
                compliance_multiplier: 1.1,
                downtime_multiplier: 2.2,
                average_breach_cost: 5_040_000.0,
                required_frameworks: &["ISO27001", "SOC2"],
            },
            Self::EnergyUtilities => IndustryProfile {
                risk_multiplier: 2.2,
                compliance_multiplier: 1.6,
                downtime_multiplier: 3.5,
                average_breach_cost: 6_720_000.0,
                required_frameworks: &["NERC-CIP", "ISO27001", "NIST"],
            },
        }
    }
}

impl FromStr for Industry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|industry| industry.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIndustry(s.to_string()))
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The size band of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Typical shape and exposure of an organization in one size band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrgSizeProfile {
    /// Lower bound of the typical device count.
    pub min_devices: u32,
    /// Upper bound of the typical device count.
    pub max_devices: u32,
    /// Probability of at least one breach per year without NAC.
    pub annual_breach_probability: f64,
}

impl OrgSize {
    /// All size bands, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Enterprise];

    /// Converts this size band to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }

    /// Returns the lookup profile for this size band.
    #[must_use]
    pub const fn profile(&self) -> OrgSizeProfile {
        match self {
            Self::Small => OrgSizeProfile {
                min_devices: 100,
                max_devices: 500,
                annual_breach_probability: 0.22,
            },
            Self::Medium => OrgSizeProfile {
                min_devices: 500,
                max_devices: 2_500,
                annual_breach_probability: 0.28,
            },
            Self::Large => OrgSizeProfile {
                min_devices: 2_500,
                max_devices: 10_000,
                annual_breach_probability: 0.31,
            },
            Self::Enterprise => OrgSizeProfile {
                min_devices: 10_000,
                max_devices: 50_000,
                annual_breach_probability: 0.35,
            },
        }
    }

    /// Picks the size band whose typical device range contains `device_count`.
    ///
    /// Counts below the smallest band map to `Small`; counts above the largest
    /// band map to `Enterprise`.
    #[must_use]
    pub fn for_device_count(device_count: u32) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|size| device_count < size.profile().max_devices)
            .unwrap_or(Self::Enterprise)
    }
}

impl FromStr for OrgSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOrgSize(s.to_string()))
    }
}

impl std::fmt::Display for OrgSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
