// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a vendor identifier.
///
/// Vendor ids are the sole key into the catalog and are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId {
    /// The identifier value (e.g. "portnox").
    value: String,
}

impl VendorId {
    /// Creates a new `VendorId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// How a vendor charges for its product.
///
/// Only subscription pricing is delivered from the cloud; the perpetual
/// models require on-premise hardware and infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    /// Recurring per-device subscription, cloud-delivered.
    PerDeviceSubscription,
    /// Perpetual platform license with recurring support.
    PerpetualLicense,
    /// Perpetual per-device license with recurring support.
    PerDevicePerpetual,
}

impl FromStr for PricingModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-device-subscription" => Ok(Self::PerDeviceSubscription),
            "perpetual-license" => Ok(Self::PerpetualLicense),
            "per-device-perpetual" => Ok(Self::PerDevicePerpetual),
            _ => Err(DomainError::UnknownPricingModel(s.to_string())),
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PricingModel {
    /// Converts this pricing model to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerDeviceSubscription => "per-device-subscription",
            Self::PerpetualLicense => "perpetual-license",
            Self::PerDevicePerpetual => "per-device-perpetual",
        }
    }

    /// Returns whether the product is delivered from the cloud.
    ///
    /// Cloud-delivered products carry no hardware or infrastructure cost.
    #[must_use]
    pub const fn is_cloud_delivered(&self) -> bool {
        matches!(self, Self::PerDeviceSubscription)
    }
}
