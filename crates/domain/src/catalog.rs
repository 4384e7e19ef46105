// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only vendor catalog.
//!
//! A catalog is built once (from the embedded defaults or a JSON document),
//! validated as a whole, and never mutated afterwards. Callers share it by
//! reference.

use crate::error::DomainError;
use crate::types::{PricingModel, VendorId};
use crate::validation::validate_vendor;
use crate::vendor::Vendor;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A validated, immutable lookup table of vendors keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorCatalog {
    vendors: BTreeMap<VendorId, Vendor>,
}

/// On-disk shape of one vendor. The id comes from the enclosing map key.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VendorRecord {
    name: String,
    pricing_model: PricingModel,
    base_cost: f64,
    per_user_cost: f64,
    setup_cost: f64,
    #[serde(default)]
    annual_discount: f64,
    #[serde(default)]
    hardware_cost: f64,
    #[serde(default)]
    infrastructure_cost: f64,
    #[serde(default)]
    breach_risk_reduction: f64,
    #[serde(default)]
    feature_scores: BTreeMap<String, u8>,
    #[serde(default)]
    compliance_scores: BTreeMap<String, f64>,
}

impl VendorRecord {
    fn into_vendor(self, id: &str) -> Vendor {
        Vendor {
            id: VendorId::new(id),
            name: self.name,
            pricing_model: self.pricing_model,
            base_cost: self.base_cost,
            per_user_cost: self.per_user_cost,
            setup_cost: self.setup_cost,
            annual_discount: self.annual_discount,
            hardware_cost: self.hardware_cost,
            infrastructure_cost: self.infrastructure_cost,
            breach_risk_reduction: self.breach_risk_reduction,
            feature_scores: self.feature_scores,
            compliance_scores: self.compliance_scores,
        }
    }
}

impl VendorCatalog {
    /// Builds a catalog from a list of vendors.
    ///
    /// # Arguments
    ///
    /// * `vendors` - The catalog entries
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any vendor fails field validation
    /// - Two vendors share an id
    pub fn new(vendors: Vec<Vendor>) -> Result<Self, DomainError> {
        let mut by_id: BTreeMap<VendorId, Vendor> = BTreeMap::new();

        for vendor in vendors {
            validate_vendor(&vendor)?;
            if by_id.contains_key(&vendor.id) {
                return Err(DomainError::DuplicateVendor(vendor.id.value().to_string()));
            }
            by_id.insert(vendor.id.clone(), vendor);
        }

        Ok(Self { vendors: by_id })
    }

    /// Parses a catalog from a JSON object mapping vendor id to vendor record.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON, does not match the
    /// record shape, or fails catalog validation.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let records: BTreeMap<String, VendorRecord> =
            serde_json::from_str(json).map_err(|e| DomainError::CatalogParse(e.to_string()))?;

        let vendors: Vec<Vendor> = records
            .into_iter()
            .map(|(id, record)| record.into_vendor(&id))
            .collect();

        Self::new(vendors)
    }

    /// Returns the embedded default catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data violates catalog validation.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::new(builtin_vendors())
    }

    /// Looks up a vendor by id.
    #[must_use]
    pub fn get_vendor(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.get(id)
    }

    /// Returns every vendor id in ascending order.
    #[must_use]
    pub fn list_vendor_ids(&self) -> Vec<&VendorId> {
        self.vendors.keys().collect()
    }

    /// Iterates over every vendor in ascending id order.
    pub fn vendors(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.values()
    }

    /// Returns the number of vendors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

fn scores<T: Copy>(entries: &[(&str, T)]) -> BTreeMap<String, T> {
    entries
        .iter()
        .map(|(name, score)| ((*name).to_string(), *score))
        .collect()
}

#[allow(clippy::too_many_lines)]
fn builtin_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: VendorId::new("portnox"),
            name: String::from("Portnox CLEAR"),
            pricing_model: PricingModel::PerDeviceSubscription,
            base_cost: 0.0,
            per_user_cost: 48.0,
            setup_cost: 15_000.0,
            annual_discount: 15.0,
            hardware_cost: 0.0,
            infrastructure_cost: 0.0,
            breach_risk_reduction: 87.0,
            feature_scores: scores(&[
                ("automation", 9),
                ("byod", 9),
                ("cloud_native", 10),
                ("iot_visibility", 9),
                ("zero_trust", 9),
            ]),
            compliance_scores: scores(&[
                ("FedRAMP", 89.0),
                ("GDPR", 85.0),
                ("HIPAA", 92.0),
                ("ISO27001", 93.0),
                ("NIST", 91.0),
                ("PCI-DSS", 90.0),
                ("SOC2", 90.0),
                ("SOX", 88.0),
            ]),
        },
        Vendor {
            id: VendorId::new("cisco"),
            name: String::from("Cisco ISE"),
            pricing_model: PricingModel::PerpetualLicense,
            base_cost: 50_000.0,
            per_user_cost: 125.0,
            setup_cost: 75_000.0,
            annual_discount: 10.0,
            hardware_cost: 85_000.0,
            infrastructure_cost: 40_000.0,
            breach_risk_reduction: 72.0,
            feature_scores: scores(&[
                ("automation", 6),
                ("byod", 7),
                ("cloud_native", 2),
                ("iot_visibility", 7),
                ("zero_trust", 7),
            ]),
            compliance_scores: scores(&[
                ("HIPAA", 78.0),
                ("ISO27001", 80.0),
                ("NIST", 83.0),
                ("PCI-DSS", 82.0),
                ("SOX", 75.0),
            ]),
        },
        Vendor {
            id: VendorId::new("aruba"),
            name: String::from("Aruba ClearPass"),
            pricing_model: PricingModel::PerpetualLicense,
            base_cost: 35_000.0,
            per_user_cost: 95.0,
            setup_cost: 45_000.0,
            annual_discount: 12.0,
            hardware_cost: 55_000.0,
            infrastructure_cost: 30_000.0,
            breach_risk_reduction: 68.0,
            feature_scores: scores(&[
                ("automation", 6),
                ("byod", 8),
                ("cloud_native", 3),
                ("iot_visibility", 6),
                ("zero_trust", 6),
            ]),
            compliance_scores: scores(&[
                ("HIPAA", 75.0),
                ("ISO27001", 76.0),
                ("NIST", 79.0),
                ("PCI-DSS", 78.0),
            ]),
        },
        Vendor {
            id: VendorId::new("forescout"),
            name: String::from("Forescout"),
            pricing_model: PricingModel::PerDevicePerpetual,
            base_cost: 40_000.0,
            per_user_cost: 110.0,
            setup_cost: 65_000.0,
            annual_discount: 11.0,
            hardware_cost: 70_000.0,
            infrastructure_cost: 40_000.0,
            breach_risk_reduction: 70.0,
            feature_scores: scores(&[
                ("automation", 7),
                ("byod", 6),
                ("cloud_native", 2),
                ("iot_visibility", 9),
                ("zero_trust", 7),
            ]),
            compliance_scores: scores(&[
                ("HIPAA", 76.0),
                ("ISO27001", 78.0),
                ("NIST", 81.0),
                ("PCI-DSS", 80.0),
            ]),
        },
        Vendor {
            id: VendorId::new("fortinac"),
            name: String::from("FortiNAC"),
            pricing_model: PricingModel::PerDevicePerpetual,
            base_cost: 25_000.0,
            per_user_cost: 80.0,
            setup_cost: 40_000.0,
            annual_discount: 10.0,
            hardware_cost: 45_000.0,
            infrastructure_cost: 20_000.0,
            breach_risk_reduction: 65.0,
            feature_scores: scores(&[
                ("automation", 6),
                ("byod", 6),
                ("cloud_native", 3),
                ("iot_visibility", 7),
                ("zero_trust", 6),
            ]),
            compliance_scores: scores(&[
                ("ISO27001", 74.0),
                ("NIST", 77.0),
                ("PCI-DSS", 76.0),
            ]),
        },
        Vendor {
            id: VendorId::new("juniper"),
            name: String::from("Juniper Mist"),
            pricing_model: PricingModel::PerDeviceSubscription,
            base_cost: 10_000.0,
            per_user_cost: 85.0,
            setup_cost: 25_000.0,
            annual_discount: 14.0,
            hardware_cost: 0.0,
            infrastructure_cost: 0.0,
            breach_risk_reduction: 75.0,
            feature_scores: scores(&[
                ("automation", 8),
                ("byod", 7),
                ("cloud_native", 7),
                ("iot_visibility", 7),
                ("zero_trust", 7),
            ]),
            compliance_scores: scores(&[
                ("HIPAA", 82.0),
                ("ISO27001", 84.0),
                ("NIST", 86.0),
                ("PCI-DSS", 85.0),
                ("SOX", 80.0),
            ]),
        },
        Vendor {
            id: VendorId::new("securew2"),
            name: String::from("SecureW2"),
            pricing_model: PricingModel::PerDeviceSubscription,
            base_cost: 5_000.0,
            per_user_cost: 36.0,
            setup_cost: 10_000.0,
            annual_discount: 5.0,
            hardware_cost: 0.0,
            infrastructure_cost: 0.0,
            breach_risk_reduction: 60.0,
            feature_scores: scores(&[
                ("automation", 7),
                ("byod", 8),
                ("cloud_native", 8),
                ("iot_visibility", 4),
                ("zero_trust", 6),
            ]),
            compliance_scores: scores(&[
                ("GDPR", 70.0),
                ("HIPAA", 72.0),
                ("ISO27001", 75.0),
                ("PCI-DSS", 74.0),
            ]),
        },
        Vendor {
            id: VendorId::new("foxpass"),
            name: String::from("Foxpass"),
            pricing_model: PricingModel::PerDeviceSubscription,
            base_cost: 2_000.0,
            per_user_cost: 30.0,
            setup_cost: 5_000.0,
            annual_discount: 0.0,
            hardware_cost: 0.0,
            infrastructure_cost: 0.0,
            breach_risk_reduction: 55.0,
            feature_scores: scores(&[
                ("automation", 6),
                ("byod", 6),
                ("cloud_native", 8),
                ("iot_visibility", 3),
                ("zero_trust", 5),
            ]),
            compliance_scores: scores(&[("ISO27001", 70.0), ("SOC2", 72.0)]),
        },
    ]
}
