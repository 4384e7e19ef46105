// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building the vendor catalog or parsing lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Two catalog entries share the same vendor id.
    #[error("Vendor '{0}' appears more than once in the catalog")]
    DuplicateVendor(String),
    /// A vendor record violates a field constraint.
    #[error("Invalid vendor '{vendor_id}': field '{field}' {reason}")]
    InvalidVendor {
        /// The vendor whose record is invalid.
        vendor_id: String,
        /// The offending field.
        field: String,
        /// Why the field was rejected.
        reason: String,
    },
    /// The catalog source could not be parsed.
    #[error("Failed to parse vendor catalog: {0}")]
    CatalogParse(String),
    /// Industry key is not one of the known industries.
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),
    /// Organization size key is not one of the known sizes.
    #[error("Unknown organization size: {0}")]
    UnknownOrgSize(String),
    /// Pricing model key is not one of the known models.
    #[error("Unknown pricing model: {0}")]
    UnknownPricingModel(String),
}
