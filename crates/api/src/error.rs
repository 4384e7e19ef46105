// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use nac_tco::CalculationError;
use nac_tco_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/engine errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DuplicateVendor(vendor_id) => ApiError::InvalidInput {
            field: String::from("vendors"),
            message: format!("Vendor '{vendor_id}' appears more than once in the catalog"),
        },
        DomainError::InvalidVendor {
            vendor_id,
            field,
            reason,
        } => ApiError::InvalidInput {
            field: format!("{vendor_id}.{field}"),
            message: reason,
        },
        DomainError::CatalogParse(msg) => ApiError::InvalidInput {
            field: String::from("catalog"),
            message: msg,
        },
        DomainError::UnknownIndustry(industry) => ApiError::InvalidInput {
            field: String::from("industry"),
            message: format!("Unknown industry '{industry}'"),
        },
        DomainError::UnknownOrgSize(size) => ApiError::InvalidInput {
            field: String::from("org_size"),
            message: format!("Unknown organization size '{size}'"),
        },
        DomainError::UnknownPricingModel(model) => ApiError::InvalidInput {
            field: String::from("pricing_model"),
            message: format!("Unknown pricing model '{model}'"),
        },
    }
}

/// Translates an engine error into an API error.
///
/// Unknown vendors become `ResourceNotFound`; everything else is invalid input.
#[must_use]
pub fn translate_calculation_error(err: CalculationError) -> ApiError {
    match err {
        CalculationError::Validation { field, reason } => ApiError::InvalidInput {
            field,
            message: reason,
        },
        CalculationError::UnknownVendor(vendor_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Vendor"),
            message: format!("Vendor '{vendor_id}' does not exist"),
        },
    }
}
