// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nac_tco::CalculationError;
use nac_tco_domain::DomainError;

use crate::{ApiError, translate_calculation_error, translate_domain_error};

#[test]
fn test_validation_error_becomes_invalid_input() {
    let err: ApiError = translate_calculation_error(CalculationError::Validation {
        field: String::from("device_count"),
        reason: String::from("must be greater than zero"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("device_count"),
            message: String::from("must be greater than zero"),
        }
    );
}

#[test]
fn test_unknown_vendor_becomes_not_found() {
    let err: ApiError =
        translate_calculation_error(CalculationError::UnknownVendor(String::from("ghost")));

    assert_eq!(err.to_string(), "Vendor not found: Vendor 'ghost' does not exist");
}

#[test]
fn test_invalid_vendor_field_is_qualified_by_vendor() {
    let err: ApiError = translate_domain_error(DomainError::InvalidVendor {
        vendor_id: String::from("acme"),
        field: String::from("base_cost"),
        reason: String::from("must be a finite, non-negative amount, got -1"),
    });

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "acme.base_cost"
    ));
}

#[test]
fn test_catalog_parse_error_becomes_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::CatalogParse(String::from("eof")));

    assert_eq!(err.to_string(), "Invalid input for field 'catalog': eof");
}
