// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use nac_tco_domain::VendorCatalog;
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::{CalculateRequest, CostParametersInput, ResultCache, SensitivityRequest};

pub fn create_test_catalog() -> VendorCatalog {
    VendorCatalog::builtin().unwrap()
}

pub fn create_valid_request() -> CalculateRequest {
    CalculateRequest {
        selected_vendors: vec![String::from("portnox"), String::from("cisco")],
        device_count: 500,
        years_to_project: 3,
        industry: String::from("healthcare"),
        org_size: Some(String::from("medium")),
        cost_parameters: CostParametersInput::default(),
        baseline_vendor: None,
    }
}

/// Device-count sweep over the valid request: 100, 400, 700, 1000.
pub fn create_sensitivity_request() -> SensitivityRequest {
    SensitivityRequest {
        calculation: create_valid_request(),
        variable: String::from("device_count"),
        min: 100.0,
        max: 1_000.0,
        steps: 4,
    }
}

pub fn create_test_cache() -> ResultCache {
    ResultCache::new(Duration::minutes(5))
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}
