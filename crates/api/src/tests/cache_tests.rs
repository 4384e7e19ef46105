// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nac_tco_domain::{CalculationParams, CalculationResults, VendorCatalog};
use time::{Duration, OffsetDateTime};

use crate::{
    CalculateRequest, ResultCache, cached_lookup, calculate_params, parse_calculate_request,
    store_result,
};

use super::helpers::{create_test_cache, create_test_catalog, create_valid_request, test_now};

fn params_for(request: &CalculateRequest) -> CalculationParams {
    parse_calculate_request(request).unwrap()
}

fn key_for(request: &CalculateRequest) -> String {
    ResultCache::cache_key(&params_for(request))
}

fn compute_and_store(
    catalog: &VendorCatalog,
    cache: &mut ResultCache,
    params: &CalculationParams,
    now: OffsetDateTime,
) -> CalculationResults {
    let results: CalculationResults = calculate_params(catalog, params).unwrap();
    store_result(cache, params, &results, now).unwrap();
    results
}

#[test]
fn test_lookup_misses_on_empty_cache() {
    let cache: ResultCache = create_test_cache();
    let params: CalculationParams = params_for(&create_valid_request());

    assert!(cached_lookup(&cache, &params, test_now()).unwrap().is_none());
}

#[test]
fn test_stored_result_is_returned_unchanged() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut cache: ResultCache = create_test_cache();
    let params: CalculationParams = params_for(&create_valid_request());

    let fresh: CalculationResults = compute_and_store(&catalog, &mut cache, &params, test_now());
    let cached: CalculationResults = cached_lookup(&cache, &params, test_now())
        .unwrap()
        .unwrap();

    assert_eq!(cache.len(), 1);
    assert_eq!(cached, fresh);
}

#[test]
fn test_entry_is_served_before_expiry() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut cache: ResultCache = create_test_cache();
    let params: CalculationParams = params_for(&create_valid_request());

    compute_and_store(&catalog, &mut cache, &params, test_now());

    let later: OffsetDateTime = test_now() + Duration::minutes(4);
    assert!(cached_lookup(&cache, &params, later).unwrap().is_some());
}

#[test]
fn test_expired_entry_is_not_served() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut cache: ResultCache = create_test_cache();
    let params: CalculationParams = params_for(&create_valid_request());

    compute_and_store(&catalog, &mut cache, &params, test_now());

    let later: OffsetDateTime = test_now() + Duration::minutes(5);
    assert!(cached_lookup(&cache, &params, later).unwrap().is_none());
}

#[test]
fn test_storing_again_refreshes_expiry() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut cache: ResultCache = create_test_cache();
    let params: CalculationParams = params_for(&create_valid_request());

    compute_and_store(&catalog, &mut cache, &params, test_now());
    let later: OffsetDateTime = test_now() + Duration::minutes(10);
    compute_and_store(&catalog, &mut cache, &params, later);

    assert!(
        cached_lookup(&cache, &params, later + Duration::minutes(4))
            .unwrap()
            .is_some()
    );
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_purge_expired_drops_only_stale_entries() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut cache: ResultCache = create_test_cache();
    let first: CalculateRequest = create_valid_request();
    let mut second: CalculateRequest = create_valid_request();
    second.device_count = 1_000;

    compute_and_store(&catalog, &mut cache, &params_for(&first), test_now());
    compute_and_store(
        &catalog,
        &mut cache,
        &params_for(&second),
        test_now() + Duration::minutes(3),
    );

    let purged: usize = cache.purge_expired(test_now() + Duration::minutes(6));

    assert_eq!(purged, 1);
    assert_eq!(cache.len(), 1);
    assert!(
        cache
            .get(&key_for(&second), test_now() + Duration::minutes(6))
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_cache_key_covers_every_input() {
    let base: CalculateRequest = create_valid_request();
    let base_key: String = key_for(&base);

    let mut reordered: CalculateRequest = create_valid_request();
    reordered.selected_vendors.reverse();
    assert_ne!(key_for(&reordered), base_key);

    let mut other_years: CalculateRequest = create_valid_request();
    other_years.years_to_project = 5;
    assert_ne!(key_for(&other_years), base_key);

    let mut other_fte: CalculateRequest = create_valid_request();
    other_fte.cost_parameters.fte_cost = Some(90_000.0);
    assert_ne!(key_for(&other_fte), base_key);

    let mut other_insurance: CalculateRequest = create_valid_request();
    other_insurance.cost_parameters.insurance_reduction = Some(12.0);
    assert_ne!(key_for(&other_insurance), base_key);

    let mut with_baseline: CalculateRequest = create_valid_request();
    with_baseline.baseline_vendor = Some(String::from("portnox"));
    assert_ne!(key_for(&with_baseline), base_key);

    assert_eq!(key_for(&create_valid_request()), base_key);
}
