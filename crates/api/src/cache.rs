// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-bounded cache of calculation results.
//!
//! Entries hold the serialized results rather than live values, so a hit
//! always hands the caller a fresh copy. The engine knows nothing about this
//! cache; callers consult it around `calculate_tco`.

use crate::error::ApiError;
use nac_tco_domain::{CalculationParams, CalculationResults, CostParameters};
use std::collections::BTreeMap;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: String,
    expires_at: OffsetDateTime,
}

/// Cache of serialized `CalculationResults` keyed by request.
#[derive(Debug, Clone)]
pub struct ResultCache {
    ttl: Duration,
    entries: BTreeMap<String, CacheEntry>,
}

impl ResultCache {
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the lifetime of new entries.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Builds the key for a request.
    ///
    /// Every input that can change the result is part of the key, including
    /// the order of the selected vendors.
    #[must_use]
    pub fn cache_key(params: &CalculationParams) -> String {
        let vendors: Vec<&str> = params
            .selected_vendors
            .iter()
            .map(nac_tco_domain::VendorId::value)
            .collect();
        let baseline: &str = params
            .baseline_vendor
            .as_ref()
            .map_or("-", nac_tco_domain::VendorId::value);
        let costs: &CostParameters = &params.cost_parameters;
        let discount: String = costs
            .discount_percentage
            .map_or_else(|| String::from("-"), |d| d.to_string());

        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            vendors.join(","),
            baseline,
            params.industry,
            params.org_size,
            params.device_count,
            params.years_to_project,
            costs.fte_cost,
            costs.fte_allocation,
            costs.maintenance_percentage,
            discount,
            costs.downtime_cost_per_hour,
            costs.risk_reduction,
            costs.insurance_reduction,
        )
    }

    /// Returns the cached results for `key` if present and not expired at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if a stored payload cannot be decoded.
    pub fn get(
        &self,
        key: &str,
        now: OffsetDateTime,
    ) -> Result<Option<CalculationResults>, ApiError> {
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => serde_json::from_str(&entry.payload)
                .map(Some)
                .map_err(|e| ApiError::internal(format!("Corrupt cache entry: {e}"))),
            _ => Ok(None),
        }
    }

    /// Stores `results` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the results cannot be serialized.
    pub fn insert(
        &mut self,
        key: String,
        results: &CalculationResults,
        now: OffsetDateTime,
    ) -> Result<(), ApiError> {
        let payload: String = serde_json::to_string(results)
            .map_err(|e| ApiError::internal(format!("Failed to serialize results: {e}")))?;
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    /// Drops every entry expired at `now` and returns how many were dropped.
    pub fn purge_expired(&mut self, now: OffsetDateTime) -> usize {
        let before: usize = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }

    /// Returns the number of stored entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
