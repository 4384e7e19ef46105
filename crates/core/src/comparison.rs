// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nac_tco_domain::{ComparisonResult, VendorResult};

/// Compares every vendor except the baseline against the baseline.
///
/// Results keep selection order. The baseline is never compared with itself.
pub(crate) fn compare_with_baseline(
    vendor_results: &[VendorResult],
    baseline_index: usize,
) -> Vec<ComparisonResult> {
    let baseline: &VendorResult = &vendor_results[baseline_index];

    vendor_results
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != baseline_index)
        .map(|(_, other)| {
            let savings: f64 = baseline.total_tco - other.total_tco;
            let savings_percentage: Option<f64> = if savings == 0.0 {
                Some(0.0)
            } else if baseline.total_tco == 0.0 {
                None
            } else {
                Some(savings / baseline.total_tco * 100.0)
            };

            ComparisonResult {
                vendor_id: other.vendor_id.clone(),
                baseline_vendor_id: baseline.vendor_id.clone(),
                savings,
                savings_percentage,
            }
        })
        .collect()
}
