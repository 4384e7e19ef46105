// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nac_tco_domain::{CalculationResults, ExecutiveSummary, VendorId, VendorResult};

/// Renders a plain-text narrative of a calculation from fixed templates.
///
/// The output is deterministic: the same results always produce the same text.
#[must_use]
pub fn generate_summary(results: &CalculationResults) -> String {
    let summary: &ExecutiveSummary = &results.executive_summary;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "TCO analysis of {} vendor(s) over {} year(s) for {} devices in {} ({} organization).",
        results.vendor_results.len(),
        results.years_to_project,
        results.device_count,
        results.industry,
        results.org_size,
    ));

    if let Some(lowest) = results.vendor_result(&summary.lowest_tco_vendor_id) {
        lines.push(format!(
            "Lowest total cost: {} at {:.2}.",
            lowest.name, lowest.total_tco
        ));
    }

    if !results.comparison_results.is_empty() {
        lines.push(savings_line(
            display_name(results, &summary.baseline_vendor_id),
            summary.total_savings,
        ));
    }

    let anchor: &str = display_name(results, &summary.roi_anchor_vendor_id);
    match positive_roi(results, summary) {
        Some((best, roi)) => {
            let payback: String = best
                .payback_period_months
                .map(|months| format!(", paying back in {months:.1} months"))
                .unwrap_or_default();
            lines.push(format!(
                "Best ROI: {} at {roi:.1}% against {anchor}{payback}.",
                best.name
            ));
        }
        None => lines.push(format!("No vendor returns a positive ROI against {anchor}.")),
    }

    lines.push(format!(
        "Average breach risk reduction: {:.1}%. Estimated annual risk avoided: {:.2}.",
        summary.avg_risk_reduction, summary.annual_risk_avoided,
    ));

    if summary.total_compliance_gaps == 0 {
        lines.push(format!(
            "Every vendor covers the frameworks required in {}.",
            results.industry
        ));
    } else {
        lines.push(format!(
            "Compliance gaps: {} across all vendors.",
            summary.total_compliance_gaps
        ));
        lines.extend(
            results
                .vendor_results
                .iter()
                .filter(|r| !r.compliance_gaps.is_empty())
                .map(|r| format!("  {}: {}", r.name, r.compliance_gaps.join(", "))),
        );
    }

    lines.join("\n")
}

/// Describes the combined comparison savings from the baseline's side when
/// the baseline is cheaper, and from the other vendors' side otherwise.
fn savings_line(baseline: &str, total_savings: f64) -> String {
    if total_savings > 0.0 {
        format!("Compared with {baseline}, the other vendors save a combined {total_savings:.2}.")
    } else if total_savings < 0.0 {
        format!(
            "{baseline} costs {:.2} less than the other vendors combined.",
            total_savings.abs()
        )
    } else {
        format!("The other vendors cost the same as {baseline} in total.")
    }
}

fn positive_roi<'a>(
    results: &'a CalculationResults,
    summary: &ExecutiveSummary,
) -> Option<(&'a VendorResult, f64)> {
    let best: &VendorResult = results.vendor_result(summary.best_roi_vendor_id.as_ref()?)?;
    best.roi.filter(|roi| *roi > 0.0).map(|roi| (best, roi))
}

fn display_name<'a>(results: &'a CalculationResults, vendor_id: &'a VendorId) -> &'a str {
    results
        .vendor_result(vendor_id)
        .map_or_else(|| vendor_id.value(), |result| result.name.as_str())
}
