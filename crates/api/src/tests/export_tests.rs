// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nac_tco_domain::VendorCatalog;

use crate::{
    CalculateRequest, CalculateResponse, SensitivityResponse, calculate, export_csv,
    export_sensitivity_csv, sensitivity,
};

use super::helpers::{create_sensitivity_request, create_test_catalog, create_valid_request};

const HEADER: &str = "vendor_id,name,pricing_model,licenses,maintenance,implementation,operations,hardware,infrastructure,total_tco,savings,roi,payback_period_months,risk_reduction,compliance_gaps";

#[test]
fn test_export_has_header_and_one_row_per_vendor() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut request: CalculateRequest = create_valid_request();
    request.selected_vendors = vec![
        String::from("portnox"),
        String::from("cisco"),
        String::from("juniper"),
    ];
    let results: CalculateResponse = calculate(&catalog, &request).unwrap();

    let csv: String = export_csv(&results).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("portnox,Portnox CLEAR,per-device-subscription,"));
    assert!(lines[2].starts_with("cisco,Cisco ISE,perpetual-license,"));
    assert!(lines[3].starts_with("juniper,"));
}

#[test]
fn test_export_round_trips_through_csv_reader() {
    let catalog: VendorCatalog = create_test_catalog();
    let results: CalculateResponse = calculate(&catalog, &create_valid_request()).unwrap();

    let csv: String = export_csv(&results).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(records.len(), results.vendor_results.len());
    for (record, result) in records.iter().zip(&results.vendor_results) {
        let total: f64 = record[9].parse().unwrap();
        assert!((total - result.total_tco).abs() < 1e-6);
    }
    // cisco is the ROI anchor: no ROI, no payback.
    assert_eq!(&records[1][11], "");
    assert_eq!(&records[1][12], "");
}

#[test]
fn test_export_joins_compliance_gaps() {
    let catalog: VendorCatalog = create_test_catalog();
    let mut request: CalculateRequest = create_valid_request();
    request.selected_vendors = vec![String::from("foxpass")];
    let results: CalculateResponse = calculate(&catalog, &request).unwrap();

    let csv: String = export_csv(&results).unwrap();

    // healthcare requires HIPAA, PCI-DSS and ISO27001; foxpass covers ISO27001 at 70.
    assert!(csv.lines().nth(1).unwrap().ends_with(",HIPAA;PCI-DSS;ISO27001"));
}

#[test]
fn test_sensitivity_export_has_one_column_per_vendor() {
    let catalog: VendorCatalog = create_test_catalog();
    let response: SensitivityResponse =
        sensitivity(&catalog, &create_sensitivity_request()).unwrap();

    let csv: String = export_sensitivity_csv(&response).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "device_count,portnox,cisco,lowest_tco_vendor_id");
    assert!(lines[1].starts_with("100,"));
    assert!(lines[4].starts_with("1000,"));
    assert!(lines[4].ends_with(",portnox"));
}
