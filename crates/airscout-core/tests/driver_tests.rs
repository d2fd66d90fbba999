//! Tests for the driver port's error diagnostics.

use airscout_core::{DriverError, DriverOp};

#[test]
fn ops_name_the_external_calls() {
    let cases = [
        (DriverOp::Init, "wifi_init"),
        (DriverOp::SetMode, "wifi_set_mode"),
        (DriverOp::Start, "wifi_start"),
        (DriverOp::Scan, "wifi_scan_start"),
        (DriverOp::FetchRecords, "wifi_scan_get_records"),
        (DriverOp::Stop, "wifi_stop"),
    ];

    for (op, name) in cases {
        assert_eq!(op.name(), name);
        assert_eq!(op.to_string(), name);
    }
}

#[test]
fn errors_identify_the_failing_call() {
    let err = DriverError::new(DriverOp::FetchRecords);
    assert_eq!(
        err.to_string(),
        "wifi driver call failed: wifi_scan_get_records"
    );
}
