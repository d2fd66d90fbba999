//! Tests for vendor code decoding and display labels.

use airscout_core::{AuthMode, Bssid, CipherSuite, PhyMode};

// -----------------------------------------------------------------------------
// Authentication modes
// -----------------------------------------------------------------------------

#[test]
fn auth_codes_map_to_documented_labels() {
    let cases = [
        (0, "WIFI_AUTH_OPEN"),
        (1, "WIFI_AUTH_WEP"),
        (2, "WIFI_AUTH_WPA_PSK"),
        (3, "WIFI_AUTH_WPA2_PSK"),
        (4, "WIFI_AUTH_WPA_WPA2_PSK"),
        (5, "WIFI_AUTH_WPA2_ENTERPRISE"),
        (6, "WIFI_AUTH_WPA3_PSK"),
        (7, "WIFI_AUTH_WPA2_WPA3_PSK"),
    ];

    for (code, label) in cases {
        assert_eq!(AuthMode::from_code(code).label(), label);
    }
}

#[test]
fn out_of_range_auth_codes_decode_as_unknown() {
    for code in 8..=u8::MAX {
        assert_eq!(AuthMode::from_code(code), AuthMode::Unknown);
    }
    assert_eq!(AuthMode::Unknown.label(), "WIFI_AUTH_UNKNOWN");
}

// -----------------------------------------------------------------------------
// Cipher suites
// -----------------------------------------------------------------------------

#[test]
fn cipher_codes_map_to_documented_labels() {
    let cases = [
        (0, "WIFI_CIPHER_TYPE_NONE"),
        (1, "WIFI_CIPHER_TYPE_WEP40"),
        (2, "WIFI_CIPHER_TYPE_WEP104"),
        (3, "WIFI_CIPHER_TYPE_TKIP"),
        (4, "WIFI_CIPHER_TYPE_CCMP"),
        (5, "WIFI_CIPHER_TYPE_TKIP_CCMP"),
    ];

    for (code, label) in cases {
        assert_eq!(CipherSuite::from_code(code).label(), label);
    }
}

#[test]
fn out_of_range_cipher_codes_decode_as_unknown() {
    for code in 6..=u8::MAX {
        assert_eq!(CipherSuite::from_code(code), CipherSuite::Unknown);
    }
    assert_eq!(CipherSuite::Unknown.label(), "WIFI_CIPHER_TYPE_UNKNOWN");
}

// -----------------------------------------------------------------------------
// Phy modes and hardware addresses
// -----------------------------------------------------------------------------

#[test]
fn phy_flags_prefer_n_over_g_over_b() {
    assert_eq!(PhyMode::from_flags(true, true, true), PhyMode::N);
    assert_eq!(PhyMode::from_flags(false, true, true), PhyMode::N);
    assert_eq!(PhyMode::from_flags(true, true, false), PhyMode::G);
    assert_eq!(PhyMode::from_flags(true, false, false), PhyMode::B);
    assert_eq!(PhyMode::from_flags(false, false, false), PhyMode::Unknown);
}

#[test]
fn phy_labels() {
    assert_eq!(PhyMode::N.label(), "11n");
    assert_eq!(PhyMode::G.label(), "11g");
    assert_eq!(PhyMode::B.label(), "11b");
    assert_eq!(PhyMode::Unknown.label(), "unknown");
}

#[test]
fn bssid_renders_colon_delimited_hex() {
    let bssid = Bssid([0xde, 0xad, 0xbe, 0xef, 0x00, 0x42]);
    assert_eq!(bssid.to_string(), "de:ad:be:ef:00:42");
}
