//! Access-point data model and vendor code decoding
//!
//! Records are produced fresh by every scan cycle and carry no identity
//! across cycles. The numeric codes decoded here follow the vendor SDK's
//! `wifi_ap_record_t` conventions.

use core::fmt;

/// Maximum SSID length in bytes (802.11 limit).
pub const MAX_SSID_LEN: usize = 32;

/// SSID string type. Empty means the network withholds its name.
pub type Ssid = heapless::String<MAX_SSID_LEN>;

/// Authentication scheme advertised by an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa2Enterprise,
    Wpa3Psk,
    Wpa2Wpa3Psk,
    Unknown,
}

impl AuthMode {
    /// Decode the vendor SDK's numeric authentication mode code.
    ///
    /// Total over `u8`; anything outside the documented range decodes
    /// as [`AuthMode::Unknown`].
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Open,
            1 => Self::Wep,
            2 => Self::WpaPsk,
            3 => Self::Wpa2Psk,
            4 => Self::WpaWpa2Psk,
            5 => Self::Wpa2Enterprise,
            6 => Self::Wpa3Psk,
            7 => Self::Wpa2Wpa3Psk,
            _ => Self::Unknown,
        }
    }

    /// Display label, matching the vendor SDK constant names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "WIFI_AUTH_OPEN",
            Self::Wep => "WIFI_AUTH_WEP",
            Self::WpaPsk => "WIFI_AUTH_WPA_PSK",
            Self::Wpa2Psk => "WIFI_AUTH_WPA2_PSK",
            Self::WpaWpa2Psk => "WIFI_AUTH_WPA_WPA2_PSK",
            Self::Wpa2Enterprise => "WIFI_AUTH_WPA2_ENTERPRISE",
            Self::Wpa3Psk => "WIFI_AUTH_WPA3_PSK",
            Self::Wpa2Wpa3Psk => "WIFI_AUTH_WPA2_WPA3_PSK",
            Self::Unknown => "WIFI_AUTH_UNKNOWN",
        }
    }
}

/// Encryption algorithm for pairwise or group traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    None,
    Wep40,
    Wep104,
    Tkip,
    Ccmp,
    TkipCcmp,
    Unknown,
}

impl CipherSuite {
    /// Decode the vendor SDK's numeric cipher type code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Wep40,
            2 => Self::Wep104,
            3 => Self::Tkip,
            4 => Self::Ccmp,
            5 => Self::TkipCcmp,
            _ => Self::Unknown,
        }
    }

    /// Display label, matching the vendor SDK constant names.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "WIFI_CIPHER_TYPE_NONE",
            Self::Wep40 => "WIFI_CIPHER_TYPE_WEP40",
            Self::Wep104 => "WIFI_CIPHER_TYPE_WEP104",
            Self::Tkip => "WIFI_CIPHER_TYPE_TKIP",
            Self::Ccmp => "WIFI_CIPHER_TYPE_CCMP",
            Self::TkipCcmp => "WIFI_CIPHER_TYPE_TKIP_CCMP",
            Self::Unknown => "WIFI_CIPHER_TYPE_UNKNOWN",
        }
    }
}

/// 802.11 physical mode of an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhyMode {
    B,
    G,
    N,
    Unknown,
}

impl PhyMode {
    /// Decode the per-standard capability flags.
    ///
    /// The flags are not mutually exclusive on air; priority is
    /// n over g over b.
    pub fn from_flags(supports_b: bool, supports_g: bool, supports_n: bool) -> Self {
        if supports_n {
            Self::N
        } else if supports_g {
            Self::G
        } else if supports_b {
            Self::B
        } else {
            Self::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::B => "11b",
            Self::G => "11g",
            Self::N => "11n",
            Self::Unknown => "unknown",
        }
    }
}

/// Hardware address of an access point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bssid(pub [u8; 6]);

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// One discovered access point, as reported by a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPointRecord {
    pub ssid: Ssid,
    pub bssid: Bssid,
    /// Received signal strength indicator, in dBm.
    pub rssi: i8,
    /// Primary channel number.
    pub channel: u8,
    pub auth_mode: AuthMode,
    pub pairwise_cipher: CipherSuite,
    pub group_cipher: CipherSuite,
    pub phy_mode: PhyMode,
}

impl AccessPointRecord {
    /// Whether the network withholds its SSID.
    pub fn is_hidden(&self) -> bool {
        self.ssid.is_empty()
    }
}

impl Default for AccessPointRecord {
    fn default() -> Self {
        Self {
            ssid: Ssid::new(),
            bssid: Bssid::default(),
            rssi: 0,
            channel: 0,
            auth_mode: AuthMode::Unknown,
            pairwise_cipher: CipherSuite::Unknown,
            group_cipher: CipherSuite::Unknown,
            phy_mode: PhyMode::Unknown,
        }
    }
}
