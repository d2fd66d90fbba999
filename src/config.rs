//! Compile-time device configuration.

/// Capacity of the per-cycle record buffer.
pub const SCAN_LIST_SIZE: usize = 20;

/// Scan loop parameters.
pub struct ScanSettings {
    /// Maximum entries rendered per cycle.
    pub display_limit: usize,
    /// Pause between scan cycles, in seconds.
    pub interval_secs: u64,
    /// Also request networks that withhold their SSID.
    pub include_hidden: bool,
}

pub struct DeviceConfig {
    pub name: &'static str,
    pub id: &'static str,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

pub const SCAN: ScanSettings = ScanSettings {
    display_limit: 16,
    interval_secs: 10,
    include_hidden: true,
};

pub const DEVICE: DeviceConfig = DeviceConfig {
    name: "AirScout ESP32",
    id: "airscout_esp32",
};

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};
