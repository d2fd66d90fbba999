use airscout_core::{
    AccessPointRecord, AuthMode, Bssid, CipherSuite, DriverError, DriverOp, PhyMode, ScanDriver,
    ScanOutcome, ScanRequest, Ssid,
};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{
    AccessPointInfo, AuthMethod, Config as WifiConfig, ScanConfig, WifiController, WifiMode,
};
use static_cell::make_static;

/// Bring up the radio controller and hand back a scan driver.
///
/// Allocates driver resources (control structures, RX/TX buffers) once;
/// the scan loop starts and stops the radio itself on every cycle.
pub fn init_wifi(wifi_device: WIFI<'static>) -> Result<EspScanDriver, DriverError> {
    let ctrl = esp_radio::init().map_err(|_| DriverError::new(DriverOp::Init))?;
    let esp_radio_ctrl = &*make_static!(ctrl);

    let (controller, _interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, WifiConfig::default())
            .map_err(|_| DriverError::new(DriverOp::Init))?;

    Ok(EspScanDriver { controller })
}

/// [`ScanDriver`] implementation over the esp-radio station-mode API.
pub struct EspScanDriver {
    controller: WifiController<'static>,
}

impl ScanDriver for EspScanDriver {
    async fn power_on(&mut self) -> Result<(), DriverError> {
        self.controller
            .set_mode(WifiMode::Sta)
            .map_err(|_| DriverError::new(DriverOp::SetMode))?;
        self.controller
            .start_async()
            .await
            .map_err(|_| DriverError::new(DriverOp::Start))?;
        Ok(())
    }

    async fn scan(
        &mut self,
        request: &ScanRequest,
        out: &mut [AccessPointRecord],
    ) -> Result<ScanOutcome, DriverError> {
        let scan_config = ScanConfig::default().with_show_hidden(request.include_hidden);
        let found = self
            .controller
            .scan_with_config_async(scan_config)
            .await
            .map_err(|_| DriverError::new(DriverOp::Scan))?;

        let stored = found.len().min(out.len());
        for (slot, info) in out.iter_mut().zip(found.iter()) {
            *slot = record_from_info(info);
        }

        Ok(ScanOutcome {
            stored,
            total: u16::try_from(found.len()).unwrap_or(u16::MAX),
        })
    }

    async fn power_off(&mut self) -> Result<(), DriverError> {
        self.controller
            .stop_async()
            .await
            .map_err(|_| DriverError::new(DriverOp::Stop))?;
        Ok(())
    }
}

/// Map the HAL's scan record into the core data model.
///
/// The safe scan API does not surface cipher suites or phy capability
/// flags; those fields stay `Unknown`.
// TODO: populate ciphers and phy mode from the raw scan records once
// esp-radio exposes them.
fn record_from_info(info: &AccessPointInfo) -> AccessPointRecord {
    let mut ssid = Ssid::new();
    // SSIDs are at most 32 bytes on air; truncate defensively.
    for ch in info.ssid.chars() {
        if ssid.push(ch).is_err() {
            break;
        }
    }

    AccessPointRecord {
        ssid,
        bssid: Bssid(info.bssid),
        rssi: info.signal_strength,
        channel: info.channel,
        auth_mode: info.auth_method.map_or(AuthMode::Unknown, auth_from_method),
        pairwise_cipher: CipherSuite::Unknown,
        group_cipher: CipherSuite::Unknown,
        phy_mode: PhyMode::Unknown,
    }
}

fn auth_from_method(method: AuthMethod) -> AuthMode {
    match method {
        AuthMethod::None => AuthMode::Open,
        AuthMethod::Wep => AuthMode::Wep,
        AuthMethod::Wpa => AuthMode::WpaPsk,
        AuthMethod::Wpa2Personal => AuthMode::Wpa2Psk,
        AuthMethod::WpaWpa2Personal => AuthMode::WpaWpa2Psk,
        AuthMethod::Wpa2Enterprise => AuthMode::Wpa2Enterprise,
        AuthMethod::Wpa3Personal => AuthMode::Wpa3Psk,
        AuthMethod::Wpa2Wpa3Personal => AuthMode::Wpa2Wpa3Psk,
        _ => AuthMode::Unknown,
    }
}
