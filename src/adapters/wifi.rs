//! WiFi scan adapter.
//!
//! Implements [`ScanPort`] — the hexagonal boundary for access-point
//! discovery.  The radio runs in station mode without ever associating;
//! it is only used to scan.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: `EspWifi` behind `BlockingWifi`, started
//!   once with no NVS partition so nothing is persisted.
//! - **all other targets**: a deterministic simulated neighbourhood for the
//!   host simulator.
//!
//! ## Failure policy
//!
//! A failed scan is reported as "no networks" with a single warning from
//! [`ScanPort::scan`]; driver detail goes to `debug`.  The caller never sees
//! an error.

use log::warn;

#[cfg(target_os = "espidf")]
use log::{debug, info};

#[cfg(target_os = "espidf")]
use esp_idf_svc::eventloop::EspSystemEventLoop;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::modem::Modem;
#[cfg(target_os = "espidf")]
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi, config::ScanConfig};

use crate::app::model::{DiscoveredNetwork, MacAddress};
use crate::app::ports::ScanPort;
use crate::error::ScanError;

// ───────────────────────────────────────────────────────────────
// Simulated neighbourhood
// ───────────────────────────────────────────────────────────────

/// (BSSID, SSID, base RSSI).  Three share the default filter prefix.
#[cfg(not(target_os = "espidf"))]
const SIM_NEIGHBOURHOOD: [([u8; 6], &str, i32); 6] = [
    ([0x00, 0x0D, 0x97, 0x3A, 0x10, 0x01], "meter-01", -48),
    ([0xDC, 0xA6, 0x32, 0x01, 0x02, 0x03], "HomeWiFi", -39),
    ([0x00, 0x0D, 0x97, 0x3A, 0x10, 0x02], "meter-02", -71),
    ([0xF4, 0xF5, 0xD8, 0xAA, 0xBB, 0xCC], "", -80),
    ([0x00, 0x0D, 0x97, 0x3A, 0x10, 0x03], "meter-03", -88),
    ([0x3C, 0x84, 0x6A, 0x11, 0x22, 0x33], "CoffeeShop", -62),
];

/// Every Nth simulated scan comes back empty.
#[cfg(not(target_os = "espidf"))]
const SIM_EMPTY_EVERY: u32 = 10;

/// Every Nth simulated scan fails outright.
#[cfg(not(target_os = "espidf"))]
const SIM_FAULT_EVERY: u32 = 25;

// ───────────────────────────────────────────────────────────────
// WiFi scanner
// ───────────────────────────────────────────────────────────────

pub struct WifiScanner {
    #[cfg(target_os = "espidf")]
    wifi: BlockingWifi<EspWifi<'static>>,
    scans: u32,
}

#[cfg(not(target_os = "espidf"))]
impl Default for WifiScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WifiScanner {
    /// Bring the radio up in station mode, ready to scan.
    #[cfg(target_os = "espidf")]
    pub fn new(modem: Modem, sysloop: EspSystemEventLoop) -> Result<Self, ScanError> {
        let radio_err = |e: esp_idf_svc::sys::EspError| {
            log::error!("WiFi: radio start failed: {}", e);
            ScanError::RadioStartFailed
        };

        let esp_wifi = EspWifi::new(modem, sysloop.clone(), None).map_err(radio_err)?;
        let mut wifi = BlockingWifi::wrap(esp_wifi, sysloop).map_err(radio_err)?;
        wifi.set_configuration(&Configuration::Client(ClientConfiguration::default()))
            .map_err(radio_err)?;
        wifi.start().map_err(radio_err)?;
        info!("WiFi: station started for scanning (non-persistent)");

        Ok(Self { wifi, scans: 0 })
    }

    /// Simulated radio.
    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self { scans: 0 }
    }

    /// Scans performed since start-up.
    pub fn scans(&self) -> u32 {
        self.scans
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_scan(&mut self) -> Result<Vec<DiscoveredNetwork>, ScanError> {
        let config = ScanConfig {
            show_hidden: true,
            ..Default::default()
        };
        let wifi = self.wifi.wifi_mut();
        wifi.start_scan(&config, true).map_err(|e| {
            debug!("WiFi: start_scan: {}", e);
            ScanError::ScanFailed
        })?;
        // Fetching the records also frees the driver's copy.
        let aps = wifi.get_scan_result().map_err(|e| {
            debug!("WiFi: get_scan_result: {}", e);
            ScanError::ScanFailed
        })?;

        Ok(aps
            .into_iter()
            .map(|ap| {
                DiscoveredNetwork::new(
                    MacAddress::new(ap.bssid),
                    ap.ssid.as_str(),
                    i32::from(ap.signal_strength),
                )
            })
            .collect())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_scan(&mut self) -> Result<Vec<DiscoveredNetwork>, ScanError> {
        if self.scans % SIM_FAULT_EVERY == 0 {
            return Err(ScanError::ScanFailed);
        }
        if self.scans % SIM_EMPTY_EVERY == 0 {
            return Ok(Vec::new());
        }

        let networks = SIM_NEIGHBOURHOOD
            .iter()
            .enumerate()
            // The weakest AP fades in and out.
            .filter(|(i, (_, _, base))| *base > -85 || (self.scans + *i as u32) % 3 != 0)
            .map(|(i, (bssid, ssid, base))| {
                // ±3 dB drift so the registry sees updates.
                let drift = ((self.scans + i as u32 * 3) % 7) as i32 - 3;
                DiscoveredNetwork::new(MacAddress::new(*bssid), ssid, base + drift)
            })
            .collect();
        Ok(networks)
    }
}

// ───────────────────────────────────────────────────────────────
// ScanPort
// ───────────────────────────────────────────────────────────────

impl ScanPort for WifiScanner {
    fn scan(&mut self) -> Vec<DiscoveredNetwork> {
        self.scans = self.scans.wrapping_add(1);
        match self.platform_scan() {
            Ok(networks) => networks,
            Err(e) => {
                warn!("WiFi: scan #{} failed ({}), treating as empty", self.scans, e);
                Vec::new()
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
