//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC on the board, stderr in the simulator).  The scan and
//! count lines at `info` keep the legacy serial wording exactly, so existing
//! captures still read the same.  Extra detail (filter hits, cycle numbers,
//! registry changes) goes to separate `debug` lines.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::app::registry::RegistryChange;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                prefix,
                lamps,
                display,
            } => {
                info!(
                    "START | filter={} | lamps={} | display={}",
                    prefix,
                    lamps,
                    if *display { "on" } else { "off" }
                );
            }
            AppEvent::ScanEmpty => {
                info!("No WiFi devices in AP Mode found");
            }
            AppEvent::ScanSummary { found } => {
                info!("Found {} devices.", found);
            }
            AppEvent::NetworkSeen {
                index,
                network,
                matched,
            } => {
                info!(
                    "{}: {} - {} ({})",
                    index, network.ssid, network.bssid, network.rssi
                );
                if *matched {
                    debug!("FILTER | #{} {} passed", index, network.bssid);
                }
            }
            AppEvent::DeviceTracked {
                address,
                magnitude,
                change,
            } => match change {
                RegistryChange::Inserted => debug!("TRACK | new {} |{}|", address, magnitude),
                RegistryChange::Updated { previous } => {
                    debug!("TRACK | {} |{}| -> |{}|", address, previous, magnitude);
                }
                RegistryChange::Unchanged => {}
            },
            AppEvent::CycleCompleted { cycle, count } => {
                info!("Counted {} devices.", count);
                debug!("CYCLE | {} complete", cycle);
            }
            AppEvent::RegistryReport(report) => {
                info!("REGISTRY | {}", report.to_json());
            }
        }
    }
}
