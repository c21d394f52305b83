//! Discovery-filter-aggregator.
//!
//! Turns one raw scan into an updated [`DeviceRegistry`] and the number of
//! filter-passing networks in that scan.
//!
//! ```text
//!  ScanPort ──▶ filter (prefix) ──▶ DeviceRegistry
//!                     │
//!                     └──▶ CycleCount
//! ```
//!
//! The count is taken from the current scan only.  A device already in the
//! registry still counts, and registry size plays no part.

use super::model::{AddressPrefix, CycleCount};
use super::events::AppEvent;
use super::ports::{EventSink, ScanPort};
use super::registry::{DeviceRegistry, RegistryChange};

#[derive(Debug, Default)]
pub struct Aggregator {
    registry: DeviceRegistry,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one scan and fold it into the registry.
    ///
    /// Every record whose first three BSSID octets equal `prefix` counts
    /// once, in scan order.  Diagnostics go to `sink` and cannot change the
    /// result.
    pub fn run(
        &mut self,
        prefix: &AddressPrefix,
        scanner: &mut impl ScanPort,
        sink: &mut impl EventSink,
    ) -> CycleCount {
        let networks = scanner.scan();
        let mut matched: CycleCount = 0;

        if networks.is_empty() {
            sink.emit(&AppEvent::ScanEmpty);
        } else {
            sink.emit(&AppEvent::ScanSummary {
                found: networks.len(),
            });
        }

        // Consumed here; the next cycle scans again.
        for (i, network) in networks.into_iter().enumerate() {
            let passes = prefix.matches(&network.bssid);
            let (bssid, magnitude) = (network.bssid, network.magnitude());

            // The network line precedes any registry change it causes.
            sink.emit(&AppEvent::NetworkSeen {
                index: i + 1,
                network,
                matched: passes,
            });

            if passes {
                let change = self.registry.observe(&bssid, magnitude);
                if change != RegistryChange::Unchanged {
                    sink.emit(&AppEvent::DeviceTracked {
                        address: bssid.to_mac_string(),
                        magnitude,
                        change,
                    });
                }
                matched = matched.saturating_add(1);
            }
        }

        matched
    }

    /// Read-only view for diagnostics and tests.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }
}
