//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) and its components emit
//! these through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them; the stock one writes
//! them to the serial log.

use crate::diagnostics::RegistryReport;

use super::model::{AddressPrefix, CycleCount, DiscoveredNetwork, MacString};
use super::registry::RegistryChange;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started.
    Started {
        prefix: AddressPrefix,
        lamps: usize,
        display: bool,
    },

    /// The scan returned nothing.
    ScanEmpty,

    /// The scan returned `found` access points (before filtering).
    ScanSummary { found: usize },

    /// One scan record, 1-based `index` in scan order.
    NetworkSeen {
        index: usize,
        network: DiscoveredNetwork,
        matched: bool,
    },

    /// A matching address was inserted into or updated in the registry.
    DeviceTracked {
        address: MacString,
        magnitude: u32,
        change: RegistryChange,
    },

    /// A full scan → aggregate → present cycle finished.
    CycleCompleted { cycle: u64, count: CycleCount },

    /// Periodic registry digest.
    RegistryReport(RegistryReport),
}
