//! Runtime diagnostics.
//!
//! The registry is never shown on the outputs, but a periodic digest of it
//! goes to the serial log so signal strengths can be read off a laptop
//! while walking around with the board.  A panic hook makes sure the reason
//! reaches the same log before the reset.

use serde::{Deserialize, Serialize};

use crate::app::model::MacString;
use crate::app::registry::DeviceRegistry;

/// One registry entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedDevice {
    pub address: MacString,
    pub magnitude: u32,
}

/// Registry digest.  Lower magnitude = stronger signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryReport {
    /// Cycles completed when the report was taken.
    pub cycles: u64,
    /// Distinct matching addresses ever seen.
    pub tracked: usize,
    pub strongest: Option<TrackedDevice>,
    pub weakest: Option<TrackedDevice>,
}

impl RegistryReport {
    pub fn collect(cycles: u64, registry: &DeviceRegistry) -> Self {
        // Ties broken on address so the report is stable across runs.
        let strongest = registry
            .iter()
            .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
            .and_then(|(a, m)| Self::entry(a, m));
        let weakest = registry
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .and_then(|(a, m)| Self::entry(a, m));

        Self {
            cycles,
            tracked: registry.len(),
            strongest,
            weakest,
        }
    }

    fn entry(address: &str, magnitude: u32) -> Option<TrackedDevice> {
        let mut a = MacString::new();
        a.push_str(address).ok()?;
        Some(TrackedDevice {
            address: a,
            magnitude,
        })
    }

    /// Single-line JSON for the serial log.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

// ───────────────────────────────────────────────────────────────
// Panic hook
// ───────────────────────────────────────────────────────────────

/// Install a panic hook that logs the reason before the default handler
/// resets the board.  Call once during init, after the logger.
pub fn install_panic_handler() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        match info.location() {
            Some(loc) => log::error!("PANIC: {} at {}:{}", reason, loc.file(), loc.line()),
            None => log::error!("PANIC: {}", reason),
        }

        default_hook(info);
    }));
}
