//! System configuration parameters
//!
//! Everything here is fixed at build time.  There is no runtime
//! configuration surface: no NVS, no command line, no environment.
//! Edit the defaults (or `pins`) and reflash.

use serde::{Deserialize, Serialize};

use crate::app::model::AddressPrefix;
use crate::error::{Error, Result};
use crate::pins;

/// BSSID filter: only access points whose first three octets equal these
/// are counted.  Octets are hex, so `1A:2B:3C:4D:5E:6F` becomes
/// `[0x1A, 0x2B, 0x3C]`.
pub const ADDRESS_PREFIX: AddressPrefix = AddressPrefix::new([0x00, 0x0D, 0x97]);

/// Show the count on the discrete lamps wired to [`pins::LAMP_GPIOS`].
pub const LAMPS_ENABLED: bool = true;
/// Show the count on the OLED.
pub const DISPLAY_ENABLED: bool = true;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Filter ---
    pub address_prefix: AddressPrefix,

    // --- Lamps ---
    /// Output lines in lighting order.
    pub lamp_gpios: heapless::Vec<i32, { pins::MAX_LAMPS }>,
    pub lamps_enabled: bool,

    // --- Display ---
    pub display_enabled: bool,
    /// Left edge of the count sentence (pixels)
    pub display_x: u32,
    /// Top edge of the count sentence (pixels)
    pub display_y: u32,
    /// Wrap width of the count sentence (pixels)
    pub display_max_width: u32,

    // --- Timing ---
    /// Idle wait between cycles (milliseconds)
    pub cycle_delay_ms: u32,
    /// Emit a registry report every N cycles (0 = never)
    pub registry_report_interval_cycles: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut lamp_gpios = heapless::Vec::new();
        for &gpio in &pins::LAMP_GPIOS {
            // LAMP_COUNT <= MAX_LAMPS is asserted at compile time in `pins`.
            let _ = lamp_gpios.push(gpio);
        }

        Self {
            // Filter
            address_prefix: ADDRESS_PREFIX,

            // Lamps
            lamp_gpios,
            lamps_enabled: LAMPS_ENABLED,

            // Display
            display_enabled: DISPLAY_ENABLED,
            display_x: 0,
            display_y: 8,
            display_max_width: pins::OLED_WIDTH,

            // Timing
            cycle_delay_ms: 100,
            registry_report_interval_cycles: 100, // ~10 s at the default delay
        }
    }
}

impl SystemConfig {
    /// Load-time sanity check; `main` refuses to start on failure.
    pub fn validate(&self) -> Result<()> {
        if self.lamps_enabled && self.lamp_gpios.is_empty() {
            return Err(Error::Config("lamps enabled but no lamp GPIOs configured"));
        }
        if self.cycle_delay_ms == 0 {
            return Err(Error::Config("cycle_delay_ms must be non-zero"));
        }
        if self.display_x.saturating_add(self.display_max_width) > pins::OLED_WIDTH {
            return Err(Error::Config("text box exceeds panel width"));
        }
        if self.display_y >= pins::OLED_HEIGHT {
            return Err(Error::Config("text origin below panel"));
        }
        Ok(())
    }

    /// Number of lamp lines this build drives.
    pub fn lamp_count(&self) -> usize {
        if self.lamps_enabled { self.lamp_gpios.len() } else { 0 }
    }
}
