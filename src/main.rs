//! BSSID Counter — Main Entry Point
//!
//! Hexagonal architecture with a single blocking control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  WifiScanner       HardwareAdapter          LogEventSink       │
//! │  (ScanPort)        (LampPort+DisplayPort)   (EventSink)        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Aggregator (filter · DeviceRegistry) · Presenter      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  loop { scan → aggregate → present → idle }                    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On ESP-IDF this drives the real radio, GPIO lamps and OLED.  On any
//! other target it runs the same loop against simulated peripherals.
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use bssid_counter::adapters::log_sink::LogEventSink;
use bssid_counter::app::ports::{DisplayPort, LampPort, ScanPort};
use bssid_counter::app::service::AppService;
use bssid_counter::config::SystemConfig;

// ── Main (device) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn main() -> Result<()> {
    use bssid_counter::adapters::hardware::HardwareAdapter;
    use bssid_counter::adapters::wifi::WifiScanner;
    use bssid_counter::drivers::hw_init;
    use bssid_counter::drivers::lamps::LampBank;
    use bssid_counter::drivers::oled::Ssd1306;
    use bssid_counter::error::Error;
    use bssid_counter::{diagnostics, pins};
    use esp_idf_hal::i2c::I2cDriver;
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use log::warn;

    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    banner();
    diagnostics::install_panic_handler();

    // ── 2. Build-time config ──────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;

    // ── 3. Outputs (only the enabled channels are touched) ────
    let lamps: Option<LampBank<hw_init::LampPin>> = if config.lamps_enabled {
        let lines = hw_init::lamp_pins(&config.lamp_gpios)?;
        Some(LampBank::new(lines).map_err(Error::from)?)
    } else {
        None
    };

    let display: Option<Ssd1306<I2cDriver<'static>>> = if config.display_enabled {
        let bus = hw_init::oled_bus(peripherals.i2c0)?;
        let mut oled = Ssd1306::new(bus, pins::OLED_I2C_ADDR);
        match oled.init() {
            Ok(()) => Some(oled),
            Err(e) => {
                warn!("OLED init failed ({}), continuing without display", e);
                None
            }
        }
    } else {
        None
    };

    // ── 4. Radio ──────────────────────────────────────────────
    let mut scanner = WifiScanner::new(peripherals.modem, sysloop).map_err(Error::from)?;
    let mut hw = HardwareAdapter::new(lamps, display);

    run(config, &mut scanner, &mut hw)
}

// ── Main (host simulator) ─────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
fn main() -> Result<()> {
    use bssid_counter::adapters::hardware::HardwareAdapter;
    use bssid_counter::adapters::wifi::WifiScanner;
    use bssid_counter::drivers::lamps::LampBank;
    use bssid_counter::drivers::oled::Ssd1306;
    use bssid_counter::drivers::sim::{SimI2c, SimPin};
    use bssid_counter::error::Error;
    use bssid_counter::{diagnostics, pins};

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
    banner();
    diagnostics::install_panic_handler();

    let config = SystemConfig::default();
    config.validate()?;

    let lamps = if config.lamps_enabled {
        let lines = config.lamp_gpios.iter().map(|&gpio| SimPin::new(gpio));
        Some(LampBank::new(lines).map_err(Error::from)?)
    } else {
        None
    };

    let display = if config.display_enabled {
        let mut oled = Ssd1306::new(SimI2c::new(), pins::OLED_I2C_ADDR);
        oled.init().map_err(Error::from)?;
        Some(oled)
    } else {
        None
    };

    let mut scanner = WifiScanner::new();
    let mut hw = HardwareAdapter::new(lamps, display);

    run(config, &mut scanner, &mut hw)
}

// ── Control loop ──────────────────────────────────────────────

fn banner() {
    info!("╔══════════════════════════════════════╗");
    info!("║  BSSID Counter v{}                ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
}

/// Scan → aggregate → present → idle, forever.  Only a power cycle stops it.
fn run(
    config: SystemConfig,
    scanner: &mut impl ScanPort,
    hw: &mut (impl LampPort + DisplayPort),
) -> ! {
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config);
    app.start(&mut sink);

    info!("System ready. Entering scan loop.");

    loop {
        app.cycle(scanner, hw, &mut sink);
        idle(app.cycle_delay());
    }
}

#[cfg(target_os = "espidf")]
fn idle(delay: core::time::Duration) {
    esp_idf_hal::delay::FreeRtos::delay_ms(delay.as_millis() as u32);
}

#[cfg(not(target_os = "espidf"))]
fn idle(delay: core::time::Duration) {
    std::thread::sleep(delay);
}
