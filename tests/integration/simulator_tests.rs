//! Integration tests for the host simulator stack.
//!
//! Same wiring as `main` off-target: simulated radio, simulated GPIO and
//! I²C under the real lamp and OLED drivers, events to the log sink.

use bssid_counter::adapters::hardware::HardwareAdapter;
use bssid_counter::adapters::log_sink::LogEventSink;
use bssid_counter::adapters::wifi::WifiScanner;
use bssid_counter::app::service::AppService;
use bssid_counter::config::SystemConfig;
use bssid_counter::drivers::lamps::LampBank;
use bssid_counter::drivers::oled::Ssd1306;
use bssid_counter::drivers::sim::{SimI2c, SimPin};
use bssid_counter::pins;

fn board(config: &SystemConfig) -> HardwareAdapter<SimPin, SimI2c> {
    let lamps = LampBank::new(config.lamp_gpios.iter().map(|&g| SimPin::new(g))).unwrap();
    let mut oled = Ssd1306::new(SimI2c::new(), pins::OLED_I2C_ADDR);
    oled.init().unwrap();
    HardwareAdapter::new(Some(lamps), Some(oled))
}

#[test]
fn simulated_run_counts_only_prefixed_aps() {
    let config = SystemConfig::default();
    let mut hw = board(&config);
    let mut app = AppService::new(config);
    let mut scanner = WifiScanner::new();
    let mut sink = LogEventSink::new();
    app.start(&mut sink);

    let counts: Vec<u32> = (0..10)
        .map(|_| app.cycle(&mut scanner, &mut hw, &mut sink))
        .collect();

    // Two to three of the six simulated APs carry the prefix.
    assert!(counts[..9].iter().all(|c| (2..=3).contains(c)), "{counts:?}");
    // Scan #10 comes back empty.
    assert_eq!(counts[9], 0);
    assert_eq!(hw.lamps().unwrap().states(), &[false, false, false]);

    assert_eq!(app.registry().len(), 3);
    assert!(
        app.registry()
            .iter()
            .all(|(address, _)| address.starts_with("00:0D:97:"))
    );
    assert_eq!(scanner.scans(), 10);
}

#[test]
fn simulated_display_shows_the_sentence() {
    let config = SystemConfig::default();
    let mut hw = board(&config);
    let mut app = AppService::new(config);
    let mut scanner = WifiScanner::new();
    let mut sink = LogEventSink::new();

    let count = app.cycle(&mut scanner, &mut hw, &mut sink);

    assert!(count >= 2);
    let oled = hw.display().unwrap();
    assert!(oled.is_initialised());
    // Left stroke of the "F" in "Found" at the configured origin.
    assert!(oled.pixel(0, 8));
    assert!(!oled.pixel(0, 0), "nothing above the text origin");
}
