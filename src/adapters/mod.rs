//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                  |
//! |------------|--------------|------------------------------|
//! | `hardware` | LampPort     | GPIO lamp bank               |
//! |            | DisplayPort  | SSD1306 OLED over I²C        |
//! | `log_sink` | EventSink    | Serial log output            |
//! | `wifi`     | ScanPort     | ESP-IDF WiFi STA (scan only) |

pub mod hardware;
pub mod log_sink;
pub mod wifi;
