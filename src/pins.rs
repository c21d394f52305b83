//! GPIO / peripheral pin assignments for the counter board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! Defaults match the MELIFE ESP32 board with the on-board SSD1306 OLED.

// ---------------------------------------------------------------------------
// Indicator lamps
// ---------------------------------------------------------------------------

/// Number of discrete indicator lamps.
pub const LAMP_COUNT: usize = 3;

/// Lamp output lines, lit in this order as the count grows.
/// With {32, 33, 25} and one matching device only GPIO 32 is lit; with two,
/// GPIO 32 and 33.
pub const LAMP_GPIOS: [i32; LAMP_COUNT] = [32, 33, 25];

/// Upper bound on configured lamps (fixed-capacity storage).
pub const MAX_LAMPS: usize = 8;

const _: () = assert!(LAMP_COUNT <= MAX_LAMPS, "too many lamp lines for MAX_LAMPS");

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 OLED)
// ---------------------------------------------------------------------------

/// 7-bit I²C address of the OLED controller.
pub const OLED_I2C_ADDR: u8 = 0x3C;
/// Data line.
pub const I2C_SDA_GPIO: i32 = 5;
/// Clock line.
pub const I2C_SCL_GPIO: i32 = 4;
/// Bus clock.
pub const I2C_FREQ_HZ: u32 = 400_000;

// ---------------------------------------------------------------------------
// Panel geometry
// ---------------------------------------------------------------------------

pub const OLED_WIDTH: u32 = 128;
pub const OLED_HEIGHT: u32 = 64;
