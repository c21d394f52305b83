//! Output drivers, hardware initialisation, and peripheral helpers.

pub mod font;
pub mod hw_init;
pub mod lamps;
pub mod oled;
#[cfg(not(target_os = "espidf"))]
pub mod sim;
