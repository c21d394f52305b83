//! One-shot hardware peripheral initialization.
//!
//! Turns the GPIO numbers from [`SystemConfig`](crate::config::SystemConfig)
//! and [`pins`] into owned `esp-idf-hal` drivers.  Called once from `main()`
//! before the control loop, and only for the channels that are enabled.

#[cfg(target_os = "espidf")]
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Output, PinDriver};
#[cfg(target_os = "espidf")]
use esp_idf_hal::i2c::{I2C0, I2cConfig, I2cDriver};
#[cfg(target_os = "espidf")]
use esp_idf_hal::units::Hertz;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    TooManyLamps,
    I2cInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::TooManyLamps => write!(f, "more lamp GPIOs than MAX_LAMPS"),
            Self::I2cInitFailed(rc) => write!(f, "I2C master init failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

// ── Lamp outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub type LampPin = PinDriver<'static, AnyOutputPin, Output>;

/// Configure each lamp GPIO as a push-pull output, in lighting order.
#[cfg(target_os = "espidf")]
pub fn lamp_pins(
    gpios: &[i32],
) -> Result<heapless::Vec<LampPin, { pins::MAX_LAMPS }>, HwInitError> {
    let mut out = heapless::Vec::new();
    for &gpio in gpios {
        // SAFETY: each lamp GPIO is listed once in the config and is not
        // handed to any other driver; this runs once before the loop.
        let pin = unsafe { AnyOutputPin::new(gpio) };
        let driver =
            PinDriver::output(pin).map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
        out.push(driver).map_err(|_| HwInitError::TooManyLamps)?;
    }
    info!("hw_init: {} lamp outputs configured {:?}", out.len(), gpios);
    Ok(out)
}

// ── OLED I²C bus ──────────────────────────────────────────────

/// Bring up I²C0 on the OLED's SDA/SCL lines.
#[cfg(target_os = "espidf")]
pub fn oled_bus(i2c: I2C0) -> Result<I2cDriver<'static>, HwInitError> {
    // SAFETY: SDA/SCL are dedicated to the OLED and claimed only here.
    let sda = unsafe { AnyIOPin::new(pins::I2C_SDA_GPIO) };
    let scl = unsafe { AnyIOPin::new(pins::I2C_SCL_GPIO) };
    let config = I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ));
    let bus = I2cDriver::new(i2c, sda, scl, &config)
        .map_err(|e| HwInitError::I2cInitFailed(e.code()))?;
    info!(
        "hw_init: I2C0 up (SDA={}, SCL={}, {} Hz)",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_FREQ_HZ
    );
    Ok(bus)
}
