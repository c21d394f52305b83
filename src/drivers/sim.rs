//! Host stand-ins for the GPIO and I²C peripherals.
//!
//! Let the simulator binary run the real `LampBank` and `Ssd1306` drivers
//! on a laptop.  Lamp edges are logged; bus traffic is only counted.

use core::convert::Infallible;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};
use log::{debug, trace};

/// Logs every level change on a simulated GPIO.
#[derive(Debug)]
pub struct SimPin {
    gpio: i32,
    high: Option<bool>,
}

impl SimPin {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: None }
    }

    pub fn is_high(&self) -> bool {
        self.high == Some(true)
    }

    fn drive(&mut self, high: bool) {
        if self.high != Some(high) {
            debug!("GPIO(sim) {} -> {}", self.gpio, if high { "HIGH" } else { "LOW" });
        }
        self.high = Some(high);
    }
}

impl digital::ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(true);
        Ok(())
    }
}

/// Accepts every transfer and counts the bytes.
#[derive(Debug, Default)]
pub struct SimI2c {
    bytes_written: usize,
}

impl SimI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl i2c::ErrorType for SimI2c {
    type Error = Infallible;
}

impl I2c for SimI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Infallible> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    trace!("I2C(sim) 0x{:02X} <- {} bytes", address, bytes.len());
                    self.bytes_written += bytes.len();
                }
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}
