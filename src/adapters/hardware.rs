//! Hardware adapter — bridges the output drivers to domain port traits.
//!
//! Owns the (optional) [`LampBank`] and [`Ssd1306`], exposing them through
//! [`LampPort`] and [`DisplayPort`].  A channel that is disabled in the
//! build config is simply absent.  Driver errors stop here: they are
//! logged and the cycle goes on.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{DisplayPort, LampPort};
use crate::drivers::lamps::LampBank;
use crate::drivers::oled::Ssd1306;

/// Concrete adapter that combines all outputs behind port traits.
pub struct HardwareAdapter<P: OutputPin, I: I2c> {
    lamps: Option<LampBank<P>>,
    display: Option<Ssd1306<I>>,
}

impl<P: OutputPin, I: I2c> HardwareAdapter<P, I> {
    pub fn new(lamps: Option<LampBank<P>>, display: Option<Ssd1306<I>>) -> Self {
        Self { lamps, display }
    }

    pub fn lamps(&self) -> Option<&LampBank<P>> {
        self.lamps.as_ref()
    }

    pub fn display(&self) -> Option<&Ssd1306<I>> {
        self.display.as_ref()
    }
}

// ── LampPort implementation ───────────────────────────────────

impl<P: OutputPin, I: I2c> LampPort for HardwareAdapter<P, I> {
    fn line_count(&self) -> usize {
        self.lamps.as_ref().map_or(0, LampBank::len)
    }

    fn set_line(&mut self, index: usize, active: bool) {
        if let Some(lamps) = self.lamps.as_mut() {
            if let Err(e) = lamps.set(index, active) {
                warn!("Lamp: {}", e);
            }
        }
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<P: OutputPin, I: I2c> DisplayPort for HardwareAdapter<P, I> {
    fn clear(&mut self) {
        if let Some(display) = self.display.as_mut() {
            display.clear();
        }
    }

    fn draw_text(&mut self, x: u32, y: u32, max_width: u32, text: &str) {
        if let Some(display) = self.display.as_mut() {
            display.draw_text(x, y, max_width, text);
        }
    }

    fn commit(&mut self) {
        if let Some(display) = self.display.as_mut() {
            if let Err(e) = display.flush() {
                warn!("OLED: {}", e);
            }
        }
    }
}
