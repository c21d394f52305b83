//! Discrete indicator lamp bank.
//!
//! An ordered set of GPIO outputs, one LED each.  Every line is driven low
//! when the bank is built, so the lamps start dark.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::digital::OutputPin`]: on ESP-IDF the pins
//! are `PinDriver`s from `hw_init`; on host/test they are in-memory stand-ins.

use embedded_hal::digital::OutputPin;

use crate::error::LampError;
use crate::pins::MAX_LAMPS;

pub struct LampBank<P: OutputPin> {
    lines: heapless::Vec<P, MAX_LAMPS>,
    states: heapless::Vec<bool, MAX_LAMPS>,
}

impl<P: OutputPin> LampBank<P> {
    /// Take ownership of `lines` (in lighting order) and switch them all off.
    pub fn new(lines: impl IntoIterator<Item = P>) -> Result<Self, LampError> {
        let mut bank = Self {
            lines: heapless::Vec::new(),
            states: heapless::Vec::new(),
        };
        for mut line in lines {
            line.set_low().map_err(|_| LampError::GpioWriteFailed)?;
            let lines = bank.lines.len();
            bank.lines
                .push(line)
                .map_err(|_| LampError::OutOfRange { index: lines, lines: MAX_LAMPS })?;
            // Same capacity as `lines`, cannot fail after the push above.
            let _ = bank.states.push(false);
        }
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn set(&mut self, index: usize, active: bool) -> Result<(), LampError> {
        let lines = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(LampError::OutOfRange { index, lines })?;

        let res = if active { line.set_high() } else { line.set_low() };
        res.map_err(|_| LampError::GpioWriteFailed)?;
        self.states[index] = active;
        Ok(())
    }

    /// Last state written to each line.
    pub fn states(&self) -> &[bool] {
        &self.states
    }
}
