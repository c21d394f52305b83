//! Unified error types for the counter firmware.
//!
//! A single `Error` enum that every driver and the config layer convert
//! into.  All variants are `Copy` so they can be logged and dropped on the
//! fire-and-forget output paths without allocation.
//!
//! None of these ever stop the control cycle: the scan adapter degrades to
//! an empty result and the output adapters log and carry on.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Build-time configuration is inconsistent.
    Config(&'static str),
    /// An indicator lamp could not be driven.
    Lamp(LampError),
    /// The OLED rejected a command or frame.
    Display(DisplayError),
    /// The radio could not complete a scan.
    Scan(ScanError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Lamp(e) => write!(f, "lamp: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Scan(e) => write!(f, "scan: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Lamp errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampError {
    /// Line index beyond the configured lamp bank.
    OutOfRange { index: usize, lines: usize },
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for LampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, lines } => {
                write!(f, "line {index} out of range ({lines} lines)")
            }
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<LampError> for Error {
    fn from(e: LampError) -> Self {
        Self::Lamp(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The controller NAK'd or the bus faulted.
    BusWriteFailed,
    /// A frame was pushed before `init()`.
    NotInitialised,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusWriteFailed => write!(f, "I2C write failed"),
            Self::NotInitialised => write!(f, "display not initialised"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Scan errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The WiFi driver could not be brought up in station mode.
    RadioStartFailed,
    /// The driver returned an error for this scan.
    ScanFailed,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadioStartFailed => write!(f, "radio start failed"),
            Self::ScanFailed => write!(f, "scan failed"),
        }
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
