//! BSSID counter firmware library.
//!
//! Exposes the pure-logic modules for integration testing and the host
//! simulator.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod pins;

pub mod adapters;
pub mod drivers;

#[cfg(test)]
mod test_log;
