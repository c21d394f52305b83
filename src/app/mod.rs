//! Application core — pure domain logic, zero I/O.
//!
//! Scan filtering, the device registry, count aggregation, and the rules
//! for presenting the count.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a radio, lamps, or a panel.

pub mod aggregator;
pub mod events;
pub mod model;
pub mod ports;
pub mod presenter;
pub mod registry;
pub mod service;
