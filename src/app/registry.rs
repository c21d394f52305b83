//! Device registry — last observed signal magnitude per matching BSSID.
//!
//! Grows for the lifetime of the process: entries are inserted or
//! overwritten, never removed.  Owned by the
//! [`Aggregator`](super::aggregator::Aggregator); nothing on the output
//! side reads it.

use std::collections::HashMap;

use super::model::{MacAddress, MacString};

/// What [`DeviceRegistry::observe`] did to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    /// First sighting of this address.
    Inserted,
    /// Known address, magnitude changed.
    Updated { previous: u32 },
    /// Known address, same magnitude.  No write.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct DeviceRegistry {
    entries: HashMap<MacString, u32>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filter-passing observation.
    ///
    /// An existing entry is only overwritten when the magnitude differs.
    pub fn observe(&mut self, address: &MacAddress, magnitude: u32) -> RegistryChange {
        let key = address.to_mac_string();
        match self.entries.get_mut(&key) {
            Some(stored) if *stored != magnitude => {
                let previous = *stored;
                *stored = magnitude;
                RegistryChange::Updated { previous }
            }
            Some(_) => RegistryChange::Unchanged,
            None => {
                self.entries.insert(key, magnitude);
                RegistryChange::Inserted
            }
        }
    }

    /// Exact-match lookup by `AA:BB:CC:DD:EE:FF`.
    pub fn get(&self, address: &str) -> Option<u32> {
        let mut key = MacString::new();
        key.push_str(address).ok()?;
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
