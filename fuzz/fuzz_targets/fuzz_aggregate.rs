//! Fuzz target: scan aggregation
//!
//! Decodes the input as a sequence of scans of 10-byte records
//! (6 BSSID bytes + 4 RSSI bytes) and runs each through the aggregator,
//! verifying:
//! - No panics, including at `i32::MIN` signal strength
//! - The count equals the number of prefixed records in that scan
//! - The registry never shrinks and holds only prefixed addresses
//!
//! cargo fuzz run fuzz_aggregate

#![no_main]

use bssid_counter::app::aggregator::Aggregator;
use bssid_counter::app::events::AppEvent;
use bssid_counter::app::model::{AddressPrefix, DiscoveredNetwork, MacAddress};
use bssid_counter::app::ports::{EventSink, ScanPort};
use libfuzzer_sys::fuzz_target;

const PREFIX: AddressPrefix = AddressPrefix::new([0x00, 0x0D, 0x97]);
const RECORD: usize = 10;

struct Replay(Vec<DiscoveredNetwork>);

impl ScanPort for Replay {
    fn scan(&mut self) -> Vec<DiscoveredNetwork> {
        core::mem::take(&mut self.0)
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut agg = Aggregator::new();
    let mut tracked = 0;

    // First byte of each scan is its record count.
    let mut rest = data;
    while let Some((&n, tail)) = rest.split_first() {
        let take = (usize::from(n) * RECORD).min(tail.len() / RECORD * RECORD);
        let (records, tail) = tail.split_at(take);
        rest = tail;

        let networks: Vec<DiscoveredNetwork> = records
            .chunks_exact(RECORD)
            .map(|r| {
                let mut bssid = [0u8; 6];
                bssid.copy_from_slice(&r[..6]);
                let rssi = i32::from_le_bytes([r[6], r[7], r[8], r[9]]);
                DiscoveredNetwork::new(MacAddress::new(bssid), "fuzz", rssi)
            })
            .collect();
        let expected = networks.iter().filter(|n| PREFIX.matches(&n.bssid)).count();

        let count = agg.run(&PREFIX, &mut Replay(networks), &mut Discard);

        assert_eq!(count as usize, expected);
        assert!(agg.registry().len() >= tracked, "registry shrank");
        tracked = agg.registry().len();
    }

    assert!(
        agg.registry()
            .iter()
            .all(|(address, _)| address.starts_with("00:0D:97:"))
    );
});
