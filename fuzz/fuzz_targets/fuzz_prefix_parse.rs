//! Fuzz target: `AddressPrefix` parser
//!
//! Feeds arbitrary UTF-8 into `AddressPrefix::from_str` and verifies:
//! - No panics on any input
//! - Anything accepted prints back in canonical form and re-parses equal
//!
//! cargo fuzz run fuzz_prefix_parse

#![no_main]

use bssid_counter::app::model::AddressPrefix;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(prefix) = text.parse::<AddressPrefix>() {
        let canonical = prefix.to_string();
        assert_eq!(canonical.len(), 8, "canonical form is AA:BB:CC");
        assert_eq!(canonical.parse::<AddressPrefix>(), Ok(prefix));
    }
});
