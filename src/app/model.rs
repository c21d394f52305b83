//! Domain values: hardware addresses, the prefix filter, and scan records.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rendered BSSID: `AA:BB:CC:DD:EE:FF` (17 chars).
pub type MacString = heapless::String<17>;

/// SSIDs are at most 32 bytes (802.11).
pub type Ssid = heapless::String<32>;

/// Number of filter-passing networks in one scan.
pub type CycleCount = u32;

// ───────────────────────────────────────────────────────────────
// MacAddress
// ───────────────────────────────────────────────────────────────

/// Full 6-byte hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// First three octets (the OUI for universally administered addresses).
    pub const fn prefix(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Uppercase, colon-separated form used as the registry key.
    pub fn to_mac_string(&self) -> MacString {
        let mut s = MacString::new();
        // 17 bytes always fit.
        let _ = write!(s, "{self}");
        s
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

// ───────────────────────────────────────────────────────────────
// AddressPrefix
// ───────────────────────────────────────────────────────────────

/// First three octets of a hardware address, used as an exact-match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressPrefix([u8; 3]);

impl AddressPrefix {
    pub const fn new(octets: [u8; 3]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 3] {
        self.0
    }

    /// Octet-by-octet equality on the first three octets.  No wildcards.
    pub fn matches(&self, address: &MacAddress) -> bool {
        address.prefix() == self.0
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixParseError {
    /// Not exactly three groups.
    WrongGroupCount,
    /// A group is not two hex digits.
    InvalidOctet,
}

impl fmt::Display for PrefixParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongGroupCount => write!(f, "expected three octets (e.g. 00:0D:97)"),
            Self::InvalidOctet => write!(f, "octets must be two hex digits"),
        }
    }
}

impl FromStr for AddressPrefix {
    type Err = PrefixParseError;

    /// Accepts `00:0D:97` or `00-0d-97`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = if s.contains('-') { '-' } else { ':' };
        let mut octets = [0u8; 3];
        let mut groups = s.trim().split(sep);

        for slot in &mut octets {
            let group = groups.next().ok_or(PrefixParseError::WrongGroupCount)?;
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(PrefixParseError::InvalidOctet);
            }
            *slot = u8::from_str_radix(group, 16).map_err(|_| PrefixParseError::InvalidOctet)?;
        }
        if groups.next().is_some() {
            return Err(PrefixParseError::WrongGroupCount);
        }
        Ok(Self(octets))
    }
}

// ───────────────────────────────────────────────────────────────
// DiscoveredNetwork
// ───────────────────────────────────────────────────────────────

/// One access point from one scan.  Never retained past its cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredNetwork {
    pub bssid: MacAddress,
    pub ssid: Ssid,
    /// dBm, more negative is weaker.
    pub rssi: i32,
}

impl DiscoveredNetwork {
    /// Builds a record, truncating `ssid` to 32 bytes on a char boundary.
    pub fn new(bssid: MacAddress, ssid: &str, rssi: i32) -> Self {
        let mut s = Ssid::new();
        for ch in ssid.chars() {
            if s.push(ch).is_err() {
                break;
            }
        }
        Self { bssid, ssid: s, rssi }
    }

    /// `|rssi|`; never negative, no overflow at `i32::MIN`.
    pub fn magnitude(&self) -> u32 {
        self.rssi.unsigned_abs()
    }
}
