//! Mock adapters for integration tests.
//!
//! Records every output call so tests can assert on the full command
//! history without touching real GPIO or I²C.

use bssid_counter::app::events::AppEvent;
use bssid_counter::app::model::{DiscoveredNetwork, MacAddress};
use bssid_counter::app::ports::{DisplayPort, EventSink, LampPort, ScanPort};
use std::collections::VecDeque;

// ── Scan fixtures ─────────────────────────────────────────────

pub const PREFIX: [u8; 3] = [0x00, 0x0D, 0x97];

/// Network whose BSSID starts with the default filter prefix.
pub fn matching(last: [u8; 3], rssi: i32) -> DiscoveredNetwork {
    let [a, b, c] = PREFIX;
    let [d, e, f] = last;
    DiscoveredNetwork::new(MacAddress::new([a, b, c, d, e, f]), "bridge", rssi)
}

/// Network from some other vendor.
pub fn foreign(octets: [u8; 6], rssi: i32) -> DiscoveredNetwork {
    DiscoveredNetwork::new(MacAddress::new(octets), "neighbour", rssi)
}

// ── ScriptedScanner ───────────────────────────────────────────

/// Returns one pre-recorded scan per call, then empty scans.
pub struct ScriptedScanner {
    scans: VecDeque<Vec<DiscoveredNetwork>>,
    pub calls: usize,
}

#[allow(dead_code)]
impl ScriptedScanner {
    pub fn new(scans: Vec<Vec<DiscoveredNetwork>>) -> Self {
        Self {
            scans: scans.into(),
            calls: 0,
        }
    }

    pub fn once(scan: Vec<DiscoveredNetwork>) -> Self {
        Self::new(vec![scan])
    }
}

impl ScanPort for ScriptedScanner {
    fn scan(&mut self) -> Vec<DiscoveredNetwork> {
        self.calls += 1;
        self.scans.pop_front().unwrap_or_default()
    }
}

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PanelCall {
    SetLine { index: usize, active: bool },
    Clear,
    DrawText { x: u32, y: u32, max_width: u32, text: String },
    Commit,
}

// ── MockPanel ─────────────────────────────────────────────────

/// Lamp bank plus display, recording every call and tracking the
/// resulting line levels and committed text.
pub struct MockPanel {
    pub calls: Vec<PanelCall>,
    pub lines: Vec<bool>,
    pending: Option<String>,
    pub shown: Option<String>,
}

#[allow(dead_code)]
impl MockPanel {
    pub fn new(lines: usize) -> Self {
        Self {
            calls: Vec::new(),
            lines: vec![false; lines],
            pending: None,
            shown: None,
        }
    }

    pub fn commits(&self) -> usize {
        self.calls.iter().filter(|c| **c == PanelCall::Commit).count()
    }

    pub fn active_lines(&self) -> usize {
        self.lines.iter().filter(|on| **on).count()
    }
}

impl LampPort for MockPanel {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn set_line(&mut self, index: usize, active: bool) {
        self.calls.push(PanelCall::SetLine { index, active });
        if let Some(line) = self.lines.get_mut(index) {
            *line = active;
        }
    }
}

impl DisplayPort for MockPanel {
    fn clear(&mut self) {
        self.calls.push(PanelCall::Clear);
        self.pending = None;
    }

    fn draw_text(&mut self, x: u32, y: u32, max_width: u32, text: &str) {
        self.calls.push(PanelCall::DrawText {
            x,
            y,
            max_width,
            text: text.to_string(),
        });
        self.pending = Some(text.to_string());
    }

    fn commit(&mut self) {
        self.calls.push(PanelCall::Commit);
        self.shown = self.pending.clone();
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_of(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
