//! Integration tests for the scan → filter → registry → presentation cycle.
//!
//! These run on the host and drive [`AppService`] end to end with a
//! scripted scanner and a recording panel.

use crate::mock_hw::{MockPanel, PanelCall, RecordingSink, ScriptedScanner, foreign, matching};

use bssid_counter::app::events::AppEvent;
use bssid_counter::app::registry::RegistryChange;
use bssid_counter::app::service::AppService;
use bssid_counter::config::SystemConfig;

fn make_app() -> (AppService, MockPanel, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, MockPanel::new(3), sink)
}

// ── Scenario A: empty scan ────────────────────────────────────

#[test]
fn empty_scan_counts_zero_and_darkens_every_lamp() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::once(Vec::new());

    let count = app.cycle(&mut scanner, &mut panel, &mut sink);

    assert_eq!(count, 0);
    assert_eq!(panel.lines, vec![false, false, false]);
    assert_eq!(
        panel.shown.as_deref(),
        Some("Found 0 devices that passed the filter.")
    );
    assert!(app.registry().is_empty());
    assert_eq!(
        sink.count_of(|e| matches!(e, AppEvent::ScanEmpty)),
        1,
        "empty scan is reported once"
    );
}

// ── Scenario B: two matches ───────────────────────────────────

#[test]
fn two_matches_light_two_lamps() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::once(vec![
        matching([0x00, 0x00, 0x01], -40),
        matching([0x00, 0x00, 0x02], -70),
    ]);

    let count = app.cycle(&mut scanner, &mut panel, &mut sink);

    assert_eq!(count, 2);
    assert_eq!(app.registry().len(), 2);
    assert_eq!(app.registry().get("00:0D:97:00:00:01"), Some(40));
    assert_eq!(app.registry().get("00:0D:97:00:00:02"), Some(70));
    assert_eq!(panel.lines, vec![true, true, false]);
    assert_eq!(
        panel.shown.as_deref(),
        Some("Found 2 devices that passed the filter.")
    );
}

// ── Scenario C: same device, new strength ─────────────────────

#[test]
fn repeat_sighting_updates_magnitude_and_still_counts() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::new(vec![
        vec![matching([0xAA, 0xBB, 0xCC], -40)],
        vec![matching([0xAA, 0xBB, 0xCC], -55)],
    ]);

    assert_eq!(app.cycle(&mut scanner, &mut panel, &mut sink), 1);
    assert_eq!(app.registry().get("00:0D:97:AA:BB:CC"), Some(40));

    assert_eq!(app.cycle(&mut scanner, &mut panel, &mut sink), 1);
    assert_eq!(app.registry().get("00:0D:97:AA:BB:CC"), Some(55));
    assert_eq!(app.registry().len(), 1);

    let updated = sink.count_of(|e| {
        matches!(
            e,
            AppEvent::DeviceTracked {
                change: RegistryChange::Updated { previous: 40 },
                magnitude: 55,
                ..
            }
        )
    });
    assert_eq!(updated, 1);
}

#[test]
fn unchanged_magnitude_still_counts_without_tracking_event() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::new(vec![
        vec![matching([0x00, 0x00, 0x09], -60)],
        vec![matching([0x00, 0x00, 0x09], -60)],
    ]);

    app.cycle(&mut scanner, &mut panel, &mut sink);
    let count = app.cycle(&mut scanner, &mut panel, &mut sink);

    assert_eq!(count, 1, "known device with same strength still counts");
    assert_eq!(
        sink.count_of(|e| matches!(e, AppEvent::DeviceTracked { .. })),
        1,
        "only the insert is tracked"
    );
}

// ── Scenario D: mixed vendors ─────────────────────────────────

#[test]
fn foreign_networks_never_enter_the_registry() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::once(vec![
        foreign([0x11, 0x22, 0x33, 0x44, 0x55, 0x66], -30),
        foreign([0x00, 0x0D, 0x96, 0x00, 0x00, 0x01], -35),
        matching([0x12, 0x34, 0x56], -50),
        foreign([0x00, 0x0C, 0x97, 0x00, 0x00, 0x01], -65),
        foreign([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], -90),
    ]);

    let count = app.cycle(&mut scanner, &mut panel, &mut sink);

    assert_eq!(count, 1);
    assert_eq!(app.registry().len(), 1);
    assert!(
        app.registry()
            .iter()
            .all(|(address, _)| address.starts_with("00:0D:97:"))
    );
    assert_eq!(panel.lines, vec![true, false, false]);

    let seen = sink.count_of(|e| matches!(e, AppEvent::NetworkSeen { .. }));
    let marked = sink.count_of(|e| matches!(e, AppEvent::NetworkSeen { matched: true, .. }));
    assert_eq!(seen, 5, "every record is logged");
    assert_eq!(marked, 1);
}

// ── Presentation ──────────────────────────────────────────────

#[test]
fn count_above_lamp_count_saturates() {
    let (mut app, mut panel, mut sink) = make_app();
    let scan = (0..5u8).map(|i| matching([0, 0, i], -50)).collect();
    let mut scanner = ScriptedScanner::once(scan);

    assert_eq!(app.cycle(&mut scanner, &mut panel, &mut sink), 5);
    assert_eq!(panel.lines, vec![true, true, true]);
    assert_eq!(
        panel.shown.as_deref(),
        Some("Found 5 devices that passed the filter.")
    );
}

#[test]
fn every_cycle_redraws_even_when_count_is_steady() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::new(vec![
        vec![matching([0, 0, 1], -50)],
        vec![matching([0, 0, 1], -50)],
    ]);

    app.cycle(&mut scanner, &mut panel, &mut sink);
    let first_frame = panel.calls.clone();
    panel.calls.clear();
    app.cycle(&mut scanner, &mut panel, &mut sink);

    assert_eq!(panel.calls, first_frame, "identical output for identical count");
    assert_eq!(panel.commits(), 1);
    assert_eq!(
        panel.calls.first(),
        Some(&PanelCall::SetLine {
            index: 0,
            active: true
        })
    );
}

#[test]
fn text_is_placed_per_config() {
    let config = SystemConfig {
        display_x: 4,
        display_y: 20,
        display_max_width: 100,
        ..Default::default()
    };
    let mut app = AppService::new(config);
    let mut panel = MockPanel::new(3);
    let mut sink = RecordingSink::new();
    let mut scanner = ScriptedScanner::once(Vec::new());

    app.cycle(&mut scanner, &mut panel, &mut sink);

    assert!(panel.calls.contains(&PanelCall::DrawText {
        x: 4,
        y: 20,
        max_width: 100,
        text: "Found 0 devices that passed the filter.".to_string(),
    }));
}

#[test]
fn disabled_channels_are_never_touched() {
    let config = SystemConfig {
        lamps_enabled: false,
        display_enabled: false,
        ..Default::default()
    };
    let mut app = AppService::new(config);
    let mut panel = MockPanel::new(3);
    let mut sink = RecordingSink::new();
    let mut scanner = ScriptedScanner::once(vec![matching([0, 0, 1], -50)]);

    assert_eq!(app.cycle(&mut scanner, &mut panel, &mut sink), 1);
    assert!(panel.calls.is_empty());
    assert_eq!(app.registry().len(), 1, "registry still accumulates");
}

// ── Registry over time ────────────────────────────────────────

#[test]
fn registry_only_grows_while_count_tracks_current_scan() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::new(vec![
        vec![matching([0, 0, 1], -40), matching([0, 0, 2], -41)],
        vec![matching([0, 0, 3], -42)],
        Vec::new(),
    ]);

    let counts: Vec<_> = (0..3)
        .map(|_| app.cycle(&mut scanner, &mut panel, &mut sink))
        .collect();

    assert_eq!(counts, vec![2, 1, 0]);
    assert_eq!(app.registry().len(), 3, "departed devices are kept");
    assert_eq!(panel.active_lines(), 0);
    assert_eq!(app.cycle_count(), 3);
    assert_eq!(app.last_count(), Some(0));
}

#[test]
fn duplicate_bssid_in_one_scan_counts_twice() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::once(vec![
        matching([0, 0, 7], -40),
        matching([0, 0, 7], -45),
    ]);

    assert_eq!(app.cycle(&mut scanner, &mut panel, &mut sink), 2);
    assert_eq!(app.registry().len(), 1);
    assert_eq!(app.registry().get("00:0D:97:00:00:07"), Some(45));
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn start_and_cycle_events_are_emitted() {
    let (mut app, mut panel, mut sink) = make_app();
    let mut scanner = ScriptedScanner::once(vec![matching([0, 0, 1], -40)]);

    app.cycle(&mut scanner, &mut panel, &mut sink);

    assert!(matches!(
        sink.events.first(),
        Some(AppEvent::Started {
            lamps: 3,
            display: true,
            ..
        })
    ));
    assert!(matches!(
        sink.events.last(),
        Some(AppEvent::CycleCompleted { cycle: 1, count: 1 })
    ));
}

#[test]
fn registry_report_follows_interval() {
    let config = SystemConfig {
        registry_report_interval_cycles: 2,
        ..Default::default()
    };
    let mut app = AppService::new(config);
    let mut panel = MockPanel::new(3);
    let mut sink = RecordingSink::new();
    let mut scanner = ScriptedScanner::new(vec![
        vec![matching([0, 0, 1], -40)],
        vec![matching([0, 0, 2], -80)],
    ]);

    for _ in 0..5 {
        app.cycle(&mut scanner, &mut panel, &mut sink);
    }

    let reports: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::RegistryReport(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(reports.len(), 2, "cycles 2 and 4");
    assert_eq!(reports[0].cycles, 2);
    assert_eq!(reports[0].tracked, 2);
    assert_eq!(reports[1].cycles, 4);
}
