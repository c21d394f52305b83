//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the aggregator (and through it the device registry)
//! and the presenter.  All I/O flows through port traits injected at call
//! sites, making the whole cycle testable with mock adapters.
//!
//! ```text
//!  ScanPort ──▶ ┌───────────────────────────┐ ──▶ EventSink
//!               │        AppService          │
//!               │  Aggregator ─▶ Presenter   │ ──▶ LampPort + DisplayPort
//!               └───────────────────────────┘
//! ```

use core::time::Duration;

use log::info;

use crate::config::SystemConfig;
use crate::diagnostics::RegistryReport;

use super::aggregator::Aggregator;
use super::events::AppEvent;
use super::model::CycleCount;
use super::ports::{DisplayPort, EventSink, LampPort, ScanPort};
use super::presenter::Presenter;
use super::registry::DeviceRegistry;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    config: SystemConfig,
    aggregator: Aggregator,
    presenter: Presenter,
    cycle_count: u64,
    last_count: Option<CycleCount>,
}

impl AppService {
    pub fn new(config: SystemConfig) -> Self {
        let presenter = Presenter::new(&config);
        Self {
            config,
            aggregator: Aggregator::new(),
            presenter,
            cycle_count: 0,
            last_count: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            prefix: self.config.address_prefix,
            lamps: self.config.lamp_count(),
            display: self.config.display_enabled,
        });
        info!(
            "AppService started (filter {}, cycle delay {} ms)",
            self.config.address_prefix, self.config.cycle_delay_ms
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: scan → filter/aggregate → present.
    ///
    /// The `hw` parameter satisfies **both** [`LampPort`] and
    /// [`DisplayPort`]; one adapter owns both output channels.
    pub fn cycle(
        &mut self,
        scanner: &mut impl ScanPort,
        hw: &mut (impl LampPort + DisplayPort),
        sink: &mut impl EventSink,
    ) -> CycleCount {
        let count = self
            .aggregator
            .run(&self.config.address_prefix, scanner, sink);

        self.presenter.show(count, hw);

        self.cycle_count += 1;
        self.last_count = Some(count);
        sink.emit(&AppEvent::CycleCompleted {
            cycle: self.cycle_count,
            count,
        });

        let every = u64::from(self.config.registry_report_interval_cycles);
        if every != 0 && self.cycle_count % every == 0 {
            sink.emit(&AppEvent::RegistryReport(RegistryReport::collect(
                self.cycle_count,
                self.aggregator.registry(),
            )));
        }

        count
    }

    // ── Queries ───────────────────────────────────────────────

    /// Idle wait between cycles.
    pub fn cycle_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.config.cycle_delay_ms))
    }

    /// Cycles completed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Count from the most recent cycle, `None` before the first.
    pub fn last_count(&self) -> Option<CycleCount> {
        self.last_count
    }

    pub fn registry(&self) -> &DeviceRegistry {
        self.aggregator.registry()
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}
