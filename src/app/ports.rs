//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (radio, lamps, OLED, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Output ports are fire-and-forget: they return nothing, and adapters log
//! their own failures.

use super::model::DiscoveredNetwork;

// ───────────────────────────────────────────────────────────────
// Scan port (driven adapter: radio → domain)
// ───────────────────────────────────────────────────────────────

/// Blocking access-point scan.
pub trait ScanPort {
    /// Perform a fresh scan and return every access point seen, in driver
    /// order.  Each call supersedes the previous result.
    ///
    /// Implementations degrade radio failures to an empty list.
    fn scan(&mut self) -> Vec<DiscoveredNetwork>;
}

// ───────────────────────────────────────────────────────────────
// Lamp port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// An ordered bank of on/off indicator lines.
pub trait LampPort {
    /// Number of lines (0 when no lamps are fitted).
    fn line_count(&self) -> usize;

    /// Drive line `index` active or inactive.
    fn set_line(&mut self, index: usize, active: bool);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → OLED)
// ───────────────────────────────────────────────────────────────

/// Frame-oriented text display.  Nothing is visible until [`commit`].
///
/// [`commit`]: DisplayPort::commit
pub trait DisplayPort {
    fn clear(&mut self);

    /// Draw `text` at (`x`, `y`), word-wrapping at `max_width` pixels.
    fn draw_text(&mut self, x: u32, y: u32, max_width: u32, text: &str);

    /// Push the frame to the panel.
    fn commit(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Best effort: sinks cannot fail the cycle.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
