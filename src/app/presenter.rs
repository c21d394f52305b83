//! Presentation adapter — renders the cycle count on lamps and the OLED.
//!
//! Both channels are redrawn every cycle, whether or not the count moved.
//! Only the count crosses this boundary; the registry never does.

use core::fmt::Write as _;

use crate::config::SystemConfig;

use super::model::CycleCount;
use super::ports::{DisplayPort, LampPort};

/// Longest rendering of [`count_message`] is 54 bytes (`u32::MAX`).
pub type CountMessage = heapless::String<64>;

/// The sentence shown on the OLED.
pub fn count_message(count: CycleCount) -> CountMessage {
    let mut s = CountMessage::new();
    let _ = write!(s, "Found {count} devices that passed the filter.");
    s
}

#[derive(Debug, Clone)]
pub struct Presenter {
    lamps_enabled: bool,
    display_enabled: bool,
    text_x: u32,
    text_y: u32,
    text_max_width: u32,
}

impl Presenter {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            lamps_enabled: config.lamps_enabled,
            display_enabled: config.display_enabled,
            text_x: config.display_x,
            text_y: config.display_y,
            text_max_width: config.display_max_width,
        }
    }

    /// Reflect `count` on every enabled channel.
    ///
    /// Lamps form a saturating bar: the first `min(count, N)` lines are
    /// active, the rest inactive.
    pub fn show(&self, count: CycleCount, hw: &mut (impl LampPort + DisplayPort)) {
        if self.lamps_enabled {
            let lit = usize::try_from(count).unwrap_or(usize::MAX);
            for i in 0..hw.line_count() {
                hw.set_line(i, i < lit);
            }
        }

        if self.display_enabled {
            hw.clear();
            hw.draw_text(
                self.text_x,
                self.text_y,
                self.text_max_width,
                &count_message(count),
            );
            hw.commit();
        }
    }
}
