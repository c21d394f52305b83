//! Capturing logger for unit tests.
//!
//! `log` allows one logger per process, so every test module that asserts
//! on log output goes through here.  Lines are kept per thread, so tests
//! running in parallel never see each other's output.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        LINES.with(|l| {
            l.borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Run `f` and return every line it logged on this thread.
pub fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in unit tests");
        log::set_max_level(LevelFilter::Trace);
    });
    LINES.with(|l| l.borrow_mut().clear());
    f();
    LINES.with(|l| l.borrow_mut().drain(..).collect())
}
