#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stdout logger with a level taken from `FLEET_LOG`
/// (`error`..`trace`, or `off`). Defaults to `info`; repeated calls are
/// ignored.
pub fn init_logging() {
    let level = log_level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// Level named by `raw`, or `info` when unset or unparseable.
pub fn log_level_from(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
