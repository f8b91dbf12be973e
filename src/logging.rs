#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "CONNECT_FOUR_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stderr, so the board on stdout stays readable
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Resolve the level: an explicit override first, then `CONNECT_FOUR_LOG`,
/// then `warn`. Unparseable values fall through to the next source.
pub fn resolve_level(explicit: Option<&str>) -> LevelFilter {
    explicit
        .and_then(|lvl| lvl.parse().ok())
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger. Calling it twice keeps the first logger but still
/// updates the level.
pub fn init_logging(explicit: Option<&str>) {
    let level = resolve_level(explicit);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
