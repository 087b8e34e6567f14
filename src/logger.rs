//! Stderr logger for the `rr_model` binary.
//!
//! The library only emits records through the `log` facade; this is the one
//! place a sink is installed. Level comes from `RR_MODEL_LOG`.

use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

pub const LOG_ENV: &str = "RR_MODEL_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter from a `RR_MODEL_LOG` value; unset or unknown means `Info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn init() -> Result<(), log::SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    }
}
