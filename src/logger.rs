//! Minimal stderr logger for the command-line driver.
//!
//! The library itself only emits records through the `log` facade under the
//! `toy_frontend` target; nothing is printed unless a logger is installed.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct FrontendLogger;

impl Log for FrontendLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };

        eprintln!(
            "[{level}][{target}] {message}",
            level = level,
            target = record.target(),
            message = record.args()
        );
    }

    fn flush(&self) {}
}

/// Installs the logger. Fails if another logger was already set for this process.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    static LOGGER: FrontendLogger = FrontendLogger;
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Maps the number of `-v` flags to a level: none is `Warn`, one is `Debug`, two or more is `Trace`.
pub fn level_for_verbosity(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
