//! The [`log`] implementation used by the `spongebot` executable.
use std::io::{Write, stdout};

use log::{LevelFilter, Log, Metadata, Record};

struct CiLogger;

impl Log for CiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut handle = stdout().lock();
        // CI log grouping commands must be printed without a prefix.
        let _ = if record.target() == "CI_LOG_GROUPING" {
            writeln!(handle, "{}", record.args())
        } else {
            writeln!(
                handle,
                "[{:>5}]{}: {}",
                record.level().as_str(),
                record.module_path().unwrap_or_default(),
                record.args()
            )
        };
    }

    fn flush(&self) {
        let _ = stdout().flush();
    }
}

static LOGGER: CiLogger = CiLogger;

/// Install the logger and set the maximum verbosity.
///
/// Installing more than once only changes the verbosity.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
