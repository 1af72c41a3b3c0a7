// A tiny stderr logger for the `log` crate. Filtering is left entirely to
// `log::set_max_level`, which is set from `LCTIME_LOG` in `main`.

use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use {jiff::tz::TimeZone, log::Log};

use crate::style::Theme;

/// A logger that writes one line per record to stderr.
///
/// Each line looks like `{timestamp}|{level}|{file}:{line}: {message}`.
/// The timestamp is in UTC until [`Logger::set_time_zone`] is called.
#[derive(Debug)]
pub struct Logger {
    tz: Mutex<Option<TimeZone>>,
}

impl Logger {
    /// Installs a new logger as the global `log` logger.
    pub fn init() -> Result<&'static Logger, log::SetLoggerError> {
        let logger = Box::leak(Box::new(Logger { tz: Mutex::new(None) }));
        log::set_logger(logger)?;
        Ok(logger)
    }

    pub fn set_time_zone(&self, tz: TimeZone) {
        *self.tz.lock().unwrap() = Some(tz);
    }

    fn now(&self) -> String {
        // Don't use `Zoned::now()`. It may load the system time zone, which
        // logs, which would recurse back into here.
        let ts = jiff::Timestamp::now();
        match self.tz.lock().unwrap().clone() {
            None => ts.to_string(),
            Some(tz) => ts.to_zoned(tz).to_string(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let theme = Theme::stderr();
        let now = theme.highlight(self.now());
        let level = theme.level(record.level());
        let file = record.file().map(relative);
        match (file, record.line()) {
            (Some(file), Some(line)) => {
                eprintln!("{now}|{level}|{file}:{line}: {}", record.args());
            }
            (Some(file), None) => {
                eprintln!("{now}|{level}|{file}: {}", record.args());
            }
            (None, _) => {
                eprintln!("{now}|{level}: {}", record.args());
            }
        }
    }

    fn flush(&self) {}
}

fn relative(path: &str) -> &str {
    static CWD: LazyLock<Option<PathBuf>> =
        LazyLock::new(|| std::env::current_dir().ok());

    let Some(ref cwd) = *CWD else { return path };
    Path::new(path)
        .strip_prefix(cwd)
        .ok()
        .and_then(|p| p.to_str())
        .unwrap_or(path)
}
