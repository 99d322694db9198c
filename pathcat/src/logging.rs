//! Logging infrastructure for the pathcat library.
//!
//! Library internals emit diagnostics through the `log` facade
//! (`log::debug!` for skipped lines, `log::info!` for encoding decisions).
//! [`Logger`] is the stderr sink for those records, installed once by the
//! CLI. Its verbosity is one of three [`LogLevel`]s.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PATHCAT_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use pathcat::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of quiet, normal, verbose.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcat::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter equivalent to this level.
    #[must_use]
    pub const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A stderr logger honoring a [`LogLevel`].
///
/// # Examples
///
/// ```
/// use pathcat::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.accepts(log::Level::Warn));
/// assert!(!logger.accepts(log::Level::Info));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a record at `level` would be printed.
    #[must_use]
    pub fn accepts(&self, level: log::Level) -> bool {
        level <= self.level.to_level_filter()
    }

    /// The line written to stderr for a record, or `None` when filtered.
    fn render(&self, level: log::Level, message: &str) -> Option<String> {
        self.accepts(level)
            .then(|| format!("{}: {message}", level.as_str()))
    }

    /// Registers this logger as the global `log` sink.
    ///
    /// Only the first call in a process takes effect; later calls leave the
    /// existing sink in place and return `false`.
    pub fn install(self) -> bool {
        let installed = log::set_boxed_logger(Box::new(self)).is_ok();
        if installed {
            log::set_max_level(self.level.to_level_filter());
        }
        installed
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.accepts(metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Some(line) = self.render(record.level(), &record.args().to_string()) {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `PATHCAT_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use pathcat::{init_logger, LogLevel};
///
/// let logger = init_logger(false, true);
/// assert_eq!(logger.level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .map_or_else(Logger::default, Logger::new)
}
