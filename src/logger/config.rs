//! Logger configuration and output sinks.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Prefix written in front of every record by the default configuration.
pub const DEFAULT_PREFIX: &str = "[error] ";

/// Exit status used by the fatal helpers unless configured otherwise.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Record layout and termination settings for an [`ErrorLogger`](crate::ErrorLogger).
///
/// # Examples
///
/// ```
/// use error_origin::LoggerConfig;
///
/// let config = LoggerConfig::default();
/// assert_eq!(config.render("boom"), "[error] boom\n");
///
/// let config = LoggerConfig::bare();
/// assert_eq!(config.render("boom\n"), "boom\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Written in front of the first line of every record.
    pub prefix: String,
    /// Status passed to `exit` by the fatal helpers; see
    /// [`exit_status`](Self::exit_status).
    pub exit_code: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            exit_code: DEFAULT_EXIT_CODE,
        }
    }
}

impl LoggerConfig {
    /// No prefix, default exit code.
    #[inline]
    pub fn bare() -> Self {
        Self {
            prefix: String::new(),
            ..Default::default()
        }
    }

    /// Custom prefix, default exit code.
    #[inline]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Overrides the exit code used by the fatal helpers.
    #[inline]
    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Exit status actually used; a configured `0` still reports failure.
    #[inline]
    pub fn exit_status(&self) -> i32 {
        if self.exit_code == 0 {
            DEFAULT_EXIT_CODE
        } else {
            self.exit_code
        }
    }

    /// Lays out one record: the prefix, the text, and a newline unless the
    /// text already ends with one. Only the first line is prefixed.
    pub fn render(&self, text: &str) -> String {
        let mut record = String::with_capacity(self.prefix.len() + text.len() + 1);
        record.push_str(&self.prefix);
        record.push_str(text);
        if !record.ends_with('\n') {
            record.push('\n');
        }
        record
    }
}

/// Destination of logged records.
pub enum Sink {
    /// The process's standard error stream.
    Stderr,
    /// Any writer; each record is written under the lock.
    Writer(Mutex<Box<dyn Write + Send>>),
    /// `tracing` events at error level, target `error_origin`.
    #[cfg(feature = "tracing")]
    Tracing,
}

impl Sink {
    /// Wraps a writer.
    #[inline]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::Writer(Mutex::new(Box::new(writer)))
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::Writer(_) => f.write_str("Writer(..)"),
            #[cfg(feature = "tracing")]
            Self::Tracing => f.write_str("Tracing"),
        }
    }
}
