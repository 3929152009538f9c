//! Stack-dump logging and termination helpers.
//!
//! An [`ErrorLogger`] is an explicit handle: a [`LoggerConfig`] plus a
//! [`Sink`]. The process default, reachable through [`ErrorLogger::global`],
//! writes to standard error with the `"[error] "` prefix and no timestamp.
//! [`ErrorLogger::install`] replaces that default, once, before first use.
//!
//! Each helper wraps its input with the origin attributed to the helper's
//! caller, then writes the full [`stack_dump`](OriginError::stack_dump) as a
//! single record.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use std::sync::{Arc, Mutex};
//! use error_origin::ErrorLogger;
//!
//! #[derive(Clone, Default)]
//! struct Capture(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Capture {
//!     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let capture = Capture::default();
//! let logger = ErrorLogger::writer(capture.clone());
//! logger.print("disk full");
//!
//! let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
//! assert!(output.starts_with("[error] "));
//! assert!(output.contains("disk full\n"));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{OnceLock, PoisonError};

use crate::traits::IntoCause;
use crate::types::{wrap_skip, OriginError};

mod config;

pub use config::{LoggerConfig, Sink, DEFAULT_EXIT_CODE, DEFAULT_PREFIX};

/// Skip depth that attributes the origin to the caller of a helper.
const HELPER_SKIP: usize = 2;

static GLOBAL: OnceLock<ErrorLogger> = OnceLock::new();

/// Writes stack dumps of wrapped errors to a [`Sink`].
#[derive(Debug)]
pub struct ErrorLogger {
    config: LoggerConfig,
    sink: Sink,
}

impl Default for ErrorLogger {
    fn default() -> Self {
        Self::stderr()
    }
}

impl ErrorLogger {
    /// Creates a logger from explicit parts.
    #[inline]
    pub fn new(config: LoggerConfig, sink: Sink) -> Self {
        Self { config, sink }
    }

    /// Standard error, default configuration.
    #[inline]
    pub fn stderr() -> Self {
        Self::new(LoggerConfig::default(), Sink::Stderr)
    }

    /// Arbitrary writer, default configuration.
    #[inline]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::new(LoggerConfig::default(), Sink::writer(writer))
    }

    /// `tracing` events, default configuration.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn tracing() -> Self {
        Self::new(LoggerConfig::default(), Sink::Tracing)
    }

    /// Replaces the configuration.
    #[inline]
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Returns the sink.
    #[inline]
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Returns the process-wide logger, creating the default on first use.
    pub fn global() -> &'static ErrorLogger {
        GLOBAL.get_or_init(ErrorLogger::default)
    }

    /// Installs `logger` as the process-wide logger.
    ///
    /// Fails, handing the logger back, once the global logger exists.
    pub fn install(logger: ErrorLogger) -> Result<(), ErrorLogger> {
        GLOBAL.set(logger)
    }

    /// Wraps `value` and writes its stack dump. Write failures are ignored.
    #[track_caller]
    #[inline(never)]
    pub fn print(&self, value: impl IntoCause) {
        let err = wrap_skip(value, HELPER_SKIP);
        let _ = self.log(&err);
    }

    /// Formats a message, wraps it and writes its stack dump.
    #[track_caller]
    #[inline(never)]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let err = wrap_skip(args, HELPER_SKIP);
        let _ = self.log(&err);
    }

    /// Like [`print`](Self::print), but reports write failures.
    #[track_caller]
    #[inline(never)]
    pub fn try_print(&self, value: impl IntoCause) -> io::Result<()> {
        let err = wrap_skip(value, HELPER_SKIP);
        self.log(&err)
    }

    /// Wraps `value`, writes its stack dump and exits the process with the
    /// configured exit status.
    #[track_caller]
    #[inline(never)]
    pub fn fatal(&self, value: impl IntoCause) -> ! {
        let err = wrap_skip(value, HELPER_SKIP);
        self.die(&err)
    }

    /// Formats a message, then behaves like [`fatal`](Self::fatal).
    #[track_caller]
    #[inline(never)]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let err = wrap_skip(args, HELPER_SKIP);
        self.die(&err)
    }

    /// Writes the stack dump of an already wrapped error as one record.
    pub fn log(&self, err: &OriginError) -> io::Result<()> {
        let dump = err.stack_dump();

        match &self.sink {
            Sink::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(self.config.render(&dump).as_bytes())?;
                out.flush()
            }
            Sink::Writer(writer) => {
                let mut out = writer.lock().unwrap_or_else(PoisonError::into_inner);
                out.write_all(self.config.render(&dump).as_bytes())?;
                out.flush()
            }
            #[cfg(feature = "tracing")]
            Sink::Tracing => {
                tracing::error!(
                    target: "error_origin",
                    {
                        "error.type" = err.type_name(),
                        "error.message" = %err,
                        origin = %err.location(),
                    },
                    "{}{}",
                    self.config.prefix,
                    dump.trim_end()
                );
                Ok(())
            }
        }
    }

    fn die(&self, err: &OriginError) -> ! {
        let _ = self.log(err);
        std::process::exit(self.config.exit_status())
    }
}

/// Wraps `value` and writes its stack dump to the global logger.
///
/// # Examples
///
/// ```no_run
/// error_origin::print(std::io::Error::other("connection reset"));
/// ```
#[track_caller]
#[inline(never)]
pub fn print(value: impl IntoCause) {
    let err = wrap_skip(value, HELPER_SKIP);
    let _ = ErrorLogger::global().log(&err);
}

/// Formats a message and writes its stack dump to the global logger.
///
/// Usually reached through [`printf!`](crate::printf).
#[track_caller]
#[inline(never)]
pub fn printf(args: fmt::Arguments<'_>) {
    let err = wrap_skip(args, HELPER_SKIP);
    let _ = ErrorLogger::global().log(&err);
}

/// Wraps `value`, writes its stack dump to the global logger and exits.
#[track_caller]
#[inline(never)]
pub fn fatal(value: impl IntoCause) -> ! {
    let err = wrap_skip(value, HELPER_SKIP);
    ErrorLogger::global().die(&err)
}

/// Formats a message, then behaves like [`fatal`].
///
/// Usually reached through [`fatalf!`](crate::fatalf).
#[track_caller]
#[inline(never)]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    let err = wrap_skip(args, HELPER_SKIP);
    ErrorLogger::global().die(&err)
}
