//! Stack-capturing error primitive.
//!
//! [`StackError`] pairs an error value with the call stack recorded when it
//! was wrapped. Frame walking and symbolication are delegated to the
//! `backtrace` crate; this module only decides where the recorded trace
//! starts and how it is rendered.
//!
//! # Skip depth
//!
//! Every wrapping entry point takes a `skip` count measured from the entry
//! point itself: `0` starts the trace at the entry point's own frame, `1` at
//! its caller, `2` at the caller's caller. Frame skipping is best-effort when
//! the optimizer inlines or tail-calls through the caller; the
//! [`location`](StackError::location) recorded through `#[track_caller]` is
//! always exact.

use core::any::type_name;
use core::error::Error;
use core::fmt::{self, Display, Write as _};
use core::panic::Location;
use std::sync::OnceLock;

use backtrace::{Backtrace, BacktraceFrame, Frame};

use crate::types::cause::{BoxError, Cause, MessageError, SharedError};
use crate::types::{FrameVec, OriginError};

/// Frames between the capture routine and the public entry point.
const INTERNAL_FRAMES: usize = 1;

/// Placeholder used when a frame carries no symbol information.
const UNKNOWN: &str = "???";

pub(crate) enum Source {
    Owned(BoxError),
    Shared(SharedError),
    Static(&'static (dyn Error + Send + Sync)),
}

impl Source {
    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Owned(error) => error.as_ref(),
            Self::Shared(error) => error.as_ref(),
            Self::Static(error) => *error,
        }
    }
}

/// An error value together with the call stack captured when it was wrapped.
///
/// # Examples
///
/// ```
/// use error_origin::StackError;
///
/// let err = StackError::wrap("disk full", 1);
/// assert_eq!(err.to_string(), "disk full");
/// assert!(err.type_name().ends_with("MessageError"));
/// assert!(!err.stack().is_empty());
/// ```
pub struct StackError {
    error: Source,
    type_name: &'static str,
    location: &'static Location<'static>,
    frames: Backtrace,
    resolved: OnceLock<Backtrace>,
}

impl StackError {
    /// Wraps `value`, capturing the stack `skip` frames above this call.
    ///
    /// A value that is already a `StackError` is returned as is, keeping its
    /// original stack. Any other input, an [`OriginError`] included, becomes
    /// the inner error of a fresh capture.
    #[track_caller]
    #[inline(never)]
    pub fn wrap(value: impl crate::traits::IntoCause, skip: usize) -> Self {
        Self::from_cause(value.into_cause(), skip, Location::caller())
    }

    #[inline(never)]
    pub(crate) fn from_cause(
        cause: Cause,
        skip: usize,
        location: &'static Location<'static>,
    ) -> Self {
        let (error, type_name) = match cause {
            Cause::Stacked(stack) => return stack,
            Cause::Message(message) => {
                (Source::Owned(Box::new(MessageError::new(message))), type_name::<MessageError>())
            }
            Cause::Error { error, type_name } => (Source::Owned(error), type_name),
            Cause::Shared { error, type_name } => (Source::Shared(error), type_name),
            Cause::Static { error, type_name } => (Source::Static(error), type_name),
            Cause::Wrapped(origin) => (Source::Owned(Box::new(origin)), type_name::<OriginError>()),
        };

        Self {
            error,
            type_name,
            location,
            frames: Self::capture_frames(skip),
            resolved: OnceLock::new(),
        }
    }

    /// Records raw frames, dropping everything up to the requested origin.
    ///
    /// The walk starts inside the unwinder, so the first frames are located
    /// by matching this function's own symbol address. If that address is
    /// never reported the full trace is kept.
    #[inline(never)]
    fn capture_frames(skip: usize) -> Backtrace {
        let marker = Self::capture_frames as fn(usize) -> Backtrace as usize;
        let mut frames: FrameVec<Frame> = FrameVec::new();
        let mut own_index = None;

        backtrace::trace(|frame| {
            if own_index.is_none() && frame.symbol_address() as usize == marker {
                own_index = Some(frames.len());
            }
            frames.push(frame.clone());
            true
        });

        let first = own_index.map_or(0, |index| index + 1 + INTERNAL_FRAMES + skip);
        let kept: Vec<BacktraceFrame> =
            frames.into_iter().skip(first).map(BacktraceFrame::from).collect();
        Backtrace::from(kept)
    }

    /// Returns the type name of the wrapped error.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the wrapped error.
    #[inline]
    pub fn inner(&self) -> &(dyn Error + 'static) {
        self.error.as_error()
    }

    /// Returns the source location of the call that captured this stack.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the captured frames with symbols resolved.
    ///
    /// Resolution happens on first access and is cached.
    pub fn frames(&self) -> &[BacktraceFrame] {
        self.resolved
            .get_or_init(|| {
                let mut resolved = self.frames.clone();
                resolved.resolve();
                resolved
            })
            .frames()
    }

    /// Renders the captured stack, one `file:line (ip)` / `\tsymbol` pair per
    /// frame.
    pub fn stack(&self) -> String {
        render_stack(self.frames())
    }
}

pub(crate) fn render_stack(frames: &[BacktraceFrame]) -> String {
    let mut out = String::with_capacity(frames.len() * 96);

    for frame in frames {
        let ip = frame.ip() as usize;
        let symbols = frame.symbols();

        if symbols.is_empty() {
            let _ = writeln!(out, "{UNKNOWN} ({ip:#x})\n\t{UNKNOWN}");
            continue;
        }

        for symbol in symbols {
            match (symbol.filename(), symbol.lineno()) {
                (Some(file), Some(line)) => {
                    let _ = write!(out, "{}:{line} ({ip:#x})", file.display());
                }
                (Some(file), None) => {
                    let _ = write!(out, "{} ({ip:#x})", file.display());
                }
                _ => {
                    let _ = write!(out, "{UNKNOWN} ({ip:#x})");
                }
            }
            match symbol.name() {
                Some(name) => {
                    let _ = writeln!(out, "\n\t{name:#}");
                }
                None => {
                    let _ = writeln!(out, "\n\t{UNKNOWN}");
                }
            }
        }
    }

    out
}

impl Display for StackError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.inner(), f)
    }
}

impl fmt::Debug for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackError")
            .field("type_name", &self.type_name)
            .field("error", &self.inner())
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl Error for StackError {
    /// Returns the wrapped error, enabling error chain traversal.
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner())
    }
}
