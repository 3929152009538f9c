//! Error wrapper that remembers where it came from.
//!
//! [`OriginError`] enriches any error or message with:
//! - the call stack captured at the point of wrapping (through [`StackError`])
//! - an optional suffix appended to the message when rendered
//! - transitive identity comparison via [`is`](crate::is)

use core::error::Error;
use core::fmt::{self, Display};
use core::panic::Location;
use std::sync::{Arc, LazyLock};

use crate::traits::IntoCause;
use crate::types::{Cause, StackError, StackReport};

/// Skip depth that attributes the origin to the caller of the wrapping call.
pub const DEFAULT_SKIP: usize = 1;

/// Process-wide sentinel for rejected arguments.
///
/// Wrap it with a suffix to add detail while staying comparable:
///
/// ```
/// use error_origin::{is, OriginError, ILLEGAL_ARGUMENT};
///
/// let err = OriginError::with_suffix(&*ILLEGAL_ARGUMENT, "missing id");
/// assert_eq!(err.message(), "illegal argument: missing id");
/// assert!(is(&err, &*ILLEGAL_ARGUMENT));
/// ```
pub static ILLEGAL_ARGUMENT: LazyLock<OriginError> =
    LazyLock::new(|| OriginError::new("illegal argument"));

/// Error wrapper carrying a stack-capturing cause and an optional suffix.
///
/// Clones share the cause, so a clone is the same error under
/// [`is`](crate::is).
///
/// # Examples
///
/// ```
/// use error_origin::OriginError;
///
/// let err = OriginError::new("illegal argument");
/// assert_eq!(err.message(), "illegal argument");
///
/// let err = OriginError::with_suffix("illegal argument", "missing id");
/// assert_eq!(err.message(), "illegal argument: missing id");
/// ```
#[must_use]
#[derive(Clone)]
pub struct OriginError {
    cause: Arc<StackError>,
    suffix: Option<String>,
}

impl OriginError {
    /// Wraps `value`, recording the caller as the origin.
    ///
    /// An `OriginError` is returned unchanged.
    #[track_caller]
    #[inline(never)]
    pub fn new(value: impl IntoCause) -> Self {
        Self::build(value.into_cause(), None, DEFAULT_SKIP, Location::caller())
    }

    /// Wraps `value` and attaches `suffix`, recording the caller as the origin.
    ///
    /// The suffix is kept apart from the cause and appended on every render.
    /// An `OriginError` input becomes the cause of the new error, so the
    /// suffix is never dropped and the result still matches the input under
    /// [`is`](crate::is).
    #[track_caller]
    #[inline(never)]
    pub fn with_suffix(value: impl IntoCause, suffix: impl Into<String>) -> Self {
        let suffix = Some(suffix.into()).filter(|s| !s.is_empty());
        Self::build(value.into_cause(), suffix, DEFAULT_SKIP, Location::caller())
    }

    /// Formats a message and wraps it, recording the caller as the origin.
    ///
    /// Usually reached through [`errorf!`](crate::errorf).
    #[track_caller]
    #[inline(never)]
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        Self::build(Cause::message(args.to_string()), None, DEFAULT_SKIP, Location::caller())
    }

    /// Wraps `value`, capturing the stack `skip` frames above this call.
    ///
    /// Never fails. An `OriginError` is returned unchanged; a [`StackError`]
    /// keeps its own stack.
    #[track_caller]
    #[inline(never)]
    pub fn wrap(value: impl IntoCause, skip: usize) -> Self {
        Self::build(value.into_cause(), None, skip, Location::caller())
    }

    /// Shared tail of every constructor; inlined so it adds no frame.
    #[inline(always)]
    pub(crate) fn build(
        cause: Cause,
        suffix: Option<String>,
        skip: usize,
        location: &'static Location<'static>,
    ) -> Self {
        match cause {
            Cause::Wrapped(origin) if suffix.is_none() => origin,
            cause => Self {
                cause: Arc::new(StackError::from_cause(cause, skip, location)),
                suffix,
            },
        }
    }

    /// Returns the stack-capturing cause.
    #[inline]
    pub fn cause(&self) -> &StackError {
        &self.cause
    }

    /// Returns the suffix, if any.
    #[inline]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Returns the type name of the wrapped error.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.cause.type_name()
    }

    /// Returns where this error was wrapped.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.cause.location()
    }

    /// Renders the message: the cause's message, then `": <suffix>"` when a
    /// suffix is present.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Renders `"<type> <message>\n<stack>"`.
    #[must_use]
    pub fn stack_dump(&self) -> String {
        format!("{} {}\n{}", self.type_name(), self, self.cause.stack())
    }

    /// Captures the stack dump as structured data.
    #[must_use]
    pub fn report(&self) -> StackReport {
        StackReport::from_origin(self)
    }

    /// Returns `true` if this error is, or transitively wraps, `target`.
    #[inline]
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        crate::identity::is(self, target)
    }
}

impl Display for OriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.cause, f)?;
        if let Some(suffix) = &self.suffix {
            write!(f, ": {suffix}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for OriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OriginError")
            .field("cause", &self.cause)
            .field("suffix", &self.suffix)
            .finish()
    }
}

impl Error for OriginError {
    /// Returns the stack-capturing cause.
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Wraps `value` with the default skip depth.
///
/// Never fails and never double-wraps.
///
/// # Examples
///
/// ```
/// use error_origin::wrap;
///
/// let err = wrap(std::io::Error::other("pipe closed"));
/// assert_eq!(err.message(), "pipe closed");
///
/// let same = wrap(err.clone());
/// assert!(error_origin::is(&same, &err));
/// ```
#[track_caller]
#[inline(never)]
pub fn wrap(value: impl IntoCause) -> OriginError {
    OriginError::build(value.into_cause(), None, DEFAULT_SKIP, Location::caller())
}

/// Wraps `value`, capturing the stack `skip` frames above this call.
#[track_caller]
#[inline(never)]
pub fn wrap_skip(value: impl IntoCause, skip: usize) -> OriginError {
    OriginError::build(value.into_cause(), None, skip, Location::caller())
}
