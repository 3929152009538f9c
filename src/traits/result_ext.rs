//! Extension trait for wrapping the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use error_origin::traits::ResultExt;
//! use error_origin::OriginResult;
//!
//! fn load_config() -> OriginResult<String> {
//!     std::fs::read_to_string("config.toml").wrap_err_suffix("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.message().ends_with(": loading configuration"));
//! ```

use core::panic::Location;

use crate::traits::IntoCause;
use crate::types::{OriginError, OriginResult, DEFAULT_SKIP};

/// Wraps `Err` values into [`OriginError`], recording the caller as the
/// origin.
///
/// `Ok` values pass through untouched and nothing is captured for them.
pub trait ResultExt<T> {
    /// Wraps the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_origin::traits::ResultExt;
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// assert_eq!(result.wrap_err().unwrap_err().message(), "failed");
    /// ```
    fn wrap_err(self) -> OriginResult<T>;

    /// Wraps the error and attaches a suffix.
    fn wrap_err_suffix<S: Into<String>>(self, suffix: S) -> OriginResult<T>;

    /// Wraps the error and attaches a lazily built suffix.
    ///
    /// The closure only runs on `Err`.
    fn wrap_err_with<S, F>(self, f: F) -> OriginResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T, E: IntoCause> ResultExt<T> for Result<T, E> {
    #[track_caller]
    #[inline(never)]
    fn wrap_err(self) -> OriginResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                Err(OriginError::build(error.into_cause(), None, DEFAULT_SKIP, Location::caller()))
            }
        }
    }

    #[track_caller]
    #[inline(never)]
    fn wrap_err_suffix<S: Into<String>>(self, suffix: S) -> OriginResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(with_suffix(error, suffix.into(), Location::caller())),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn wrap_err_with<S, F>(self, f: F) -> OriginResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(with_suffix(error, f().into(), Location::caller())),
        }
    }
}

#[inline(always)]
fn with_suffix(
    error: impl IntoCause,
    suffix: String,
    location: &'static Location<'static>,
) -> OriginError {
    let suffix = Some(suffix).filter(|s| !s.is_empty());
    OriginError::build(error.into_cause(), suffix, DEFAULT_SKIP, location)
}
