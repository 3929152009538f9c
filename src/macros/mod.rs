//! Ergonomic macros over the formatted constructors and the global logger.
//!
//! - [`macro@crate::errorf`] - Formats a message into an [`OriginError`](crate::OriginError).
//! - [`macro@crate::printf`] - Formats a message and prints its stack dump to the
//!   global [`ErrorLogger`](crate::ErrorLogger).
//! - [`macro@crate::fatalf`] - Like `printf!`, then exits the process.
//! - [`macro@crate::impl_into_cause`] - Lets error types be passed to every
//!   constructor directly.
//!
//! # Examples
//!
//! ```
//! use error_origin::errorf;
//!
//! let id = 42;
//! let err = errorf!("user {} not found", id);
//! assert_eq!(err.message(), "user 42 not found");
//! ```

/// Formats a message and wraps it into an [`OriginError`](crate::OriginError),
/// recording the call site as the origin.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use error_origin::errorf;
///
/// let err = errorf!("bad value: {}", 5);
/// assert_eq!(err.message(), "bad value: 5");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::OriginError::errorf(format_args!($($arg)*))
    };
}

/// Formats a message and writes its stack dump to the global
/// [`ErrorLogger`](crate::ErrorLogger).
///
/// # Examples
///
/// ```no_run
/// use error_origin::printf;
///
/// printf!("retrying request {}", 3);
/// ```
#[macro_export]
macro_rules! printf {
    ($($arg:tt)*) => {
        $crate::logger::printf(format_args!($($arg)*))
    };
}

/// Formats a message, writes its stack dump to the global
/// [`ErrorLogger`](crate::ErrorLogger) and exits the process.
///
/// # Examples
///
/// ```no_run
/// use error_origin::fatalf;
///
/// fn check(port: u16) {
///     if port == 0 {
///         fatalf!("invalid port {}", port);
///     }
/// }
/// ```
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::logger::fatalf(format_args!($($arg)*))
    };
}

/// Implements [`IntoCause`](crate::traits::IntoCause) for error types.
///
/// Each listed type must implement `core::error::Error + Send + Sync + 'static`.
/// The value is converted through [`Cause::error`](crate::Cause::error), so its
/// type name is recorded before it is boxed.
///
/// # Examples
///
/// ```
/// use error_origin::{impl_into_cause, OriginError};
///
/// #[derive(Debug)]
/// struct QuotaExceeded;
///
/// impl std::fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("quota exceeded")
///     }
/// }
///
/// impl std::error::Error for QuotaExceeded {}
///
/// impl_into_cause!(QuotaExceeded);
///
/// let err = OriginError::new(QuotaExceeded);
/// assert_eq!(err.message(), "quota exceeded");
/// assert!(err.type_name().ends_with("QuotaExceeded"));
/// ```
#[macro_export]
macro_rules! impl_into_cause {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::IntoCause for $ty {
                #[inline]
                fn into_cause(self) -> $crate::Cause {
                    $crate::Cause::error(self)
                }
            }
        )+
    };
}
