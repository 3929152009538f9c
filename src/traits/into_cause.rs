//! Trait for converting values into a constructor [`Cause`].
//!
//! # Implementations
//!
//! - `&str`, `String`, `Cow<'static, str>`, `fmt::Arguments` - become a message
//! - [`OriginError`], `&'static OriginError` - already wrapped, passed through
//! - [`StackError`] - keeps its captured stack
//! - `Box<dyn Error + Send + Sync>` - inspected once for the two types above
//! - `Arc<dyn Error + Send + Sync>` - shared, identity preserved
//! - common `std` error types, through [`impl_into_cause!`](crate::impl_into_cause)
//! - [`Cause`] - identity conversion
//!
//! # Examples
//!
//! ```
//! use error_origin::{traits::IntoCause, Cause};
//!
//! assert_eq!("plain".into_cause().kind(), "message");
//! assert_eq!(std::io::Error::other("io").into_cause().kind(), "error");
//! assert_eq!(Cause::message("x").into_cause().kind(), "message");
//! ```
use std::borrow::Cow;
use std::fmt;

use crate::types::cause::{BoxError, SharedError};
use crate::types::{Cause, MessageError, OriginError, StackError};

/// Converts a value into a [`Cause`] for wrapping.
///
/// # Implementing for Custom Types
///
/// 1. Use the [`impl_into_cause!`](crate::impl_into_cause) macro for error types:
///    ```ignore
///    impl_into_cause!(MyError);
///    ```
///
/// 2. Implement the trait manually:
///    ```
///    use error_origin::{traits::IntoCause, Cause};
///
///    struct Rejected { field: &'static str }
///
///    impl IntoCause for Rejected {
///        fn into_cause(self) -> Cause {
///            Cause::message(format!("rejected field {}", self.field))
///        }
///    }
///    ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be wrapped as an error cause",
    label = "this type does not implement `IntoCause`",
    note = "use `impl_into_cause!({Self})` for error types, or `Cause::display(&value)` for other displayable values"
)]
pub trait IntoCause {
    /// Converts `self` into a [`Cause`].
    fn into_cause(self) -> Cause;
}

impl IntoCause for Cause {
    /// Identity conversion (no-op).
    #[inline]
    fn into_cause(self) -> Cause {
        self
    }
}

impl IntoCause for &str {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::message(self)
    }
}

impl IntoCause for String {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Message(self)
    }
}

impl IntoCause for Cow<'static, str> {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Message(self.into_owned())
    }
}

impl IntoCause for fmt::Arguments<'_> {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Message(self.to_string())
    }
}

impl IntoCause for OriginError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Wrapped(self)
    }
}

impl IntoCause for &'static OriginError {
    /// Clones share the cause, so the result stays identical to the static.
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Wrapped(self.clone())
    }
}

impl IntoCause for StackError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Stacked(self)
    }
}

impl IntoCause for BoxError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::from_boxed(self, core::any::type_name::<BoxError>())
    }
}

impl IntoCause for SharedError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Shared {
            error: self,
            type_name: core::any::type_name::<SharedError>(),
        }
    }
}

crate::impl_into_cause!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::net::AddrParseError,
    std::time::SystemTimeError,
    MessageError,
);
