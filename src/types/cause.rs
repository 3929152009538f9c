//! Tagged input accepted by every constructor.
//!
//! [`Cause`] is the single boundary where loosely-typed input (strings,
//! arbitrary errors, already-wrapped errors) is sorted into one of a few
//! shapes. Everything downstream matches on the variant instead of probing
//! types again.

use core::any::type_name;
use core::error::Error;
use core::fmt::{self, Display};
use std::sync::Arc;

use crate::types::{OriginError, StackError};

/// Boxed, thread-safe error object.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Shared, thread-safe error object. Identity is preserved across clones.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Generic error produced from a plain message.
///
/// Strings handed to a constructor become one of these before a stack is
/// captured, so every [`StackError`] wraps a real error value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError(String);

impl MessageError {
    /// Creates a message error.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MessageError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for MessageError {}

/// Normalized constructor input.
///
/// Build one through [`IntoCause`](crate::traits::IntoCause) or the
/// associated constructors below. [`Cause::error`] is the only place that
/// inspects a concrete error type, recognizing errors that already carry a
/// stack.
pub enum Cause {
    /// Plain text, becomes a [`MessageError`].
    Message(String),
    /// Owned error of any other type.
    Error {
        /// The error value.
        error: BoxError,
        /// Type name recorded before the value was boxed.
        type_name: &'static str,
    },
    /// Error shared with the caller; identity checks see the same allocation.
    Shared {
        /// The shared error.
        error: SharedError,
        /// Type name recorded before the value was erased.
        type_name: &'static str,
    },
    /// Process-lifetime error such as a sentinel.
    Static {
        /// The referenced error.
        error: &'static (dyn Error + Send + Sync),
        /// Type name of the referenced value.
        type_name: &'static str,
    },
    /// Error that already carries a captured stack.
    Stacked(StackError),
    /// Error that is already an [`OriginError`].
    Wrapped(OriginError),
}

impl Cause {
    /// Creates a message cause.
    #[inline]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Stringifies any displayable value into a message cause.
    #[inline]
    pub fn display<D: Display + ?Sized>(value: &D) -> Self {
        Self::Message(value.to_string())
    }

    /// Creates a cause from an owned error.
    ///
    /// Errors that are already an [`OriginError`] or a [`StackError`] are
    /// recognized here and keep their captured stack.
    pub fn error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error), type_name::<E>())
    }

    /// Creates a cause from a shared error, keeping its identity.
    #[inline]
    pub fn shared<E>(error: Arc<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Shared {
            error,
            type_name: type_name::<E>(),
        }
    }

    /// Creates a cause from a process-lifetime error.
    #[inline]
    pub fn from_static<E>(error: &'static E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Static {
            error,
            type_name: type_name::<E>(),
        }
    }

    pub(crate) fn from_boxed(error: BoxError, type_name: &'static str) -> Self {
        match error.downcast::<OriginError>() {
            Ok(origin) => Self::Wrapped(*origin),
            Err(error) => match error.downcast::<StackError>() {
                Ok(stack) => Self::Stacked(*stack),
                Err(error) => Self::Error { error, type_name },
            },
        }
    }

    /// Returns the variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Error { .. } => "error",
            Self::Shared { .. } => "shared",
            Self::Static { .. } => "static",
            Self::Stacked(_) => "stacked",
            Self::Wrapped(_) => "wrapped",
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Error { error, type_name } => f
                .debug_struct("Error")
                .field("type_name", type_name)
                .field("error", error)
                .finish(),
            Self::Shared { error, type_name } => f
                .debug_struct("Shared")
                .field("type_name", type_name)
                .field("error", error)
                .finish(),
            Self::Static { error, type_name } => f
                .debug_struct("Static")
                .field("type_name", type_name)
                .field("error", error)
                .finish(),
            Self::Stacked(stack) => f.debug_tuple("Stacked").field(stack).finish(),
            Self::Wrapped(origin) => f.debug_tuple("Wrapped").field(origin).finish(),
        }
    }
}
