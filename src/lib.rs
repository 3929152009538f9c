//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_origin::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping with an Origin
//!
//! ```
//! use error_origin::OriginError;
//!
//! let err = OriginError::new("illegal argument");
//! assert_eq!(err.message(), "illegal argument");
//!
//! let dump = err.stack_dump();
//! let (head, stack) = dump.split_once('\n').unwrap();
//! assert!(head.ends_with(" illegal argument"));
//! assert!(!stack.is_empty());
//! ```
//!
//! ## Suffixes and Formatting
//!
//! ```
//! use error_origin::{errorf, OriginError};
//!
//! let err = OriginError::with_suffix("illegal argument", "missing id");
//! assert_eq!(err.message(), "illegal argument: missing id");
//!
//! let err = errorf!("bad value: {}", 5);
//! assert_eq!(err.message(), "bad value: 5");
//! ```
//!
//! ## Identity Through Wrapper Layers
//!
//! ```
//! use std::sync::Arc;
//! use error_origin::{is, wrap, Cause};
//!
//! let base = Arc::new(std::io::Error::other("x"));
//! let w1 = wrap(Cause::shared(base.clone()));
//! let w2 = wrap(w1.clone());
//!
//! assert!(is(&w2, &*base));
//! assert!(!is(&wrap("a"), &wrap("b")));
//! ```

/// Transitive identity comparison
pub mod identity;
/// Stack-dump logging and termination helpers
pub mod logger;
/// Formatting and trait-implementation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and `Result` extension traits
pub mod traits;
/// OriginError, StackError and their input/report shapes
pub mod types;

pub use identity::{is, unwrap_layer};
pub use logger::{fatal, print, ErrorLogger, LoggerConfig, Sink};
pub use traits::*;
pub use types::{
    wrap, wrap_skip, Cause, FrameReport, FrameVec, MessageError, OriginError, OriginLocation,
    OriginResult, StackError, StackReport, DEFAULT_SKIP, ILLEGAL_ARGUMENT,
};
