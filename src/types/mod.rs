//! Error types and utilities.
//!
//! This module provides the stack-capturing primitive, the wrapper built on
//! top of it, and the input and report shapes around them.
//!
//! # Examples
//!
//! ```
//! use error_origin::errorf;
//!
//! let err = errorf!("bad value: {}", 5);
//! assert_eq!(err.message(), "bad value: 5");
//!
//! let dump = err.stack_dump();
//! assert!(dump.starts_with(err.type_name()));
//! ```
use smallvec::SmallVec;

pub mod cause;
pub mod origin_error;
pub mod report;
pub mod stack_error;

pub use cause::*;
pub use origin_error::*;
pub use report::*;
pub use stack_error::StackError;

/// SmallVec-backed collection used for captured and reported frames.
///
/// Uses inline storage for up to 16 elements, enough for shallow call
/// stacks without touching the heap.
pub type FrameVec<T> = SmallVec<[T; 16]>;

/// Result alias that fails with an [`OriginError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type OriginResult<T> = Result<T, OriginError>;
