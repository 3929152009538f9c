//! Core traits for turning values and results into [`OriginError`](crate::OriginError).
//!
//! - [`IntoCause`]: Conversion trait feeding every constructor
//! - [`ResultExt`]: Wraps the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_origin::traits::{IntoCause, ResultExt};
//!
//! let cause = "failed".into_cause();
//! assert_eq!(cause.kind(), "message");
//!
//! let err = Err::<(), _>("failed").wrap_err().unwrap_err();
//! assert_eq!(err.message(), "failed");
//! ```

pub mod into_cause;
pub mod result_ext;

pub use into_cause::IntoCause;
pub use result_ext::ResultExt;
