//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_origin::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`printf!`], [`fatalf!`]
//! - **Types**: [`OriginError`], [`Cause`], [`ErrorLogger`]
//! - **Functions**: [`wrap`], [`is`]
//! - **Traits**: [`IntoCause`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_origin::prelude::*;
//!
//! fn parse_port(raw: &str) -> OriginResult<u16> {
//!     raw.parse::<u16>().wrap_err_with(|| format!("parsing port {raw:?}"))
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert!(err.message().ends_with(": parsing port \"http\""));
//! ```

// Macros
pub use crate::{errorf, fatalf, printf};

// Core types
pub use crate::logger::ErrorLogger;
pub use crate::types::{Cause, OriginError, OriginResult};

// Functions
pub use crate::identity::is;
pub use crate::types::wrap;

// Traits
pub use crate::traits::{IntoCause, ResultExt};
