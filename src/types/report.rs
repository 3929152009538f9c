//! Structured snapshot of a stack dump.

use core::fmt::{self, Display};
use core::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::stack_error::render_stack;
use crate::types::{FrameVec, OriginError};

/// Source position of the wrapping call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginLocation {
    /// Source file path as recorded by the compiler.
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl From<&Location<'_>> for OriginLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_owned(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl Display for OriginLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One resolved symbol of a captured frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameReport {
    /// Demangled symbol name, without the hash suffix.
    pub symbol: Option<String>,
    /// Source file of the symbol, when debug info has one.
    pub file: Option<String>,
    /// Source line of the symbol, when debug info has one.
    pub line: Option<u32>,
}

/// Stack dump of an [`OriginError`] as plain data.
///
/// `Display` renders the same text as [`OriginError::stack_dump`].
///
/// # Examples
///
/// ```
/// use error_origin::OriginError;
///
/// let report = OriginError::with_suffix("illegal argument", "missing id").report();
/// assert_eq!(report.message, "illegal argument: missing id");
/// assert!(report.to_string().starts_with(&report.type_name));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReport {
    /// Type name of the innermost wrapped error.
    pub type_name: String,
    /// Rendered message, suffix included.
    pub message: String,
    /// Where the error was wrapped.
    pub location: OriginLocation,
    /// Captured frames, one entry per resolved symbol.
    pub frames: FrameVec<FrameReport>,
    #[cfg_attr(feature = "serde", serde(skip))]
    stack: String,
}

impl StackReport {
    pub(crate) fn from_origin(origin: &OriginError) -> Self {
        let captured = origin.cause().frames();

        let mut frames = FrameVec::with_capacity(captured.len());
        for frame in captured {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                frames.push(FrameReport {
                    symbol: None,
                    file: None,
                    line: None,
                });
            }
            frames.extend(symbols.iter().map(|symbol| FrameReport {
                symbol: symbol.name().map(|name| format!("{name:#}")),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            }));
        }

        Self {
            type_name: origin.type_name().to_owned(),
            message: origin.message(),
            location: origin.location().into(),
            frames,
            stack: render_stack(captured),
        }
    }
}

impl Display for StackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\n{}", self.type_name, self.message, self.stack)
    }
}
