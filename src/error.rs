//! Crate-level error types.

use std::fmt;

/// Errors produced by the plotview crate.
#[derive(Debug)]
pub enum PlotViewError {
    /// An argument was outside the range an operation accepts.
    InvalidArgument(String),
    /// The selected backend does not implement the named operation.
    NotImplemented(&'static str),
    /// A dimension index exceeded the rank of the array it addressed.
    InvalidDimension {
        /// Requested dimension (or dimension count).
        dim: usize,
        /// Rank of the array.
        ndim: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PlotViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::NotImplemented(op) => {
                write!(f, "operation not implemented by this backend: {op}")
            }
            Self::InvalidDimension { dim, ndim } => {
                write!(f, "dimension {dim} out of range for array of rank {ndim}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PlotViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlotViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
