/// Error types for grid construction, site access and simulation setup.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid size or trial count outside the accepted range.
    /// Always reported at construction time.
    InvalidArgument(String),

    /// Row/col outside `[1, n]`, or a union-find element outside `[0, len)`.
    IndexError(String),
}

impl PercolationError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PercolationError::InvalidArgument(_))
    }

    pub fn is_index_error(&self) -> bool {
        matches!(self, PercolationError::IndexError(_))
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            PercolationError::IndexError(msg) => write!(f, "index out of range: {msg}"),
        }
    }
}

impl std::error::Error for PercolationError {}

pub type Result<T> = std::result::Result<T, PercolationError>;
