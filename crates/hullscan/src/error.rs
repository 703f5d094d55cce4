use std::collections::TryReserveError;
use std::fmt;

/// Error type shared by hull construction and metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Too few points, or a non-finite coordinate.
    InvalidInput { reason: String },
    /// A working buffer could not be reserved.
    Allocation { reason: String },
}

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn too_few(op: &str, need: usize, got: usize) -> Self {
        Self::invalid(format!("{op} requires at least {need} points, got {got}"))
    }
}

impl From<TryReserveError> for HullError {
    fn from(err: TryReserveError) -> Self {
        Self::Allocation {
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::Allocation { reason } => write!(f, "allocation failed: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

pub type Result<T> = std::result::Result<T, HullError>;
