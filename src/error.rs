// ptnode-fields/src/error.rs

use thiserror::Error;

/// Which node field a range violation was reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    DictOffset,
    PtNodeArraySize,
    Probability,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::DictOffset => "dict offset",
            FieldKind::PtNodeArraySize => "PtNode array size",
            FieldKind::Probability => "probability",
        };
        f.write_str(name)
    }
}

/// Failures of the growable buffer itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Unsupported uint field size: {0} (expected 1..=4 bytes)")]
    InvalidFieldSize(usize),

    #[error("Write of {size} bytes at {pos} crosses the end of the original buffer ({original_size})")]
    OutOfBounds {
        pos: usize,
        size: usize,
        original_size: usize,
    },

    #[error("Write of {size} bytes at {pos} goes beyond the tail position {tail}")]
    BeyondTail { pos: usize, size: usize, tail: usize },

    #[error("Additional buffer cannot grow to {requested} bytes (max {max})")]
    CapacityExceeded { requested: usize, max: usize },
}

/// Error type for node field encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} cannot be written: {value} is outside [{min}, {max}]")]
    RangeViolation {
        field: FieldKind,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Result type alias for field encoding operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Result type alias for the buffer collaborator.
pub type BufferResult<T> = std::result::Result<T, BufferError>;
