use bytestruct_scalar::ScalarType;

/// Errors that can occur while packing or unpacking a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The buffer is shorter than the layout's total size.
    #[error("buffer too small ({actual} bytes, layout needs {needed})")]
    BufferTooSmall { needed: usize, actual: usize },

    /// The supplied arguments do not line up with the layout's fields.
    #[error("arguments do not match layout: {0}")]
    ArityOrTypeMismatch(Mismatch),
}

/// How an argument list disagrees with a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("expected {expected} arguments, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("field {field} is {expected}, argument is {actual}")]
    Type {
        field: usize,
        expected: ScalarType,
        actual: ScalarType,
    },

    #[error("field {field} holds {expected} elements, argument has {actual}")]
    Count {
        field: usize,
        expected: usize,
        actual: usize,
    },
}

impl From<Mismatch> for CodecError {
    fn from(mismatch: Mismatch) -> Self {
        CodecError::ArityOrTypeMismatch(mismatch)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
