/// Errors that can occur while compiling a format string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The format string is malformed.
    #[error("invalid format at byte {position}: {kind}")]
    Syntax {
        position: usize,
        kind: SyntaxErrorKind,
    },

    /// A count, field span or running total does not fit in `usize`.
    #[error("layout size overflows usize ({0})")]
    Overflow(OverflowKind),

    /// The format string declares no fields.
    #[error("format string declares no fields")]
    Empty,

    /// The layout is larger than the configured maximum.
    #[error("layout too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
}

impl LayoutError {
    pub(crate) fn syntax(position: usize, kind: SyntaxErrorKind) -> Self {
        LayoutError::Syntax { position, kind }
    }
}

/// What exactly is wrong with a malformed format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("unknown type tag {0:?}")]
    UnknownTag(char),

    #[error("'[' must directly follow a type tag")]
    MisplacedBracket,

    #[error("unmatched ']'")]
    UnmatchedClose,

    #[error("{0:?} is not a decimal digit")]
    InvalidDigit(char),

    #[error("array count is empty")]
    EmptyCount,

    #[error("array count must be at least 1")]
    ZeroCount,

    #[error("array count is never closed with ']'")]
    Unterminated,
}

/// Which arithmetic step overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverflowKind {
    #[error("array count")]
    Count,

    #[error("field span")]
    Span,

    #[error("total size")]
    Total,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
