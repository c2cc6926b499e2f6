use std::fmt;

use bytestruct::codec::{CodecError, Mismatch};
use bytestruct::Error;

// Exit codes follow the sysexits-style table shared by our CLIs.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Map a library error to an exit code.
///
/// A bad format string or the wrong number of arguments is a usage problem;
/// values or buffers that do not fit the layout are invalid data.
pub fn library_error(context: &str, err: impl Into<Error>) -> CliError {
    let err = err.into();
    let code = match &err {
        Error::Scalar(_) | Error::Layout(_) => USAGE,
        Error::Codec(CodecError::ArityOrTypeMismatch(Mismatch::Arity { .. })) => USAGE,
        Error::Codec(_) => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn io_error(context: &str, err: std::io::Error) -> CliError {
    CliError::new(FAILURE, format!("{context}: {err}"))
}
