/// Errors produced while interpreting scalar-level settings.
#[derive(Debug, thiserror::Error)]
pub enum ScalarError {
    /// The byte-order name is not one of `big`, `little`, `native`, `sortable`.
    #[error("unknown byte order {0:?} (expected big, little, native or sortable)")]
    UnknownByteOrder(String),
}

pub type Result<T> = std::result::Result<T, ScalarError>;
