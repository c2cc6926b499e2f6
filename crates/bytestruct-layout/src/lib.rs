//! Compiles compact type-format strings into packed field layouts.
//!
//! A format string such as `"bI[4]f"` names one scalar per tag, with an
//! optional `[N]` repeat count. Compilation runs in two passes:
//! - [`grammar::validate`] checks the string's shape without computing sizes
//! - [`sizing::compute`] assigns offsets with checked arithmetic throughout
//!
//! The result is an immutable [`Layout`] that can be shared across threads
//! and reused for any number of pack/unpack calls.

pub mod config;
pub mod error;
pub mod grammar;
pub mod layout;
pub mod sizing;

use tracing::debug;

pub use bytestruct_scalar::{ByteOrder, ScalarType, POINTER_WIDTH};
pub use config::LayoutConfig;
pub use error::{LayoutError, OverflowKind, Result, SyntaxErrorKind};
pub use layout::{Field, Layout};

/// Compile `format` with the given byte order and no size cap.
pub fn compile(format: &str, byte_order: ByteOrder) -> Result<Layout> {
    Layout::with_config(format, &LayoutConfig::with_byte_order(byte_order))
}

impl Layout {
    /// Compile `format` as a big-endian layout.
    pub fn new(format: &str) -> Result<Self> {
        Self::with_config(format, &LayoutConfig::default())
    }

    /// Compile `format` with explicit configuration.
    pub fn with_config(format: &str, config: &LayoutConfig) -> Result<Self> {
        match build(format, config) {
            Ok(layout) => {
                debug!(
                    format,
                    fields = layout.len(),
                    total_size = layout.total_size(),
                    byte_order = %layout.byte_order(),
                    "compiled layout"
                );
                Ok(layout)
            }
            Err(err) => {
                debug!(format, error = %err, "rejected layout format");
                Err(err)
            }
        }
    }
}

fn build(format: &str, config: &LayoutConfig) -> Result<Layout> {
    let num_fields = grammar::validate(format)?;
    let sizing = sizing::compute_with_capacity(format, num_fields)?;

    if sizing.total_size > config.max_total_size {
        return Err(LayoutError::TooLarge {
            size: sizing.total_size,
            max: config.max_total_size,
        });
    }

    Ok(Layout::from_parts(
        format,
        config.byte_order,
        sizing.fields,
        sizing.total_size,
    ))
}
