//! Compact type-format strings for packed binary records.
//!
//! A format such as `"bI[4]f"` compiles once into an immutable layout; the
//! layout then packs typed values into a flat buffer and unpacks them again.
//! Under the sortable byte order, packed buffers compare with `memcmp` in the
//! same order as the values they hold, field by field.
//!
//! # Crate Structure
//!
//! - [`scalar`]: scalar types, byte orders, and the order-preserving encoding
//! - [`layout`]: format string compiler
//! - [`codec`]: pack/unpack engine
//!
//! ```
//! use bytestruct::{compile, pack_to_bytes, ByteOrder, Value};
//!
//! let layout = compile("d[2]", ByteOrder::Sortable)?;
//! let a = pack_to_bytes(&layout, &[Value::Float64s(&[-1.0, 2.0])])?;
//! let b = pack_to_bytes(&layout, &[Value::Float64s(&[-2.0, 3.0])])?;
//! assert!(b < a);
//! # Ok::<(), bytestruct::Error>(())
//! ```

mod error;

pub use error::{Error, Result};

/// Re-export scalar types.
pub mod scalar {
    pub use bytestruct_scalar::*;
}

/// Re-export layout types.
pub mod layout {
    pub use bytestruct_layout::*;
}

/// Re-export codec types.
pub mod codec {
    pub use bytestruct_codec::*;
}

pub use bytestruct_codec::{
    decode, pack, pack_to_bytes, unpack, FieldValues, Packer, Slot, Unpacker, Value,
};
pub use bytestruct_layout::{compile, Field, Layout, LayoutConfig};
pub use bytestruct_scalar::{ByteOrder, ScalarType, POINTER_WIDTH};
