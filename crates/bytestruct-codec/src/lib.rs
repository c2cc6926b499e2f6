//! Packs typed values into flat byte buffers and back, driven by a compiled
//! [`Layout`](bytestruct_layout::Layout).
//!
//! Arguments are tagged ([`Value`], [`Slot`]) so the whole list can be checked
//! against the layout before anything is written. A failed call leaves the
//! buffer (or every slot) exactly as it was.

pub mod builder;
pub mod engine;
pub mod error;
pub mod value;

pub use builder::{Packer, Unpacker};
pub use engine::{decode, pack, pack_to_bytes, unpack};
pub use error::{CodecError, Mismatch, Result};
pub use value::{FieldValues, Slot, Value};
