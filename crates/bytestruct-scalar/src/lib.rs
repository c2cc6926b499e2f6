//! Scalar building blocks for bytestruct.
//!
//! This is the lowest layer of bytestruct. It defines:
//! - [`ScalarType`], the closed table of field kinds with their format tags and widths
//! - [`ByteOrder`], the four serialization policies a layout can use
//! - [`LexOrder`], order-preserving encodings where byte order equals value order
//! - [`Element`], the per-type dispatch that writes/reads one scalar under a policy

pub mod element;
pub mod error;
pub mod lexorder;
pub mod order;
pub mod scalar;

pub use element::{read_all, write_all, Element};
pub use error::{Result, ScalarError};
pub use lexorder::{read_sortable, write_sortable, LexOrder};
pub use order::ByteOrder;
pub use scalar::{ScalarType, POINTER_WIDTH};
