use bytes::Bytes;
use bytestruct_layout::Layout;

use crate::engine;
use crate::error::Result;
use crate::value::{Slot, Value};

/// Collects arguments for one record, then packs them.
///
/// ```
/// use bytestruct_codec::Packer;
/// use bytestruct_layout::{compile, ByteOrder};
///
/// let layout = compile("bI[2]", ByteOrder::BigEndian).unwrap();
/// let bytes = Packer::new(&layout).push(-1i8).push(&[1u32, 2]).to_bytes().unwrap();
/// assert_eq!(bytes.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct Packer<'l, 'a> {
    layout: &'l Layout,
    values: Vec<Value<'a>>,
}

impl<'l, 'a> Packer<'l, 'a> {
    pub fn new(layout: &'l Layout) -> Self {
        Self {
            layout,
            values: Vec::with_capacity(layout.len()),
        }
    }

    /// Append the argument for the next field.
    pub fn push(mut self, value: impl Into<Value<'a>>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values(&self) -> &[Value<'a>] {
        &self.values
    }

    pub fn pack(&self, buf: &mut [u8]) -> Result<()> {
        engine::pack(self.layout, buf, &self.values)
    }

    pub fn to_bytes(&self) -> Result<Bytes> {
        engine::pack_to_bytes(self.layout, &self.values)
    }
}

/// Collects destinations for one record, then unpacks into them.
#[derive(Debug)]
pub struct Unpacker<'l, 'a> {
    layout: &'l Layout,
    slots: Vec<Slot<'a>>,
}

impl<'l, 'a> Unpacker<'l, 'a> {
    pub fn new(layout: &'l Layout) -> Self {
        Self {
            layout,
            slots: Vec::with_capacity(layout.len()),
        }
    }

    /// Append the destination for the next field.
    pub fn push(mut self, slot: impl Into<Slot<'a>>) -> Self {
        self.slots.push(slot.into());
        self
    }

    pub fn unpack(mut self, buf: &[u8]) -> Result<()> {
        engine::unpack(self.layout, buf, &mut self.slots)
    }
}
