use bytes::{Bytes, BytesMut};
use bytestruct_layout::Layout;
use bytestruct_scalar::ScalarType;
use tracing::trace;

use crate::error::{CodecError, Mismatch, Result};
use crate::value::{FieldValues, Slot, Value};

/// Pack `values` into the first `layout.total_size()` bytes of `buf`.
///
/// Every argument is checked against the layout before the first byte is
/// written; on error `buf` is untouched. Bytes past `total_size` are never
/// touched either.
pub fn pack(layout: &Layout, buf: &mut [u8], values: &[Value<'_>]) -> Result<()> {
    ensure_capacity(layout, buf.len())?;
    check_args(layout, values.iter().map(|v| (v.scalar(), v.len())))?;
    write_fields(layout, buf, values);
    Ok(())
}

/// Pack `values` into a freshly allocated buffer of exactly `total_size` bytes.
pub fn pack_to_bytes(layout: &Layout, values: &[Value<'_>]) -> Result<Bytes> {
    // Arguments first: a valid argument list bounds the allocation.
    check_args(layout, values.iter().map(|v| (v.scalar(), v.len())))?;
    let mut buf = BytesMut::zeroed(layout.total_size());
    write_fields(layout, &mut buf, values);
    Ok(buf.freeze())
}

/// Unpack the first `layout.total_size()` bytes of `buf` into `slots`.
///
/// Nothing is written to any slot unless the buffer and every slot match.
pub fn unpack(layout: &Layout, buf: &[u8], slots: &mut [Slot<'_>]) -> Result<()> {
    ensure_capacity(layout, buf.len())?;
    read_fields(layout, buf, slots)
}

/// Unpack `buf` into newly allocated values, one entry per field.
pub fn decode(layout: &Layout, buf: &[u8]) -> Result<Vec<FieldValues>> {
    ensure_capacity(layout, buf.len())?;

    let mut values: Vec<FieldValues> = layout
        .fields()
        .iter()
        .map(|field| FieldValues::zeroed(field.scalar(), field.count()))
        .collect();
    let mut slots: Vec<Slot<'_>> = values.iter_mut().map(FieldValues::as_slot).collect();
    read_fields(layout, buf, &mut slots)?;
    drop(slots);

    Ok(values)
}

/// `buf` is already known to hold `total_size` bytes.
fn read_fields(layout: &Layout, buf: &[u8], slots: &mut [Slot<'_>]) -> Result<()> {
    check_args(layout, slots.iter().map(|s| (s.scalar(), s.len())))?;

    let order = layout.byte_order();
    for (field, slot) in layout.fields().iter().zip(slots.iter_mut()) {
        slot.read_from(order, &buf[field.offset()..field.end()]);
    }

    trace!(
        fields = layout.len(),
        bytes = layout.total_size(),
        byte_order = %order,
        "unpacked record"
    );
    Ok(())
}

fn write_fields(layout: &Layout, buf: &mut [u8], values: &[Value<'_>]) {
    let order = layout.byte_order();
    for (field, value) in layout.fields().iter().zip(values) {
        value.write_to(order, &mut buf[field.offset()..field.end()]);
    }

    trace!(
        fields = layout.len(),
        bytes = layout.total_size(),
        byte_order = %order,
        "packed record"
    );
}

fn ensure_capacity(layout: &Layout, actual: usize) -> Result<()> {
    let needed = layout.total_size();
    if actual < needed {
        return Err(CodecError::BufferTooSmall { needed, actual });
    }
    Ok(())
}

/// Arity first, then per field: scalar type, then element count.
fn check_args<I>(layout: &Layout, args: I) -> Result<()>
where
    I: ExactSizeIterator<Item = (ScalarType, usize)>,
{
    if args.len() != layout.len() {
        return Err(Mismatch::Arity {
            expected: layout.len(),
            actual: args.len(),
        }
        .into());
    }

    for (index, (field, (scalar, len))) in layout.fields().iter().zip(args).enumerate() {
        if scalar != field.scalar() {
            return Err(Mismatch::Type {
                field: index,
                expected: field.scalar(),
                actual: scalar,
            }
            .into());
        }
        if len != field.count() {
            return Err(Mismatch::Count {
                field: index,
                expected: field.count(),
                actual: len,
            }
            .into());
        }
    }
    Ok(())
}
