//! Per-type, per-policy read/write of a single non-character scalar.

use bytes::{Buf, BufMut};

use crate::lexorder::LexOrder;
use crate::order::ByteOrder;
use crate::scalar::{ScalarType, POINTER_WIDTH};

/// A Rust primitive that backs one non-character [`ScalarType`].
///
/// `write` and `read` touch exactly the first `SCALAR.width()` bytes and
/// panic if the slice is shorter.
pub trait Element: LexOrder + Default {
    const SCALAR: ScalarType;

    fn write(self, order: ByteOrder, dst: &mut [u8]);

    fn read(order: ByteOrder, src: &[u8]) -> Self;
}

macro_rules! element {
    ($ty:ty, $scalar:ident, $put_be:ident, $put_le:ident, $put_ne:ident, $get_be:ident, $get_le:ident, $get_ne:ident) => {
        impl Element for $ty {
            const SCALAR: ScalarType = ScalarType::$scalar;

            #[inline]
            fn write(self, order: ByteOrder, mut dst: &mut [u8]) {
                match order {
                    ByteOrder::Sortable => LexOrder::write_sortable(dst, self),
                    ByteOrder::BigEndian => dst.$put_be(self),
                    ByteOrder::LittleEndian => dst.$put_le(self),
                    ByteOrder::NativeEndian => dst.$put_ne(self),
                }
            }

            #[inline]
            fn read(order: ByteOrder, mut src: &[u8]) -> Self {
                match order {
                    ByteOrder::Sortable => LexOrder::read_sortable(src),
                    ByteOrder::BigEndian => src.$get_be(),
                    ByteOrder::LittleEndian => src.$get_le(),
                    ByteOrder::NativeEndian => src.$get_ne(),
                }
            }
        }
    };
}

// Single bytes have no byte order; only the sortable transform applies.
element!(i8, Int8, put_i8, put_i8, put_i8, get_i8, get_i8, get_i8);
element!(u8, UInt8, put_u8, put_u8, put_u8, get_u8, get_u8, get_u8);
element!(i16, Int16, put_i16, put_i16_le, put_i16_ne, get_i16, get_i16_le, get_i16_ne);
element!(u16, UInt16, put_u16, put_u16_le, put_u16_ne, get_u16, get_u16_le, get_u16_ne);
element!(i32, Int32, put_i32, put_i32_le, put_i32_ne, get_i32, get_i32_le, get_i32_ne);
element!(u32, UInt32, put_u32, put_u32_le, put_u32_ne, get_u32, get_u32_le, get_u32_ne);
element!(i64, Int64, put_i64, put_i64_le, put_i64_ne, get_i64, get_i64_le, get_i64_ne);
element!(u64, UInt64, put_u64, put_u64_le, put_u64_ne, get_u64, get_u64_le, get_u64_ne);
element!(f32, Float32, put_f32, put_f32_le, put_f32_ne, get_f32, get_f32_le, get_f32_ne);
element!(f64, Float64, put_f64, put_f64_le, put_f64_ne, get_f64, get_f64_le, get_f64_ne);

impl Element for usize {
    const SCALAR: ScalarType = ScalarType::Pointer;

    #[inline]
    fn write(self, order: ByteOrder, dst: &mut [u8]) {
        let raw = match order {
            ByteOrder::Sortable => return LexOrder::write_sortable(dst, self),
            ByteOrder::BigEndian => self.to_be_bytes(),
            ByteOrder::LittleEndian => self.to_le_bytes(),
            ByteOrder::NativeEndian => self.to_ne_bytes(),
        };
        dst[..POINTER_WIDTH].copy_from_slice(&raw);
    }

    #[inline]
    fn read(order: ByteOrder, src: &[u8]) -> Self {
        if order == ByteOrder::Sortable {
            return LexOrder::read_sortable(src);
        }
        let mut raw = [0u8; POINTER_WIDTH];
        raw.copy_from_slice(&src[..POINTER_WIDTH]);
        match order {
            ByteOrder::LittleEndian => usize::from_le_bytes(raw),
            ByteOrder::NativeEndian => usize::from_ne_bytes(raw),
            ByteOrder::BigEndian | ByteOrder::Sortable => usize::from_be_bytes(raw),
        }
    }
}

/// Write `values` back to back into `dst`, one element width apart.
///
/// # Panics
///
/// Panics if `dst` is shorter than `values.len() * T::SCALAR.width()`.
pub fn write_all<T: Element>(order: ByteOrder, dst: &mut [u8], values: &[T]) {
    let width = T::SCALAR.width();
    assert!(
        dst.len() >= values.len() * width,
        "destination holds {} bytes, {} elements need {}",
        dst.len(),
        values.len(),
        values.len() * width
    );
    for (chunk, value) in dst.chunks_exact_mut(width).zip(values) {
        value.write(order, chunk);
    }
}

/// Fill `out` from consecutive elements of `src`.
///
/// # Panics
///
/// Panics if `src` is shorter than `out.len() * T::SCALAR.width()`.
pub fn read_all<T: Element>(order: ByteOrder, src: &[u8], out: &mut [T]) {
    let width = T::SCALAR.width();
    assert!(
        src.len() >= out.len() * width,
        "source holds {} bytes, {} elements need {}",
        src.len(),
        out.len(),
        out.len() * width
    );
    for (chunk, slot) in src.chunks_exact(width).zip(out.iter_mut()) {
        *slot = T::read(order, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Element>(order: ByteOrder, value: T) -> Vec<u8> {
        let mut buf = vec![0u8; T::SCALAR.width()];
        value.write(order, &mut buf);
        buf
    }

    #[test]
    fn fixed_endian_integers() {
        assert_eq!(encode(ByteOrder::BigEndian, 0x0102_0304u32), [1, 2, 3, 4]);
        assert_eq!(encode(ByteOrder::LittleEndian, 0x0102_0304u32), [4, 3, 2, 1]);
        assert_eq!(encode(ByteOrder::BigEndian, -2i16), [0xff, 0xfe]);
        assert_eq!(encode(ByteOrder::LittleEndian, -2i16), [0xfe, 0xff]);
    }

    #[test]
    fn native_matches_in_memory_representation() {
        assert_eq!(encode(ByteOrder::NativeEndian, 0x0102_0304u32), 0x0102_0304u32.to_ne_bytes());
        assert_eq!(encode(ByteOrder::NativeEndian, 6.0f32), 6.0f32.to_ne_bytes());
        assert_eq!(encode(ByteOrder::NativeEndian, 77usize), 77usize.to_ne_bytes());
    }

    #[test]
    fn floats_use_ieee_bits_in_requested_order() {
        assert_eq!(encode(ByteOrder::BigEndian, 1.0f64), 1.0f64.to_be_bytes());
        assert_eq!(encode(ByteOrder::LittleEndian, 1.0f64), 1.0f64.to_le_bytes());
    }

    #[test]
    fn single_bytes_ignore_endianness() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian, ByteOrder::NativeEndian] {
            assert_eq!(encode(order, -1i8), [0xff]);
            assert_eq!(encode(order, 7u8), [7]);
        }
        assert_eq!(encode(ByteOrder::Sortable, -1i8), [0x7f]);
        assert_eq!(encode(ByteOrder::Sortable, 7u8), [7]);
    }

    #[test]
    fn pointer_width_follows_policy() {
        let value = 0x0102usize;
        assert_eq!(encode(ByteOrder::BigEndian, value), value.to_be_bytes());
        assert_eq!(encode(ByteOrder::LittleEndian, value), value.to_le_bytes());
        assert_eq!(encode(ByteOrder::Sortable, value), value.to_be_bytes());
    }

    #[test]
    fn every_policy_round_trips() {
        for order in ByteOrder::ALL {
            assert_eq!(i16::read(order, &encode(order, -1234i16)), -1234);
            assert_eq!(u32::read(order, &encode(order, 4_000_000_000u32)), 4_000_000_000);
            assert_eq!(i64::read(order, &encode(order, i64::MIN)), i64::MIN);
            assert_eq!(u64::read(order, &encode(order, u64::MAX)), u64::MAX);
            assert_eq!(f32::read(order, &encode(order, -6.5f32)), -6.5);
            assert_eq!(f64::read(order, &encode(order, 1e-300f64)), 1e-300);
            assert_eq!(usize::read(order, &encode(order, usize::MAX - 3)), usize::MAX - 3);
        }
    }

    #[test]
    fn bulk_helpers_advance_by_width() {
        let mut buf = [0u8; 8];
        write_all(ByteOrder::BigEndian, &mut buf, &[1u16, 2, 3, 4]);
        assert_eq!(buf, [0, 1, 0, 2, 0, 3, 0, 4]);

        let mut out = [0u16; 4];
        read_all(ByteOrder::BigEndian, &buf, &mut out);
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "destination holds 3 bytes")]
    fn write_all_refuses_short_destination() {
        let mut dst = [0u8; 3];
        write_all(ByteOrder::BigEndian, &mut dst, &[1u16, 2]);
    }

    #[test]
    #[should_panic(expected = "source holds 2 bytes")]
    fn read_all_refuses_short_source() {
        let mut out = [9u16; 3];
        read_all(ByteOrder::BigEndian, &[0, 1], &mut out);
    }
}
