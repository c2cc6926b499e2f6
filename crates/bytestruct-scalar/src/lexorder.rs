//! Order-preserving scalar encodings.
//!
//! Every encoding here is fixed-width and big-endian, transformed so that an
//! unsigned byte-wise comparison of two encodings agrees with the numeric
//! comparison of the values they came from:
//!
//! - unsigned integers are stored as-is;
//! - signed integers have their sign bit flipped, so negatives sort first;
//! - floats flip only the sign bit when positive and every bit when negative.
//!
//! For floats this gives `-NaN < -inf < … < -0.0 < +0.0 < … < +inf < +NaN`.
//! The two zeros stay distinct and NaN payloads survive a round trip.

use bytes::{Buf, BufMut};

use crate::scalar::POINTER_WIDTH;

/// A scalar with an order-preserving fixed-width encoding.
///
/// `write_sortable` panics if `dst` is shorter than [`LexOrder::WIDTH`];
/// `read_sortable` panics if `src` is. Callers slice exact spans first.
pub trait LexOrder: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    fn write_sortable(dst: &mut [u8], value: Self);

    fn read_sortable(src: &[u8]) -> Self;
}

/// Encode `value` into the first `T::WIDTH` bytes of `dst`.
#[inline]
pub fn write_sortable<T: LexOrder>(dst: &mut [u8], value: T) {
    T::write_sortable(dst, value);
}

/// Decode a value from the first `T::WIDTH` bytes of `src`.
#[inline]
pub fn read_sortable<T: LexOrder>(src: &[u8]) -> T {
    T::read_sortable(src)
}

macro_rules! lex_unsigned {
    ($ty:ty, $put:ident, $get:ident) => {
        impl LexOrder for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn write_sortable(mut dst: &mut [u8], value: Self) {
                dst.$put(value);
            }

            #[inline]
            fn read_sortable(mut src: &[u8]) -> Self {
                src.$get()
            }
        }
    };
}

macro_rules! lex_signed {
    ($ty:ty, $bits:ty, $sign:expr, $put:ident, $get:ident) => {
        impl LexOrder for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn write_sortable(mut dst: &mut [u8], value: Self) {
                dst.$put((value as $bits) ^ $sign);
            }

            #[inline]
            fn read_sortable(mut src: &[u8]) -> Self {
                (src.$get() ^ $sign) as $ty
            }
        }
    };
}

macro_rules! lex_float {
    ($ty:ty, $bits:ty, $sign:expr, $put:ident, $get:ident) => {
        impl LexOrder for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn write_sortable(mut dst: &mut [u8], value: Self) {
                let bits = value.to_bits();
                let key = if bits & $sign != 0 { !bits } else { bits ^ $sign };
                dst.$put(key);
            }

            #[inline]
            fn read_sortable(mut src: &[u8]) -> Self {
                let key: $bits = src.$get();
                let bits = if key & $sign != 0 { key ^ $sign } else { !key };
                <$ty>::from_bits(bits)
            }
        }
    };
}

lex_unsigned!(u8, put_u8, get_u8);
lex_unsigned!(u16, put_u16, get_u16);
lex_unsigned!(u32, put_u32, get_u32);
lex_unsigned!(u64, put_u64, get_u64);

lex_signed!(i8, u8, 0x80u8, put_u8, get_u8);
lex_signed!(i16, u16, 0x8000u16, put_u16, get_u16);
lex_signed!(i32, u32, 0x8000_0000u32, put_u32, get_u32);
lex_signed!(i64, u64, 0x8000_0000_0000_0000u64, put_u64, get_u64);

lex_float!(f32, u32, 0x8000_0000u32, put_u32, get_u32);
lex_float!(f64, u64, 0x8000_0000_0000_0000u64, put_u64, get_u64);

impl LexOrder for usize {
    const WIDTH: usize = POINTER_WIDTH;

    #[inline]
    fn write_sortable(dst: &mut [u8], value: Self) {
        dst[..POINTER_WIDTH].copy_from_slice(&value.to_be_bytes());
    }

    #[inline]
    fn read_sortable(src: &[u8]) -> Self {
        let mut raw = [0u8; POINTER_WIDTH];
        raw.copy_from_slice(&src[..POINTER_WIDTH]);
        usize::from_be_bytes(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: LexOrder>(value: T) -> Vec<u8> {
        let mut buf = vec![0u8; T::WIDTH];
        write_sortable(&mut buf, value);
        buf
    }

    fn assert_sorted_encodings<T: LexOrder + PartialOrd + std::fmt::Debug>(ascending: &[T]) {
        for pair in ascending.windows(2) {
            assert!(
                encode(pair[0]) < encode(pair[1]),
                "{:?} should encode below {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn signed_integers_order_across_zero() {
        assert_sorted_encodings(&[i8::MIN, -1, 0, 1, i8::MAX]);
        assert_sorted_encodings(&[i16::MIN, -300, -1, 0, 1, 300, i16::MAX]);
        assert_sorted_encodings(&[i32::MIN, -70_000, -1, 0, 1, 70_000, i32::MAX]);
        assert_sorted_encodings(&[i64::MIN, i64::MIN + 1, -10, -1, 0, 1, 10, i64::MAX]);
    }

    #[test]
    fn unsigned_integers_are_plain_big_endian() {
        assert_eq!(encode(0x0102u16), vec![0x01, 0x02]);
        assert_eq!(encode(0x0102_0304u32), vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(encode(200u8), vec![200]);
        assert_sorted_encodings(&[0u64, 1, 255, 256, u64::MAX]);
    }

    #[test]
    fn signed_zero_maps_to_midpoint() {
        assert_eq!(encode(0i8), vec![0x80]);
        assert_eq!(encode(0i32), vec![0x80, 0, 0, 0]);
        assert_eq!(encode(-1i16), vec![0x7f, 0xff]);
    }

    #[test]
    fn floats_order_including_infinities_and_zeros() {
        assert_sorted_encodings(&[
            f64::NEG_INFINITY,
            f64::MIN,
            -2.0,
            -1.0,
            -f64::MIN_POSITIVE,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            1.0,
            2.0,
            f64::MAX,
            f64::INFINITY,
        ]);
        assert_sorted_encodings(&[f32::NEG_INFINITY, -3.5f32, -0.0, 0.0, 1.25, f32::INFINITY]);
    }

    #[test]
    fn nan_sorts_outside_infinities_by_sign() {
        let pos_nan = f64::NAN.copysign(1.0);
        let neg_nan = f64::NAN.copysign(-1.0);
        assert!(encode(neg_nan) < encode(f64::NEG_INFINITY));
        assert!(encode(pos_nan) > encode(f64::INFINITY));
    }

    #[test]
    fn floats_round_trip_bit_exact() {
        for value in [0.0f64, -0.0, 1.5, -1.5, f64::NAN, -f64::NAN, f64::INFINITY] {
            let decoded: f64 = read_sortable(&encode(value));
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
        for value in [0.0f32, -0.0, 6.0, -6.0, f32::NAN, f32::NEG_INFINITY] {
            let decoded: f32 = read_sortable(&encode(value));
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn pointer_width_orders_as_unsigned() {
        assert_eq!(<usize as LexOrder>::WIDTH, POINTER_WIDTH);
        assert_sorted_encodings(&[0usize, 1, 0x1000, usize::MAX / 2, usize::MAX]);
        let decoded: usize = read_sortable(&encode(0xdead_beefusize));
        assert_eq!(decoded, 0xdead_beef);
    }

    #[test]
    fn writes_only_the_leading_width() {
        let mut buf = [0xAAu8; 6];
        write_sortable(&mut buf, -1i32);
        assert_eq!(buf, [0x7f, 0xff, 0xff, 0xff, 0xAA, 0xAA]);
    }
}
