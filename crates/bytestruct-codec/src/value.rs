//! Typed arguments and destinations for the codec.
//!
//! [`Value`] borrows what gets packed, [`Slot`] borrows where unpacked data
//! lands, and [`FieldValues`] owns one decoded field. Each carries its
//! [`ScalarType`] so an argument list can be checked against a layout before
//! any byte or slot is touched.

use bytestruct_scalar::{read_all, write_all, ByteOrder, Element, ScalarType};

macro_rules! codec_values {
    ($( $ty:ty => $scalar:ident, $one:ident, $many:ident; )*) => {
        /// One argument to [`crate::pack`].
        ///
        /// Single variants fill a field of count 1; slice variants fill a field
        /// whose count equals the slice length.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Value<'a> {
            Char(u8),
            /// Raw bytes for a `c[N]` field.
            Chars(&'a [u8]),
            $( $one($ty), $many(&'a [$ty]), )*
        }

        impl Value<'_> {
            pub fn scalar(&self) -> ScalarType {
                match self {
                    Value::Char(_) | Value::Chars(_) => ScalarType::Char,
                    $( Value::$one(_) | Value::$many(_) => ScalarType::$scalar, )*
                }
            }

            /// Elements supplied: 1 for single variants, the slice length otherwise.
            pub fn len(&self) -> usize {
                match self {
                    Value::Char(_) => 1,
                    Value::Chars(s) => s.len(),
                    $( Value::$one(_) => 1, Value::$many(s) => s.len(), )*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// `dst` is exactly the field's span.
            pub(crate) fn write_to(&self, order: ByteOrder, dst: &mut [u8]) {
                match *self {
                    Value::Char(c) => dst[0] = c,
                    Value::Chars(s) => dst.copy_from_slice(s),
                    $(
                        Value::$one(v) => v.write(order, dst),
                        Value::$many(s) => write_all(order, dst, s),
                    )*
                }
            }
        }

        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::$one(v)
                }
            }

            impl<'a> From<&'a [$ty]> for Value<'a> {
                fn from(v: &'a [$ty]) -> Self {
                    Value::$many(v)
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for Value<'a> {
                fn from(v: &'a [$ty; N]) -> Self {
                    Value::$many(v)
                }
            }

            impl<'a> From<&'a Vec<$ty>> for Value<'a> {
                fn from(v: &'a Vec<$ty>) -> Self {
                    Value::$many(v)
                }
            }
        )*

        /// Destination for one field during [`crate::unpack`].
        #[derive(Debug)]
        pub enum Slot<'a> {
            Char(&'a mut u8),
            Chars(&'a mut [u8]),
            $( $one(&'a mut $ty), $many(&'a mut [$ty]), )*
        }

        impl Slot<'_> {
            pub fn scalar(&self) -> ScalarType {
                match self {
                    Slot::Char(_) | Slot::Chars(_) => ScalarType::Char,
                    $( Slot::$one(_) | Slot::$many(_) => ScalarType::$scalar, )*
                }
            }

            /// Elements this slot can receive.
            pub fn len(&self) -> usize {
                match self {
                    Slot::Char(_) => 1,
                    Slot::Chars(s) => s.len(),
                    $( Slot::$one(_) => 1, Slot::$many(s) => s.len(), )*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// `src` is exactly the field's span.
            pub(crate) fn read_from(&mut self, order: ByteOrder, src: &[u8]) {
                match self {
                    Slot::Char(c) => **c = src[0],
                    Slot::Chars(s) => s.copy_from_slice(src),
                    $(
                        Slot::$one(v) => **v = <$ty as Element>::read(order, src),
                        Slot::$many(s) => read_all(order, src, s),
                    )*
                }
            }
        }

        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(v: &'a mut $ty) -> Self {
                    Slot::$one(v)
                }
            }

            impl<'a> From<&'a mut [$ty]> for Slot<'a> {
                fn from(v: &'a mut [$ty]) -> Self {
                    Slot::$many(v)
                }
            }

            impl<'a, const N: usize> From<&'a mut [$ty; N]> for Slot<'a> {
                fn from(v: &'a mut [$ty; N]) -> Self {
                    Slot::$many(v)
                }
            }

            impl<'a> From<&'a mut Vec<$ty>> for Slot<'a> {
                fn from(v: &'a mut Vec<$ty>) -> Self {
                    Slot::$many(v)
                }
            }
        )*

        /// The owned contents of one decoded field.
        #[derive(Debug, Clone, PartialEq)]
        pub enum FieldValues {
            Chars(Vec<u8>),
            $( $many(Vec<$ty>), )*
        }

        impl FieldValues {
            /// `count` default elements of `scalar`, ready to be unpacked into.
            pub fn zeroed(scalar: ScalarType, count: usize) -> Self {
                match scalar {
                    ScalarType::Char => FieldValues::Chars(vec![0; count]),
                    $( ScalarType::$scalar => FieldValues::$many(vec![<$ty>::default(); count]), )*
                }
            }

            pub fn scalar(&self) -> ScalarType {
                match self {
                    FieldValues::Chars(_) => ScalarType::Char,
                    $( FieldValues::$many(_) => ScalarType::$scalar, )*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    FieldValues::Chars(v) => v.len(),
                    $( FieldValues::$many(v) => v.len(), )*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Borrow as a packable argument, so decoded records can be re-packed.
            pub fn as_value(&self) -> Value<'_> {
                match self {
                    FieldValues::Chars(v) => Value::Chars(v),
                    $( FieldValues::$many(v) => Value::$many(v), )*
                }
            }

            pub fn as_slot(&mut self) -> Slot<'_> {
                match self {
                    FieldValues::Chars(v) => Slot::Chars(v),
                    $( FieldValues::$many(v) => Slot::$many(v), )*
                }
            }
        }
    };
}

codec_values! {
    i8 => Int8, Int8, Int8s;
    u8 => UInt8, UInt8, UInt8s;
    i16 => Int16, Int16, Int16s;
    u16 => UInt16, UInt16, UInt16s;
    i32 => Int32, Int32, Int32s;
    u32 => UInt32, UInt32, UInt32s;
    i64 => Int64, Int64, Int64s;
    u64 => UInt64, UInt64, UInt64s;
    f32 => Float32, Float32, Float32s;
    f64 => Float64, Float64, Float64s;
    usize => Pointer, Ptr, Ptrs;
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Chars(s.as_bytes())
    }
}
