//! The closed set of scalar kinds a layout can describe.
//!
//! Every kind has a one-character tag used by the format mini-language and a
//! fixed byte width. Only the pointer-width kind depends on the target: its
//! width is [`POINTER_WIDTH`], fixed when the crate is built.

use std::fmt;

/// Width in bytes of the pointer-sized scalar (`p`) on this target.
pub const POINTER_WIDTH: usize = std::mem::size_of::<usize>();

/// A primitive field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Raw character byte (`c`). Never reordered or transformed.
    Char,
    /// Signed 8-bit integer (`b`).
    Int8,
    /// Unsigned 8-bit integer (`B`).
    UInt8,
    /// Signed 16-bit integer (`h`).
    Int16,
    /// Unsigned 16-bit integer (`H`).
    UInt16,
    /// Signed 32-bit integer (`i`).
    Int32,
    /// Unsigned 32-bit integer (`I`).
    UInt32,
    /// Signed 64-bit integer (`l`).
    Int64,
    /// Unsigned 64-bit integer (`L`).
    UInt64,
    /// IEEE-754 single precision (`f`).
    Float32,
    /// IEEE-754 double precision (`d`).
    Float64,
    /// Address-sized unsigned integer (`p`).
    Pointer,
}

impl ScalarType {
    /// All scalar kinds, in tag-table order.
    pub const ALL: [ScalarType; 12] = [
        ScalarType::Char,
        ScalarType::Int8,
        ScalarType::UInt8,
        ScalarType::Int16,
        ScalarType::UInt16,
        ScalarType::Int32,
        ScalarType::UInt32,
        ScalarType::Int64,
        ScalarType::UInt64,
        ScalarType::Float32,
        ScalarType::Float64,
        ScalarType::Pointer,
    ];

    /// Look up the scalar kind for a format tag character.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'c' => Some(ScalarType::Char),
            'b' => Some(ScalarType::Int8),
            'B' => Some(ScalarType::UInt8),
            'h' => Some(ScalarType::Int16),
            'H' => Some(ScalarType::UInt16),
            'i' => Some(ScalarType::Int32),
            'I' => Some(ScalarType::UInt32),
            'l' => Some(ScalarType::Int64),
            'L' => Some(ScalarType::UInt64),
            'f' => Some(ScalarType::Float32),
            'd' => Some(ScalarType::Float64),
            'p' => Some(ScalarType::Pointer),
            _ => None,
        }
    }

    /// The format tag character for this kind.
    pub fn tag(self) -> char {
        match self {
            ScalarType::Char => 'c',
            ScalarType::Int8 => 'b',
            ScalarType::UInt8 => 'B',
            ScalarType::Int16 => 'h',
            ScalarType::UInt16 => 'H',
            ScalarType::Int32 => 'i',
            ScalarType::UInt32 => 'I',
            ScalarType::Int64 => 'l',
            ScalarType::UInt64 => 'L',
            ScalarType::Float32 => 'f',
            ScalarType::Float64 => 'd',
            ScalarType::Pointer => 'p',
        }
    }

    /// Encoded width of a single element, in bytes.
    pub fn width(self) -> usize {
        match self {
            ScalarType::Char | ScalarType::Int8 | ScalarType::UInt8 => 1,
            ScalarType::Int16 | ScalarType::UInt16 => 2,
            ScalarType::Int32 | ScalarType::UInt32 | ScalarType::Float32 => 4,
            ScalarType::Int64 | ScalarType::UInt64 | ScalarType::Float64 => 8,
            ScalarType::Pointer => POINTER_WIDTH,
        }
    }

    /// Human-readable type name.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Char => "char",
            ScalarType::Int8 => "int8",
            ScalarType::UInt8 => "uint8",
            ScalarType::Int16 => "int16",
            ScalarType::UInt16 => "uint16",
            ScalarType::Int32 => "int32",
            ScalarType::UInt32 => "uint32",
            ScalarType::Int64 => "int64",
            ScalarType::UInt64 => "uint64",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::Pointer => "pointer",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
