use std::fmt;
use std::str::FromStr;

use crate::error::ScalarError;

/// How multi-byte scalars are laid out in a buffer.
///
/// The policy belongs to a whole layout; fields never mix policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
    /// In-memory representation of the running machine. Not portable.
    NativeEndian,
    /// Order-preserving: comparing encoded bytes compares the values.
    Sortable,
}

impl ByteOrder {
    /// Every policy, in declaration order.
    pub const ALL: [ByteOrder; 4] = [
        ByteOrder::BigEndian,
        ByteOrder::LittleEndian,
        ByteOrder::NativeEndian,
        ByteOrder::Sortable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "big",
            ByteOrder::LittleEndian => "little",
            ByteOrder::NativeEndian => "native",
            ByteOrder::Sortable => "sortable",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" => Ok(ByteOrder::BigEndian),
            "little" | "le" | "little-endian" => Ok(ByteOrder::LittleEndian),
            "native" | "ne" | "native-endian" => Ok(ByteOrder::NativeEndian),
            "sortable" | "lex" => Ok(ByteOrder::Sortable),
            _ => Err(ScalarError::UnknownByteOrder(s.to_string())),
        }
    }
}
