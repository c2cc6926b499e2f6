use bytestruct_scalar::ByteOrder;

/// Controls layout compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Serialization policy for every field. Default: big-endian.
    pub byte_order: ByteOrder,
    /// Largest accepted `total_size` in bytes. Default: `usize::MAX`.
    pub max_total_size: usize,
}

impl LayoutConfig {
    /// Default config with an explicit byte order.
    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            max_total_size: usize::MAX,
        }
    }
}
