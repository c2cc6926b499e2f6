use std::fmt;

use bytestruct_scalar::{ByteOrder, ScalarType};

/// One typed, fixed-count run of scalars inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    offset: usize,
    count: usize,
    scalar: ScalarType,
}

impl Field {
    pub(crate) fn new(offset: usize, count: usize, scalar: ScalarType) -> Self {
        Self {
            offset,
            count,
            scalar,
        }
    }

    /// Byte offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements; always at least 1.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn scalar(&self) -> ScalarType {
        self.scalar
    }

    /// Bytes occupied: `width * count`.
    pub fn span(&self) -> usize {
        // Checked when the layout was compiled.
        self.scalar.width() * self.count
    }

    /// One past the last byte of this field.
    pub fn end(&self) -> usize {
        self.offset + self.span()
    }

    /// True when the field describes an array (`count > 1`).
    pub fn is_array(&self) -> bool {
        self.count > 1
    }
}

/// A compiled, immutable description of a packed buffer.
///
/// Fields sit back to back in declaration order with no padding, so each
/// offset is the sum of the spans before it and `total_size` is the sum of
/// all spans. A `Layout` always has at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    byte_order: ByteOrder,
    fields: Box<[Field]>,
    total_size: usize,
    format: Box<str>,
}

impl Layout {
    pub(crate) fn from_parts(
        format: &str,
        byte_order: ByteOrder,
        fields: Vec<Field>,
        total_size: usize,
    ) -> Self {
        debug_assert!(!fields.is_empty());
        Self {
            byte_order,
            fields: fields.into_boxed_slice(),
            total_size,
            format: format.into(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a compiled layout.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bytes needed to hold one packed record.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// The format string this layout was compiled from.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} fields, {} bytes)",
            self.format,
            self.byte_order,
            self.fields.len(),
            self.total_size
        )
    }
}
