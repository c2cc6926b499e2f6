//! Second pass: field offsets and total size.
//!
//! All arithmetic is checked; any step that would leave `usize` is reported as
//! [`LayoutError::Overflow`]. The pass is meant to run on strings that already
//! passed [`crate::grammar::validate`], but it does not rely on that: anything
//! malformed is still reported as a syntax error instead of being guessed at.

use std::iter::Peekable;
use std::str::CharIndices;

use bytestruct_scalar::ScalarType;

use crate::error::{LayoutError, OverflowKind, Result, SyntaxErrorKind};
use crate::layout::Field;

/// Field table produced by the sizing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sizing {
    pub fields: Vec<Field>,
    pub total_size: usize,
}

/// Compute offsets, counts and the total size for `format`.
pub fn compute(format: &str) -> Result<Sizing> {
    compute_with_capacity(format, 0)
}

pub(crate) fn compute_with_capacity(format: &str, capacity: usize) -> Result<Sizing> {
    let mut fields = Vec::with_capacity(capacity);
    let mut total_size = 0usize;
    let mut chars = format.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let scalar = ScalarType::from_tag(c).ok_or_else(|| misplaced(pos, c))?;

        let count = match chars.peek() {
            Some(&(open, '[')) => {
                chars.next();
                parse_count(open, &mut chars)?
            }
            _ => 1,
        };

        let span = scalar
            .width()
            .checked_mul(count)
            .ok_or(LayoutError::Overflow(OverflowKind::Span))?;
        let offset = total_size;
        total_size = total_size
            .checked_add(span)
            .ok_or(LayoutError::Overflow(OverflowKind::Total))?;

        fields.push(Field::new(offset, count, scalar));
    }

    if fields.is_empty() {
        return Err(LayoutError::Empty);
    }
    Ok(Sizing { fields, total_size })
}

/// Parse `digit+ "]"` after the `[` at `open` into a checked `usize`.
fn parse_count(open: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<usize> {
    let mut count = 0usize;
    let mut digits = 0usize;

    loop {
        match chars.next() {
            // The grammar pass refuses a bracket that runs off the end.
            None => return Err(LayoutError::syntax(open, SyntaxErrorKind::Unterminated)),
            Some((_, ']')) => break,
            Some((pos, c)) => {
                let digit = c
                    .to_digit(10)
                    .ok_or(LayoutError::syntax(pos, SyntaxErrorKind::InvalidDigit(c)))?;
                count = count
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit as usize))
                    .ok_or(LayoutError::Overflow(OverflowKind::Count))?;
                digits += 1;
            }
        }
    }

    if digits == 0 {
        return Err(LayoutError::syntax(open, SyntaxErrorKind::EmptyCount));
    }
    if count == 0 {
        return Err(LayoutError::syntax(open, SyntaxErrorKind::ZeroCount));
    }
    Ok(count)
}

fn misplaced(pos: usize, c: char) -> LayoutError {
    let kind = match c {
        '[' => SyntaxErrorKind::MisplacedBracket,
        ']' => SyntaxErrorKind::UnmatchedClose,
        other => SyntaxErrorKind::UnknownTag(other),
    };
    LayoutError::syntax(pos, kind)
}
