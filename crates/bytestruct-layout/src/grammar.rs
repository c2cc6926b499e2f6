//! First pass: grammar validation.
//!
//! ```text
//! format  = element+
//! element = tag [ "[" digit+ "]" ]
//! tag     = "c" | "b" | "B" | "h" | "H" | "i" | "I" | "l" | "L" | "f" | "d" | "p"
//! ```
//!
//! This pass never computes sizes. It only proves that the second pass will
//! see a well-formed string.

use bytestruct_scalar::ScalarType;

use crate::error::{LayoutError, Result, SyntaxErrorKind};

/// Validate `format` and return the number of fields it declares.
pub fn validate(format: &str) -> Result<usize> {
    let mut fields = 0usize;
    let mut prev_was_tag = false;
    let mut chars = format.char_indices();

    while let Some((pos, c)) = chars.next() {
        match c {
            '[' => {
                if !prev_was_tag {
                    return Err(LayoutError::syntax(pos, SyntaxErrorKind::MisplacedBracket));
                }
                validate_count(pos, &mut chars)?;
                prev_was_tag = false;
            }
            ']' => return Err(LayoutError::syntax(pos, SyntaxErrorKind::UnmatchedClose)),
            _ if ScalarType::from_tag(c).is_some() => {
                fields += 1;
                prev_was_tag = true;
            }
            _ => return Err(LayoutError::syntax(pos, SyntaxErrorKind::UnknownTag(c))),
        }
    }

    if fields == 0 {
        return Err(LayoutError::Empty);
    }
    Ok(fields)
}

/// Consume `digit+ "]"` following the `[` at `open`.
fn validate_count(open: usize, chars: &mut std::str::CharIndices<'_>) -> Result<()> {
    let mut digits = 0usize;
    let mut all_zero = true;

    loop {
        match chars.next() {
            None => return Err(LayoutError::syntax(open, SyntaxErrorKind::Unterminated)),
            Some((_, ']')) => break,
            Some((_, d)) if d.is_ascii_digit() => {
                digits += 1;
                all_zero &= d == '0';
            }
            Some((pos, other)) => {
                return Err(LayoutError::syntax(pos, SyntaxErrorKind::InvalidDigit(other)))
            }
        }
    }

    if digits == 0 {
        return Err(LayoutError::syntax(open, SyntaxErrorKind::EmptyCount));
    }
    if all_zero {
        return Err(LayoutError::syntax(open, SyntaxErrorKind::ZeroCount));
    }
    Ok(())
}
