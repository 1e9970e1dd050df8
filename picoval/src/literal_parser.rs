// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::{ParseError, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
enum LiteralType {
    True,
    False,
    Null,
}

impl LiteralType {
    const fn from_first_byte(b: u8) -> Option<Self> {
        match b {
            b't' => Some(LiteralType::True),
            b'f' => Some(LiteralType::False),
            b'n' => Some(LiteralType::Null),
            _ => None,
        }
    }

    const fn as_str(&self) -> &'static [u8] {
        match self {
            LiteralType::True => b"true",
            LiteralType::False => b"false",
            LiteralType::Null => b"null",
        }
    }

    const fn as_value(&self) -> Value {
        match self {
            LiteralType::True => Value::True,
            LiteralType::False => Value::False,
            LiteralType::Null => Value::Null,
        }
    }
}

/// Parses `true`, `false` or `null` at the cursor.
///
/// Matching goes left to right and stops at the first byte that differs,
/// including running out of input. On failure the cursor is not moved.
pub fn parse_literal(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let literal = cursor
        .peek()
        .and_then(LiteralType::from_first_byte)
        .ok_or(ParseError::InvalidValue)?;
    let expected = literal.as_str();
    let input = cursor.remaining();

    for (position, &want) in expected.iter().enumerate() {
        if input.get(position) != Some(&want) {
            log::trace!("literal {literal:?} mismatch at offset {position}");
            return Err(ParseError::InvalidValue);
        }
    }

    cursor.advance(expected.len());
    Ok(literal.as_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn literal(input: &[u8]) -> (Result<Value, ParseError>, usize) {
        let mut cursor = Cursor::new(input);
        let result = parse_literal(&mut cursor);
        (result, cursor.current_pos())
    }

    #[test]
    fn test_exact_literals() {
        assert_eq!(literal(b"true"), (Ok(Value::True), 4));
        assert_eq!(literal(b"false"), (Ok(Value::False), 5));
        assert_eq!(literal(b"null"), (Ok(Value::Null), 4));
    }

    #[test]
    fn test_literal_leaves_trailing_bytes() {
        // Only the literal itself is consumed
        assert_eq!(literal(b"truee"), (Ok(Value::True), 4));
        assert_eq!(literal(b"null x"), (Ok(Value::Null), 4));
    }

    #[test]
    fn test_truncated_literals() {
        assert_eq!(literal(b"tru").0, Err(ParseError::InvalidValue));
        assert_eq!(literal(b"fals").0, Err(ParseError::InvalidValue));
        assert_eq!(literal(b"n").0, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_misspelled_literals() {
        assert_eq!(literal(b"trUe"), (Err(ParseError::InvalidValue), 0));
        assert_eq!(literal(b"nil"), (Err(ParseError::InvalidValue), 0));
        assert_eq!(literal(b"fake"), (Err(ParseError::InvalidValue), 0));
    }

    #[test]
    fn test_not_a_literal_start() {
        assert_eq!(literal(b"True").0, Err(ParseError::InvalidValue));
        assert_eq!(literal(b"").0, Err(ParseError::InvalidValue));
    }
}
