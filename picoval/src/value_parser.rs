// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::literal_parser::parse_literal;
use crate::number_parser::parse_number;
use crate::{ParseError, Value};

/// Parses one root value out of a byte slice.
// Lifetime 'a is the input buffer lifetime
pub struct ValueParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> ValueParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Dispatches on the next byte without consuming it.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek() {
            Some(b't' | b'f' | b'n') => parse_literal(&mut self.cursor),
            None => Err(ParseError::ExpectValue),
            Some(_) => parse_number(&mut self.cursor),
        }
    }

    /// Parses the whole input as exactly one value surrounded by optional
    /// whitespace.
    pub fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            log::trace!(
                "trailing content at offset {} after {value:?}",
                self.cursor.current_pos()
            );
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }
}
