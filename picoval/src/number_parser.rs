// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::{ParseError, Value};

/// Position inside the number grammar, named after what was seen last.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Start,
    Sign,
    LeadingZero,
    BeforeDecimalPoint,
    Decimal,
    AfterDecimalPoint,
    Exponent,
    ExponentSign,
    AfterExponent,
}

impl Num {
    /// True when the bytes seen so far already form a complete number.
    const fn is_accepting(self) -> bool {
        matches!(
            self,
            Num::LeadingZero | Num::BeforeDecimalPoint | Num::AfterDecimalPoint | Num::AfterExponent
        )
    }
}

enum Step {
    Continue(Num),
    End,
    Invalid,
}

fn step(state: Num, b: u8) -> Step {
    match (state, b) {
        (Num::Start, b'-') => Step::Continue(Num::Sign),
        (Num::Start | Num::Sign, b'0') => Step::Continue(Num::LeadingZero),
        (Num::Start | Num::Sign, b'1'..=b'9') => Step::Continue(Num::BeforeDecimalPoint),
        // No leading zeros
        (Num::LeadingZero, b'0'..=b'9') => Step::Invalid,
        (Num::BeforeDecimalPoint, b'0'..=b'9') => Step::Continue(Num::BeforeDecimalPoint),
        (Num::LeadingZero | Num::BeforeDecimalPoint, b'.') => Step::Continue(Num::Decimal),
        (Num::Decimal | Num::AfterDecimalPoint, b'0'..=b'9') => {
            Step::Continue(Num::AfterDecimalPoint)
        }
        (Num::LeadingZero | Num::BeforeDecimalPoint | Num::AfterDecimalPoint, b'e' | b'E') => {
            Step::Continue(Num::Exponent)
        }
        (Num::Exponent, b'+' | b'-') => Step::Continue(Num::ExponentSign),
        (Num::Exponent | Num::ExponentSign | Num::AfterExponent, b'0'..=b'9') => {
            Step::Continue(Num::AfterExponent)
        }
        (state, _) if state.is_accepting() => Step::End,
        _ => Step::Invalid,
    }
}

/// Validates a JSON number at the start of `bytes`.
///
/// Returns the length of the number. Bytes after it are not looked at
/// beyond the single byte that ended the number.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut state = Num::Start;
    for (len, &b) in bytes.iter().enumerate() {
        match step(state, b) {
            Step::Continue(next) => state = next,
            Step::End => return Ok(len),
            Step::Invalid => {
                log::trace!("number rejected at offset {len} in state {state:?}");
                return Err(ParseError::InvalidValue);
            }
        }
    }
    if state.is_accepting() {
        Ok(bytes.len())
    } else {
        log::trace!("number input ended in state {state:?}");
        Err(ParseError::InvalidValue)
    }
}

/// Converts an already validated number span to a finite `f64`.
pub fn convert_number(span: &[u8]) -> Result<f64, ParseError> {
    let s = core::str::from_utf8(span)?;
    let n = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ParseError::NumberTooBig)
    }
}

/// Scans and converts the number at the cursor, consuming exactly its span.
pub fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let input = cursor.remaining();
    let len = scan_number(input)?;
    let span = input.get(..len).ok_or(ParseError::InvalidValue)?;
    let n = convert_number(span)?;
    cursor.advance(len);
    Ok(Value::Number(n))
}
