// SPDX-License-Identifier: Apache-2.0

//! A tiny JSON scalar parser.
//!
//! Accepts exactly one root value: `true`, `false`, `null` or a number.
//! Numbers are checked against the JSON grammar by hand before conversion,
//! so forms like `+1`, `01`, `.5` or `1.` never reach the float parser.
//!
//! ```
//! use picoval::{parse, ParseError, Value, ValueType};
//!
//! let mut value = Value::default();
//! assert_eq!(parse(&mut value, " -1.5e3 "), Ok(()));
//! assert_eq!(value.value_type(), ValueType::Number);
//! assert_eq!(value.as_f64(), Some(-1500.0));
//!
//! assert_eq!(parse(&mut value, "1 2"), Err(ParseError::RootNotSingular));
//! assert!(value.is_null());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod cursor;

mod literal_parser;

mod number_parser;
pub use number_parser::{convert_number, scan_number};

mod parse_error;
pub use parse_error::ParseError;

mod value;
pub use value::{get_number, get_type, Value, ValueType};

mod value_parser;
use value_parser::ValueParser;

/// Parses `input` into `value`.
///
/// `value` is reset to [`Value::Null`] first and stays `Null` unless the
/// whole input is a single valid value surrounded by optional whitespace.
pub fn parse(value: &mut Value, input: &str) -> Result<(), ParseError> {
    parse_slice(value, input.as_bytes())
}

/// Same as [`parse`], for raw bytes.
pub fn parse_slice(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    *value = Value::Null;
    match ValueParser::new(input).parse_root() {
        Ok(parsed) => {
            *value = parsed;
            Ok(())
        }
        Err(e) => {
            log::debug!("parse failed: {e}");
            Err(e)
        }
    }
}
