// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while parsing a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The value at the current position is not a valid literal or number.
    InvalidValue,
    /// A valid value was followed by something other than whitespace.
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    NumberTooBig,
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(_err: core::str::Utf8Error) -> Self {
        // Numbers are ASCII once scanned, anything else is not a number
        ParseError::InvalidValue
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number out of range",
        };
        write!(f, "{self:?}: {msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        // Build the lone continuation byte at runtime to keep the literal valid
        let mut invalid_utf8_array = [0u8; 1];
        invalid_utf8_array[0] = 0b10000000u8;

        match core::str::from_utf8(&invalid_utf8_array) {
            Err(utf8_error) => {
                let parse_error: ParseError = utf8_error.into();
                assert_eq!(parse_error, ParseError::InvalidValue);
            }
            Ok(_) => panic!("Expected UTF-8 validation to fail"),
        }
    }

    #[test]
    fn test_display_names_the_kind() {
        let shown = format!("{}", ParseError::RootNotSingular);
        assert!(shown.starts_with("RootNotSingular"));
        assert_eq!(
            format!("{}", ParseError::ExpectValue),
            "ExpectValue: expected a value"
        );
    }
}
