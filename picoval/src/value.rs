// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// Tag of the active [`Value`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
}

/// A parsed JSON scalar.
///
/// A fresh `Value` is `Null`, and so is any slot a failed parse wrote into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// Any JSON number, as a finite double.
    Number(f64),
}

impl Value {
    /// Parses a single JSON value, returning it by value.
    ///
    /// # Example
    /// ```
    /// use picoval::Value;
    /// assert_eq!(Value::parse(" 2.5e1 "), Ok(Value::Number(25.0)));
    /// ```
    pub fn parse(input: &str) -> Result<Value, ParseError> {
        let mut value = Value::default();
        crate::parse(&mut value, input)?;
        Ok(value)
    }

    /// The tag of the active variant.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// The numeric payload, or `None` for literals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::parse(s)
    }
}

/// Returns the tag of the active variant.
pub fn get_type(value: &Value) -> ValueType {
    value.value_type()
}

/// Returns the number held by `value`, or `None` if it is not a number.
pub fn get_number(value: &Value) -> Option<f64> {
    value.as_f64()
}
