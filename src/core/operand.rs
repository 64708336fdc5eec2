//! The operand under edit, kept as the exact text the user typed.
//!
//! Digits and the decimal point append to a string rather than mutate a
//! number, so `0.`, `0.10`, and `007` survive as typed until an operator
//! forces them through decimal arithmetic. Results coming back from the
//! arithmetic layer re-enter as canonical text via [`Operand::from_value`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::event::Digit;
use crate::numeric::canonical;

/// Raised when operand text does not parse as a decimal number.
///
/// Unreachable through the public key-press surface, which only ever
/// appends digits and dots to `"0"`. Hand-built states can still hold
/// arbitrary text, and resolution maps this error to the error state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("operand text {text:?} is not a decimal number")]
pub struct OperandError {
    pub text: String,
}

/// A number in the middle of being typed.
///
/// # Example
///
/// ```rust
/// use calcbrain::{Digit, Operand};
///
/// let five = Digit::new(5).unwrap();
/// let operand = Operand::zero().push_dot().push_digit(five);
/// assert_eq!(operand.as_str(), "0.5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand(String);

impl Operand {
    /// The freshly-cleared operand, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// An operand holding the given text verbatim.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// An operand started by typing a digit onto an empty entry.
    pub fn from_digit(digit: Digit) -> Self {
        Self(digit.as_char().to_string())
    }

    /// An operand started by pressing the dot on an empty entry, `"0."`.
    pub fn fresh_dot() -> Self {
        Self("0.".to_string())
    }

    /// An operand carrying a computed value, re-serialized through the
    /// fixed-scale rounding of the arithmetic layer.
    pub fn from_value(value: Decimal) -> Self {
        Self(canonical(value))
    }

    /// Append a digit. A lone `"0"` is replaced rather than extended, so
    /// typing never produces leading zeros like `"05"`.
    pub fn push_digit(&self, digit: Digit) -> Self {
        if self.0 == "0" {
            Self::from_digit(digit)
        } else {
            let mut text = self.0.clone();
            text.push(digit.as_char());
            Self(text)
        }
    }

    /// Append the decimal point. A second dot is ignored; an operand holds
    /// at most one.
    pub fn push_dot(&self) -> Self {
        if self.has_dot() {
            return self.clone();
        }
        let mut text = self.0.clone();
        text.push('.');
        Self(text)
    }

    /// Parse the text into an exact decimal value. A trailing dot, as in
    /// `"12."`, reads as the whole number before it.
    pub fn value(&self) -> Result<Decimal, OperandError> {
        let text = self.0.strip_suffix('.').unwrap_or(&self.0);
        Decimal::from_str(text).map_err(|_| OperandError {
            text: self.0.clone(),
        })
    }

    /// Whether the operand parses to exactly zero, in any spelling.
    pub fn is_zero(&self) -> bool {
        self.value().is_ok_and(|value| value.is_zero())
    }

    /// Whether the text already contains a decimal point.
    pub fn has_dot(&self) -> bool {
        self.0.contains('.')
    }

    /// The raw operand text, exactly as typed or computed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
