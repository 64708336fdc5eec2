//! Input events: the keypad vocabulary.
//!
//! Every interaction with the machine is one discrete key press. A [`Key`]
//! is a digit, the decimal point, a binary operator, or a command, matching
//! the classic four-function keypad. Keys render with their keycap labels
//! (`AC`, `+/-`, `%`, `÷`, `×`, `-`, `+`, `=`) and parse back from those
//! labels, so dispatchers and tests can describe input as plain text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a value outside `0..=9` is used where a digit is required.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("digit must be 0-9, got {0}")]
pub struct DigitRangeError(pub u8);

/// Raised when a key token cannot be recognized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized key token {0:?}")]
pub struct ParseKeyError(pub String);

/// A single keypad digit, guaranteed to be in `0..=9` by construction.
///
/// # Example
///
/// ```rust
/// use calcbrain::Digit;
///
/// assert_eq!(Digit::new(7).unwrap().value(), 7);
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above nine.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value of the digit.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The digit as the character it appends to an operand.
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DigitRangeError(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A binary operator key.
///
/// `Equal` is a pseudo-operator: it never opens a new pending operation,
/// it only forces the pending one to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
}

impl Operator {
    /// The operator's keycap label.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equal => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A command key.
///
/// `Clear` resets the whole machine; `Flip` and `Percent` transform the
/// operand currently being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Clear,
    Flip,
    Percent,
}

impl Command {
    /// The command's keycap label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::Flip => "+/-",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discrete button-press event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Digit(Digit),
    Dot,
    Op(Operator),
    Command(Command),
}

impl Key {
    /// Parse a whitespace-separated key script into a press sequence.
    ///
    /// A token is either a single keycap (`+`, `=`, `AC`, `+/-`, ...) or a
    /// number literal, which expands into its digit and dot presses.
    /// Negative literals are not a thing on a keypad: type the value and
    /// press `+/-`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcbrain::{Digit, Key, Operator};
    ///
    /// let keys = Key::sequence("2.5 + 3").unwrap();
    /// assert_eq!(
    ///     keys,
    ///     vec![
    ///         Key::Digit(Digit::new(2).unwrap()),
    ///         Key::Dot,
    ///         Key::Digit(Digit::new(5).unwrap()),
    ///         Key::Op(Operator::Plus),
    ///         Key::Digit(Digit::new(3).unwrap()),
    ///     ]
    /// );
    /// ```
    pub fn sequence(script: &str) -> Result<Vec<Self>, ParseKeyError> {
        let mut keys = Vec::new();
        for token in script.split_whitespace() {
            if let Ok(key) = token.parse::<Self>() {
                keys.push(key);
            } else if token.chars().all(|ch| ch == '.' || ch.is_ascii_digit()) {
                for ch in token.chars() {
                    keys.push(Self::from_char(ch, token)?);
                }
            } else {
                return Err(ParseKeyError(token.to_string()));
            }
        }
        Ok(keys)
    }

    fn from_char(ch: char, token: &str) -> Result<Self, ParseKeyError> {
        if ch == '.' {
            return Ok(Self::Dot);
        }
        ch.to_digit(10)
            .and_then(|value| Digit::new(value as u8))
            .map(Self::Digit)
            .ok_or_else(|| ParseKeyError(token.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Dot => f.write_str("."),
            Self::Op(op) => write!(f, "{op}"),
            Self::Command(command) => write!(f, "{command}"),
        }
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parse a single keycap token. ASCII aliases are accepted for the
    /// operator glyphs: `/` for `÷`, `*` for `×`, and the Unicode minus
    /// sign for `-`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let key = match token {
            "." => Self::Dot,
            "+" => Self::Op(Operator::Plus),
            "-" | "−" => Self::Op(Operator::Minus),
            "×" | "*" => Self::Op(Operator::Multiply),
            "÷" | "/" => Self::Op(Operator::Divide),
            "=" => Self::Op(Operator::Equal),
            "AC" => Self::Command(Command::Clear),
            "+/-" => Self::Command(Command::Flip),
            "%" => Self::Command(Command::Percent),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch, token)?,
                    _ => return Err(ParseKeyError(token.to_string())),
                }
            }
        };
        Ok(key)
    }
}
