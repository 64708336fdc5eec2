//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the machine:
//! - The keypad event vocabulary (`Key` and its parts)
//! - The `Operand` text accumulator
//! - The four-variant `CalculatorState` and its display output
//! - The `apply`/`reduce` transition function
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. The shell lives in
//! the session module.

mod event;
mod operand;
mod state;
mod transition;

pub use event::{Command, Digit, DigitRangeError, Key, Operator, ParseKeyError};
pub use operand::{Operand, OperandError};
pub use state::CalculatorState;
pub use transition::reduce;
