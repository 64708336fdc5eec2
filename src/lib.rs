//! Calcbrain: a pure functional calculator evaluation core
//!
//! Calcbrain is the evaluation core of a four-function decimal calculator,
//! built on a "pure core, imperative shell" philosophy. The core is a single
//! pure transition function over a four-variant state enum; the shell is a
//! small session type that owns the current state and logs transitions. The
//! UI that renders buttons and the display string is somebody else's job.
//!
//! # Core Concepts
//!
//! - **Key**: one discrete button press (digit, dot, operator, or command)
//! - **CalculatorState**: everything the machine knows, in one enum value
//! - **apply**: the total, pure transition function `(State, Key) -> State`
//! - **output**: the display string for a state, through the display policy
//!
//! Arithmetic runs on exact decimals (`rust_decimal`), never on binary
//! floating point, so `0.1 + 0.2` is exactly `0.3`. Illegal computations
//! such as division by zero are a state, not an exception: the machine
//! parks in its error variant until the clear key resets it.
//!
//! # Example
//!
//! ```rust
//! use calcbrain::{CalculatorState, Key};
//!
//! let mut state = CalculatorState::default();
//! assert_eq!(state.output(), "0");
//!
//! for key in Key::sequence("2 + 3 + 4 =").unwrap() {
//!     state = state.apply(key);
//! }
//! assert_eq!(state.output(), "9");
//!
//! // Division by zero parks the machine until AC.
//! for key in Key::sequence("÷ 0 =").unwrap() {
//!     state = state.apply(key);
//! }
//! assert_eq!(state.output(), "Error");
//!
//! for key in Key::sequence("AC").unwrap() {
//!     state = state.apply(key);
//! }
//! assert_eq!(state.output(), "0");
//! ```

pub mod core;
pub mod numeric;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    reduce, CalculatorState, Command, Digit, Key, Operand, Operator, ParseKeyError,
};
pub use session::Session;
