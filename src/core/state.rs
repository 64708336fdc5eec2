//! The calculator's complete state, one value of a four-variant enum.
//!
//! The shape of the variant tells you exactly where the machine is in an
//! expression: editing the first operand, holding a pending operator,
//! editing the second operand, or stuck after an illegal computation.
//! There is no hidden accumulator and no flag soup; everything the next
//! key press needs is in the variant.

use serde::{Deserialize, Serialize};

use crate::core::operand::Operand;
use crate::core::event::Operator;
use crate::numeric::{display_value, ERROR_DISPLAY};

/// The full state of the evaluation core.
///
/// # Example
///
/// ```rust
/// use calcbrain::{CalculatorState, Key};
///
/// let keys = Key::sequence("0.1 + 0.2 =").unwrap();
/// let state = keys
///     .into_iter()
///     .fold(CalculatorState::default(), CalculatorState::apply);
/// assert_eq!(state.output(), "0.3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorState {
    /// Editing the first operand; nothing else has been entered.
    Left(Operand),
    /// First operand committed, waiting for the second to begin.
    LeftOp { left: Operand, op: Operator },
    /// Editing the second operand of a pending operation.
    LeftOpRight {
        left: Operand,
        op: Operator,
        right: Operand,
    },
    /// An illegal computation happened; only clear leaves this state.
    Error,
}

impl CalculatorState {
    /// A short name for the variant, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::LeftOp { .. } => "LeftOp",
            Self::LeftOpRight { .. } => "LeftOpRight",
            Self::Error => "Error",
        }
    }

    /// Whether the machine is stuck in the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The operand currently being edited, if any.
    ///
    /// While an operator is pending but the second operand has not begun,
    /// the first operand is still the one on show.
    pub fn active_operand(&self) -> Option<&Operand> {
        match self {
            Self::Left(left) | Self::LeftOp { left, .. } => Some(left),
            Self::LeftOpRight { right, .. } => Some(right),
            Self::Error => None,
        }
    }

    /// The display string for this state.
    ///
    /// The active operand is parsed and re-rendered through the display
    /// policy, so typed spellings like `007` or `3.00000000` show as `7`
    /// and `3`. The error state, and any operand that fails to parse,
    /// shows the error sentinel.
    pub fn output(&self) -> String {
        let Some(operand) = self.active_operand() else {
            return ERROR_DISPLAY.to_string();
        };
        match operand.value() {
            Ok(value) => display_value(value),
            Err(_) => ERROR_DISPLAY.to_string(),
        }
    }
}

impl Default for CalculatorState {
    /// The power-on state: editing a first operand of `"0"`.
    fn default() -> Self {
        Self::Left(Operand::zero())
    }
}
