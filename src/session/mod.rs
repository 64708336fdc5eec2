//! The imperative shell: a session that owns the machine's state.
//!
//! `Session` is the in-process adapter an input dispatcher drives. It holds
//! the current [`CalculatorState`], replaces it wholesale on each key press,
//! and reports every transition through `tracing`. All decisions stay in the
//! pure core; this module only holds state and observes.

use tracing::{debug, warn};

use crate::core::{CalculatorState, Key, ParseKeyError};

/// A running calculator session.
///
/// # Example
///
/// ```rust
/// use calcbrain::Session;
///
/// let mut session = Session::new();
/// session.script("7 × 6 =").unwrap();
/// assert_eq!(session.output(), "42");
///
/// session.reset();
/// assert_eq!(session.output(), "0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: CalculatorState,
}

impl Session {
    /// A fresh session, displaying `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The current display string.
    pub fn output(&self) -> String {
        self.state.output()
    }

    /// Apply one key press and return the new state.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        let from = self.state.name();
        let was_ok = !self.state.is_error();
        self.state = self.state.clone().apply(key);
        if self.state.is_error() && was_ok {
            warn!(key = %key, from, "illegal computation, machine entered the error state");
        }
        debug!(
            key = %key,
            from,
            to = self.state.name(),
            display = %self.state.output(),
            "key applied"
        );
        &self.state
    }

    /// Apply a whole sequence of key presses.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> &CalculatorState {
        for key in keys {
            self.press(key);
        }
        &self.state
    }

    /// Parse a keypad script (see [`Key::sequence`]) and apply it.
    pub fn script(&mut self, script: &str) -> Result<&CalculatorState, ParseKeyError> {
        let keys = Key::sequence(script)?;
        Ok(self.press_all(keys))
    }

    /// Reset to the power-on state, the programmatic `AC`.
    pub fn reset(&mut self) {
        debug!(from = self.state.name(), "session reset");
        self.state = CalculatorState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Operand};

    #[test]
    fn a_new_session_displays_zero() {
        assert_eq!(Session::new().output(), "0");
    }

    #[test]
    fn press_replaces_the_state() {
        let mut session = Session::new();
        session.press(Key::Command(Command::Flip));
        assert_eq!(session.state(), &CalculatorState::Left(Operand::new("0")));
        session.script("5 ÷ 0 =").unwrap();
        assert!(session.state().is_error());
    }

    #[test]
    fn script_runs_a_whole_expression() {
        let mut session = Session::new();
        session.script("0.1 + 0.2 =").unwrap();
        assert_eq!(session.output(), "0.3");
    }

    #[test]
    fn script_reports_bad_tokens_and_keeps_prior_state() {
        let mut session = Session::new();
        session.script("4 2").unwrap();
        assert!(session.script("sin").is_err());
        assert_eq!(session.output(), "42");
    }

    #[test]
    fn reset_recovers_from_the_error_state() {
        let mut session = Session::new();
        session.script("1 ÷ 0 =").unwrap();
        assert_eq!(session.output(), "Error");
        session.reset();
        assert_eq!(session.output(), "0");
    }
}
