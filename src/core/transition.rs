//! The transition function: one key press in, one new state out.
//!
//! `apply` is total and pure. Every failure mode is folded into the state
//! itself: division by zero and out-of-range results become the error
//! variant, unparsable operand text degrades at display time. Nothing in
//! this module panics, logs, or touches the outside world.

use crate::core::event::{Command, Digit, Key, Operator};
use crate::core::operand::Operand;
use crate::core::state::CalculatorState;
use crate::numeric::{compute, negated, percent};

/// Reducer-style entry point, for dispatchers that prefer a free function.
///
/// Identical to [`CalculatorState::apply`].
pub fn reduce(state: CalculatorState, key: Key) -> CalculatorState {
    state.apply(key)
}

impl CalculatorState {
    /// Apply one key press, consuming the current state.
    ///
    /// Clear resets from anywhere, including the error state. Every other
    /// key is a no-op while in error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcbrain::{CalculatorState, Key};
    ///
    /// let mut state = CalculatorState::default();
    /// for key in Key::sequence("2 + 3 + 4 =").unwrap() {
    ///     state = state.apply(key);
    /// }
    /// assert_eq!(state.output(), "9");
    /// ```
    #[must_use]
    pub fn apply(self, key: Key) -> Self {
        if matches!(key, Key::Command(Command::Clear)) {
            return Self::default();
        }
        if self.is_error() {
            return Self::Error;
        }
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Dot => self.press_dot(),
            Key::Op(op) => self.press_operator(op),
            Key::Command(command) => self.press_command(command),
        }
    }

    fn press_digit(self, digit: Digit) -> Self {
        match self {
            Self::Left(left) => Self::Left(left.push_digit(digit)),
            Self::LeftOp { left, op } => Self::LeftOpRight {
                left,
                op,
                right: Operand::from_digit(digit),
            },
            Self::LeftOpRight { left, op, right } => Self::LeftOpRight {
                left,
                op,
                right: right.push_digit(digit),
            },
            Self::Error => Self::Error,
        }
    }

    fn press_dot(self) -> Self {
        match self {
            Self::Left(left) => Self::Left(left.push_dot()),
            Self::LeftOp { left, op } => Self::LeftOpRight {
                left,
                op,
                right: Operand::fresh_dot(),
            },
            Self::LeftOpRight { left, op, right } => Self::LeftOpRight {
                left,
                op,
                right: right.push_dot(),
            },
            Self::Error => Self::Error,
        }
    }

    /// A new operator either opens a pending operation, replaces one that
    /// has no right operand yet, or resolves a complete one and chains.
    fn press_operator(self, op: Operator) -> Self {
        match self {
            Self::Left(left) => Self::LeftOp { left, op },
            Self::LeftOp { left, .. } => Self::LeftOp { left, op },
            Self::LeftOpRight {
                left,
                op: pending,
                right,
            } => match resolve(&left, pending, &right) {
                Some(result) => Self::LeftOp { left: result, op },
                None => Self::Error,
            },
            Self::Error => Self::Error,
        }
    }

    fn press_command(self, command: Command) -> Self {
        let transform = match command {
            Command::Clear => return Self::default(),
            Command::Flip => negated,
            Command::Percent => percent,
        };
        match self {
            Self::Left(left) => Self::Left(transformed(left, transform)),
            Self::LeftOp { left, op } => Self::LeftOp {
                left: transformed(left, transform),
                op,
            },
            Self::LeftOpRight { left, op, right } => Self::LeftOpRight {
                left,
                op,
                right: transformed(right, transform),
            },
            Self::Error => Self::Error,
        }
    }
}

/// Compute a pending operation. `None` means the machine goes to error:
/// division by zero, an out-of-range result, or operand text that never
/// was a number.
fn resolve(left: &Operand, op: Operator, right: &Operand) -> Option<Operand> {
    let left = left.value().ok()?;
    let right = right.value().ok()?;
    compute(left, op, right).ok().map(Operand::from_value)
}

/// Run a transform over the active operand, re-serializing the result
/// through the fixed-scale policy. Unparsable text is left as typed.
fn transformed(
    operand: Operand,
    transform: fn(rust_decimal::Decimal) -> rust_decimal::Decimal,
) -> Operand {
    match operand.value() {
        Ok(value) => Operand::from_value(transform(value)),
        Err(_) => operand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> CalculatorState {
        Key::sequence(script)
            .unwrap()
            .into_iter()
            .fold(CalculatorState::default(), CalculatorState::apply)
    }

    fn output(script: &str) -> String {
        run(script).output()
    }

    #[test]
    fn typing_digits_builds_the_left_operand() {
        assert_eq!(output("4 2"), "42");
        assert_eq!(run("4 2"), CalculatorState::Left(Operand::new("42")));
    }

    #[test]
    fn a_lone_zero_is_replaced_not_extended() {
        assert_eq!(run("0 0 7"), CalculatorState::Left(Operand::new("7")));
    }

    #[test]
    fn dot_then_digit_reads_as_a_fraction() {
        let state = run(". 5");
        assert_eq!(state.active_operand().unwrap().as_str(), "0.5");
        assert_eq!(state.output(), "0.5");
    }

    #[test]
    fn an_operator_commits_the_left_operand() {
        assert_eq!(
            run("7 +"),
            CalculatorState::LeftOp {
                left: Operand::new("7"),
                op: Operator::Plus,
            }
        );
    }

    #[test]
    fn a_digit_after_an_operator_starts_the_right_operand_fresh() {
        assert_eq!(
            run("7 + 3"),
            CalculatorState::LeftOpRight {
                left: Operand::new("7"),
                op: Operator::Plus,
                right: Operand::new("3"),
            }
        );
    }

    #[test]
    fn a_dot_after_an_operator_starts_the_right_operand_at_zero_point() {
        let state = run("7 ÷ .");
        assert_eq!(state.active_operand().unwrap().as_str(), "0.");
    }

    #[test]
    fn back_to_back_operators_replace_the_pending_one() {
        assert_eq!(
            run("7 + ×"),
            CalculatorState::LeftOp {
                left: Operand::new("7"),
                op: Operator::Multiply,
            }
        );
    }

    #[test]
    fn a_second_operator_resolves_and_chains() {
        assert_eq!(
            run("2 + 3 +"),
            CalculatorState::LeftOp {
                left: Operand::new("5"),
                op: Operator::Plus,
            }
        );
        assert_eq!(output("2 + 3 + 4 ="), "9");
    }

    #[test]
    fn equal_resolves_and_stays_pending() {
        assert_eq!(
            run("2 + 3 ="),
            CalculatorState::LeftOp {
                left: Operand::new("5"),
                op: Operator::Equal,
            }
        );
        assert_eq!(output("2 + 3 ="), "5");
    }

    #[test]
    fn decimal_addition_is_exact() {
        assert_eq!(output("0.1 + 0.2 ="), "0.3");
    }

    #[test]
    fn division_results_round_at_the_fixed_scale() {
        assert_eq!(output("10 ÷ 3 ="), "3.33");
        assert_eq!(output("2 ÷ 3 ="), "0.67");
    }

    #[test]
    fn division_by_zero_enters_the_error_state() {
        assert_eq!(run("5 ÷ 0 ="), CalculatorState::Error);
        assert_eq!(output("5 ÷ 0 ="), "Error");
    }

    #[test]
    fn division_by_a_zero_spelling_still_errors() {
        assert_eq!(run("5 ÷ 0.0 ="), CalculatorState::Error);
        assert_eq!(run("5 ÷ 0 . ="), CalculatorState::Error);
    }

    #[test]
    fn the_error_state_is_sticky_except_for_clear() {
        let error = run("1 ÷ 0 =");
        for key in Key::sequence("5 . + - × ÷ = +/- %").unwrap() {
            assert_eq!(error.clone().apply(key), CalculatorState::Error);
        }
        assert_eq!(
            error.apply(Key::Command(Command::Clear)),
            CalculatorState::default()
        );
    }

    #[test]
    fn clear_resets_from_every_shape() {
        for script in ["4 2", "4 +", "4 + 2", "1 ÷ 0 ="] {
            let state = run(script).apply(Key::Command(Command::Clear));
            assert_eq!(state, CalculatorState::default());
        }
    }

    #[test]
    fn flip_negates_the_active_operand() {
        assert_eq!(output("5 +/-"), "-5");
        assert_eq!(output("5 +/- +/-"), "5");
    }

    #[test]
    fn flip_targets_the_left_operand_while_no_right_exists() {
        assert_eq!(
            run("5 + +/-"),
            CalculatorState::LeftOp {
                left: Operand::new("-5"),
                op: Operator::Plus,
            }
        );
    }

    #[test]
    fn flip_targets_the_right_operand_once_it_exists() {
        assert_eq!(
            run("5 + 3 +/-"),
            CalculatorState::LeftOpRight {
                left: Operand::new("5"),
                op: Operator::Plus,
                right: Operand::new("-3"),
            }
        );
        assert_eq!(output("5 + 3 +/- ="), "2");
    }

    #[test]
    fn percent_scales_the_active_operand_down() {
        assert_eq!(output("50 %"), "0.5");
        assert_eq!(output("200 + 10 % ="), "200.1");
    }

    #[test]
    fn percent_result_rounds_at_the_fixed_scale() {
        // 0.5 / 100 = 0.005, canonicalized at scale 2.
        assert_eq!(output("0.5 %"), "0.01");
    }

    #[test]
    fn transforms_leave_garbage_operands_as_typed() {
        let state = CalculatorState::Left(Operand::new("junk"));
        let flipped = state.apply(Key::Command(Command::Flip));
        assert_eq!(flipped, CalculatorState::Left(Operand::new("junk")));
        assert_eq!(flipped.output(), "Error");
    }

    #[test]
    fn resolving_garbage_operands_enters_the_error_state() {
        let state = CalculatorState::LeftOpRight {
            left: Operand::new("junk"),
            op: Operator::Plus,
            right: Operand::new("1"),
        };
        assert_eq!(state.apply(Key::Op(Operator::Equal)), CalculatorState::Error);
    }

    #[test]
    fn out_of_range_results_enter_the_error_state() {
        let state = CalculatorState::LeftOpRight {
            left: Operand::from_value(rust_decimal::Decimal::MAX),
            op: Operator::Multiply,
            right: Operand::new("2"),
        };
        assert_eq!(state.apply(Key::Op(Operator::Equal)), CalculatorState::Error);
    }

    #[test]
    fn chained_operations_mix_operators() {
        assert_eq!(output("2 + 3 × 4 ="), "20");
        assert_eq!(output("1 0 - 4 ÷ 2 ="), "3");
    }

    #[test]
    fn equal_then_a_digit_replaces_the_result() {
        // Equal leaves the result pending; the next digit starts a fresh
        // right operand, which the display then shows.
        assert_eq!(output("2 + 3 = 7"), "7");
    }
}
