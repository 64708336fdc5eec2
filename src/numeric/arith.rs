//! Exact decimal arithmetic for resolving pending operations.
//!
//! Everything here runs on [`Decimal`] values, never on binary floating
//! point, so decimal inputs round-trip without representation artifacts:
//! `0.1 + 0.2` is exactly `0.3`. Computed values are folded back into
//! operand text through one fixed-scale policy: [`COMPUTE_SCALE`]
//! fractional digits, midpoints rounding away from zero, trailing zeros
//! dropped. The user-facing display policy lives separately in the
//! formatting module and must stay independent from this one.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::core::Operator;

/// Fractional digits kept by the internal arithmetic policy.
pub const COMPUTE_SCALE: u32 = 2;

/// Errors produced while resolving a pending operation.
///
/// These never escape the state machine: the transition function folds
/// them into the error state instead of propagating them to callers.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result does not fit in the 96-bit decimal range")]
    OutOfRange,
}

/// Apply a binary operator to two exact decimal operands.
///
/// `Equal` is the identity on the right operand: inside the resolve path
/// it means "adopt the right operand as the result". Division by zero and
/// out-of-range results are reported as values, never panicked on.
pub fn compute(left: Decimal, op: Operator, right: Decimal) -> Result<Decimal, ArithmeticError> {
    match op {
        Operator::Plus => left.checked_add(right).ok_or(ArithmeticError::OutOfRange),
        Operator::Minus => left.checked_sub(right).ok_or(ArithmeticError::OutOfRange),
        Operator::Multiply => left.checked_mul(right).ok_or(ArithmeticError::OutOfRange),
        Operator::Divide => {
            if right.is_zero() {
                Err(ArithmeticError::DivisionByZero)
            } else {
                left.checked_div(right).ok_or(ArithmeticError::OutOfRange)
            }
        }
        Operator::Equal => Ok(right),
    }
}

/// Arithmetic negation (`0 - value`), the `+/-` keycap.
pub fn negated(value: Decimal) -> Decimal {
    -value
}

/// Scale a value down by one hundred, the `%` keycap.
pub fn percent(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}

/// Round to the fixed arithmetic scale, midpoints away from zero.
pub fn round_fixed(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(COMPUTE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Canonical operand text for a computed value: rounded to the fixed
/// scale, trailing zeros dropped, negative zero collapsed to `0`.
pub fn canonical(value: Decimal) -> String {
    let rounded = round_fixed(value).normalize();
    if rounded.is_zero() {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn addition_is_decimal_exact() {
        assert_eq!(compute(d("0.1"), Operator::Plus, d("0.2")), Ok(d("0.3")));
    }

    #[test]
    fn subtraction_is_decimal_exact() {
        assert_eq!(compute(d("1"), Operator::Minus, d("0.42")), Ok(d("0.58")));
    }

    #[test]
    fn multiplication_is_decimal_exact() {
        assert_eq!(compute(d("1.5"), Operator::Multiply, d("2")), Ok(d("3")));
    }

    #[test]
    fn division_is_decimal_exact() {
        assert_eq!(compute(d("1"), Operator::Divide, d("8")), Ok(d("0.125")));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            compute(d("2"), Operator::Divide, d("0")),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn equal_adopts_the_right_operand() {
        assert_eq!(compute(d("5"), Operator::Equal, d("7")), Ok(d("7")));
    }

    #[test]
    fn out_of_range_results_are_reported() {
        assert_eq!(
            compute(Decimal::MAX, Operator::Multiply, d("2")),
            Err(ArithmeticError::OutOfRange)
        );
        assert_eq!(
            compute(Decimal::MAX, Operator::Plus, d("1")),
            Err(ArithmeticError::OutOfRange)
        );
    }

    #[test]
    fn negated_flips_the_sign() {
        assert_eq!(negated(d("5")), d("-5"));
        assert_eq!(negated(d("-0.5")), d("0.5"));
        assert_eq!(negated(d("0")), d("0"));
    }

    #[test]
    fn percent_divides_by_one_hundred() {
        assert_eq!(percent(d("50")), d("0.5"));
        assert_eq!(percent(d("0.5")), d("0.005"));
    }

    #[test]
    fn round_fixed_keeps_two_fractional_digits() {
        assert_eq!(round_fixed(d("0.124")), d("0.12"));
        assert_eq!(round_fixed(d("3.3333333")), d("3.33"));
    }

    #[test]
    fn round_fixed_midpoints_go_away_from_zero() {
        assert_eq!(round_fixed(d("0.125")), d("0.13"));
        assert_eq!(round_fixed(d("-0.125")), d("-0.13"));
    }

    #[test]
    fn round_fixed_is_idempotent() {
        let once = round_fixed(d("0.126"));
        assert_eq!(round_fixed(once), once);
    }

    #[test]
    fn canonical_drops_trailing_zeros() {
        assert_eq!(canonical(d("0.50")), "0.5");
        assert_eq!(canonical(d("3.00")), "3");
        assert_eq!(canonical(d("200.10")), "200.1");
    }

    #[test]
    fn canonical_rounds_through_the_fixed_scale() {
        assert_eq!(canonical(d("10") / d("3")), "3.33");
        assert_eq!(canonical(d("2") / d("3")), "0.67");
    }

    #[test]
    fn canonical_never_emits_negative_zero() {
        assert_eq!(canonical(d("-0.004")), "0");
        assert_eq!(canonical(d("-0")), "0");
    }
}
