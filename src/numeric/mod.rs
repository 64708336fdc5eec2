//! Numeric policies: exact arithmetic and display formatting.
//!
//! Two independent numeric-to-string policies live here by design:
//!
//! - Arithmetic: computed values are rounded at a fixed scale of two
//!   fractional digits (midpoints away from zero) and canonicalized back
//!   into operand text.
//! - Display: the active operand is shown with up to eight fractional
//!   digits, trailing zeros trimmed and no forced minimum.
//!
//! All logic in this module is pure and runs on exact decimals; binary
//! floating point never touches a value.

mod arith;
mod format;

pub use arith::{canonical, compute, negated, percent, round_fixed, ArithmeticError, COMPUTE_SCALE};
pub use format::{display_value, DISPLAY_MAX_SCALE, ERROR_DISPLAY};
