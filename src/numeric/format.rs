//! User-facing display formatting.
//!
//! The display policy is deliberately separate from the fixed-scale
//! arithmetic policy: the machine stores canonical operand text rounded at
//! two fractional digits, while the display shows whatever the active
//! operand holds, capped at [`DISPLAY_MAX_SCALE`] fractional digits with
//! trailing zeros trimmed and no forced minimum. Do not collapse the two;
//! they serve different contracts (what the machine keeps vs. what the
//! user reads).

use rust_decimal::{Decimal, RoundingStrategy};

/// Most fractional digits the display will show.
pub const DISPLAY_MAX_SCALE: u32 = 8;

/// Sentinel shown for the error state and for unparsable operand text.
pub const ERROR_DISPLAY: &str = "Error";

/// Format a value for the display.
///
/// Up to eight fractional digits, midpoints rounding away from zero,
/// trailing zeros trimmed, no digit grouping. Rounding here is display-only
/// and never feeds back into the stored operand.
pub fn display_value(value: Decimal) -> String {
    let shown = value
        .round_dp_with_strategy(DISPLAY_MAX_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if shown.is_zero() {
        "0".to_string()
    } else {
        shown.to_string()
    }
}
