//! Cart button feedback, badge counter and quantity steppers.
//!
//! Nothing here models cart contents: the badge is a display counter and the
//! total element only pulses. Both reset on reload.

use crate::parse_leading_int;

pub const ADD_LABEL: &str = "Add to Cart";
pub const ADDED_LABEL: &str = "Added!";
pub const ADDED_CLASS: &str = "bg-green-600";
pub const ADDED_HOLD_MS: u32 = 1500;

pub const BADGE_SELECTOR: &str = ".cart-count";
pub const TOTAL_SELECTOR: &str = ".cart-total";
pub const CONTROL_SELECTOR: &str = ".quantity-control";
pub const MINUS_SELECTOR: &str = ".quantity-minus";
pub const PLUS_SELECTOR: &str = ".quantity-plus";
pub const INPUT_SELECTOR: &str = ".quantity-input";

/// Total pulse: enlarged scale, rest scale, hold time.
pub const TOTAL_PULSE: (&str, &str, u32) = ("scale(1.05)", "scale(1)", 200);

pub const MIN_QUANTITY: i64 = 1;

/// Whether a button's text marks it as an add-to-cart control.
pub fn is_add_to_cart(text: &str, label: &str) -> bool {
    !label.is_empty() && text.contains(label)
}

/// Next badge value: the current text read as an integer (0 when unreadable)
/// plus one.
pub fn next_badge_count(text: &str) -> i64 {
    parse_leading_int(text).unwrap_or(0).saturating_add(1)
}

/// Current stepper value; unreadable or zero input reads as 1.
pub fn read_quantity(raw: &str) -> i64 {
    parse_leading_int(raw).filter(|n| *n != 0).unwrap_or(MIN_QUANTITY)
}

/// `None` at or below the floor: the click is a no-op.
pub fn decrement(raw: &str) -> Option<i64> {
    let current = read_quantity(raw);
    (current > MIN_QUANTITY).then(|| current - 1)
}

pub fn increment(raw: &str) -> i64 {
    read_quantity(raw).saturating_add(1)
}

/// Value written back after a direct edit.
pub fn clamp(raw: &str) -> i64 {
    read_quantity(raw).max(MIN_QUANTITY)
}
