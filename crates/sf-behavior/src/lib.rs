//! Host-agnostic rules behind the storefront page interactions.
//!
//! Each module owns the decisions for one component (which classes, which
//! values, which timings); the browser frontend only applies them to the DOM.

pub mod cart;
pub mod direction;
pub mod reveal;
pub mod search;
pub mod storage;
pub mod tabs;
pub mod toast;
pub mod validation;
pub mod view_mode;

/// JavaScript `parseInt(text, 10)`: optional leading whitespace and sign, then
/// the longest run of ASCII digits. `None` where JS would yield `NaN`. Runs too
/// long for an `i64` saturate at `i64::MAX` in magnitude.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
