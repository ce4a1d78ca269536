//! Display formatting for monetary amounts, percentages and counts.
//!
//! All renderings follow the `en-US` conventions the portfolio pages use:
//! `,` groups thousands, `.` separates fractions, and rounding is half away
//! from zero on the exact binary value of the input.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::FormatError;

const NUMBER_FRACTION_DIGITS: u32 = 3;
const MAX_DECIMAL_SCALE: u32 = 28;

/// Renders `amount` as US dollars, e.g. `-$1,234.50`.
///
/// Non-finite amounts have no currency rendering and fail.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite { value: amount });
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let magnitude = fixed_magnitude(amount.abs(), 2);
    let (integer, fraction) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), "00"));

    Ok(format!("{sign}${}.{fraction}", group_thousands(integer)))
}

/// Renders `value` with two decimals and an explicit sign, e.g. `+3.14%`.
///
/// `+` is prepended for every `value >= 0` (negative zero included); negative
/// values keep their own `-`.
pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", format_fixed(value, 2))
}

/// Renders `num` with thousands grouping and at most three fraction digits.
pub fn format_number(num: f64) -> String {
    if num.is_nan() {
        return String::from("NaN");
    }
    if num.is_infinite() {
        return String::from(if num < 0.0 { "-∞" } else { "∞" });
    }

    let sign = if num.is_sign_negative() { "-" } else { "" };
    let magnitude = match Decimal::from_f64_retain(num.abs()) {
        Some(exact) => exact
            .round_dp_with_strategy(NUMBER_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{:.0}", num.abs()),
    };

    match magnitude.split_once('.') {
        Some((integer, fraction)) => format!("{sign}{}.{fraction}", group_thousands(integer)),
        None => format!("{sign}{}", group_thousands(&magnitude)),
    }
}

/// Fixed-point rendering with `digits` fraction digits, no grouping.
///
/// Mirrors what the pages' number inputs show on blur: `NaN`, `Infinity` and
/// `-Infinity` pass through as words, and only strictly negative values get a
/// `-` (so `-0.0` renders as `0.00`).
pub fn format_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-Infinity" } else { "Infinity" });
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", fixed_magnitude(value.abs(), digits))
}

fn fixed_magnitude(magnitude: f64, digits: u32) -> String {
    let precision = digits as usize;
    if digits > MAX_DECIMAL_SCALE {
        return format!("{magnitude:.precision$}");
    }

    match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Beyond the decimal range every f64 is an integer.
        None => format!("{magnitude:.precision$}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
