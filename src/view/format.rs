//! Chilean (es-CL) number formatting.
//!
//! Thousands are grouped with `.` and decimals follow a `,`. Rounding is half
//! away from zero on the shortest decimal form of the value, so `1.005` with
//! two digits reads `1,01`.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Shown in any slot whose value is absent
pub const PLACEHOLDER: &str = "-";

/// Shown for absent segment names
pub const UNDEFINED: &str = "No definido";

/// Format `value` with exactly `digits` fraction digits
pub fn decimal(value: f64, digits: usize) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let shortest = value.abs().to_string();
    let (int_digits, frac_digits) = match Decimal::from_str(&shortest) {
        Ok(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits as u32);
            split_fraction(&rounded.to_string())
        }
        // Beyond the 96-bit mantissa; round the digit string directly
        Err(_) => round_digits(&shortest, digits),
    };

    let mut out = String::from(sign);
    out.push_str(&group_thousands(&int_digits));
    if digits > 0 {
        out.push(',');
        out.push_str(&frac_digits);
    }
    out
}

fn split_fraction(fixed: &str) -> (String, String) {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));
    (int_part.to_string(), frac_part.to_string())
}

/// Half-away-from-zero on an unsigned plain decimal string
fn round_digits(shortest: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest, ""));

    let mut kept: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    kept.extend((0..digits).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(digits).is_some_and(|next| *next >= b'5') {
        round_up(&mut kept);
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    (
        String::from_utf8_lossy(int_digits).into_owned(),
        String::from_utf8_lossy(frac_digits).into_owned(),
    )
}

/// Add one unit in the last place of an ASCII digit string
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Two-decimal UF amount, e.g. `1.234,50 UF`
pub fn uf(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{} UF", decimal(v, 2)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Fixed-digit number, or the placeholder when absent
pub fn number(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => decimal(v, digits),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Plain number as the service sent it: `85`, `85.5`
pub fn raw(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Treats zero and NaN as missing
pub fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
