//! Lenient numeric parsing for form input.
//!
//! Both parsers accept the longest numeric prefix of the input after leading
//! whitespace, so `"85 m2"` reads as 85 and `"3.7"` reads as 3 for counts.

/// Whitespace skipped before a number, including the byte-order mark
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the longest decimal prefix of `input`, with optional sign, fraction
/// and exponent. Returns `None` when no digits lead the input.
pub fn float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_blank);
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the longest base-10 integer prefix of `input`.
/// Returns `None` when no digits lead the input or the value overflows.
pub fn int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start_matches(is_blank);
    let bytes = s.as_bytes();

    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = count_digits(&bytes[start..]);
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = s[start..start + digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Area-like value: positive and finite, anything else becomes 0
pub fn area(input: &str) -> f64 {
    float_prefix(input)
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(0.0)
}

/// Count-like value: non-negative and within range, anything else becomes 0
pub fn count(input: &str) -> u32 {
    int_prefix(input)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}
