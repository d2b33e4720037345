//! The host's string-to-number grammar.
//!
//! Surrounding whitespace is ignored, a blank string reads as 0, `Infinity`
//! may carry a sign, and `0x`/`0o`/`0b` prefixes select an unsigned integer
//! radix. Anything else must be a plain decimal literal with an optional
//! exponent.

pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(n) = parse_radix(s) {
        return n;
    }
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse().ok()
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise.
fn parse_radix(s: &str) -> Option<Option<f64>> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

fn is_decimal_literal(s: &str) -> bool {
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty() {
        return false;
    }
    if !all_digits(int) || !all_digits(frac) {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
