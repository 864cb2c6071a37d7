// src/core/numeric.rs
//
// Number handling for the exports. The labor export writes quantities below 1
// with a variable number of decimals that encode the magnitude; everything
// else is plain decimal text, sometimes with a comma separator.

const ZERO: &str = "0.000";

/// Decode a labor-export quantity into a 3-decimal string.
///
/// - empty or non-numeric -> `"0.000"`
/// - integer part > 0 -> taken as is
/// - otherwise by digits after the first `.` in the text: 3 -> as is,
///   2 -> / 10, 1 -> / 100, anything else -> as is
///
/// This is the export's own convention, not a general number parser.
pub fn normalize_quantity(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return s!(ZERO);
    }
    let Some(num) = parse_float_prefix(text) else {
        return s!(ZERO);
    };

    let value = if num.floor() > 0.0 {
        num
    } else {
        let decimals = text.split('.').nth(1).map_or(0, |d| d.chars().count());
        match decimals {
            2 => num / 10.0,
            1 => num / 100.0,
            _ => num,
        }
    };
    to_fixed(value, 3)
}

/// Leading decimal number of `s`, ignoring whatever follows
/// (`"12.5kg"` -> 12.5, `".5"` -> 0.5, `"abc"` -> None).
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    // exponent only counts when digits follow
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    s[..i].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Spreadsheet text that may use a decimal comma and stray spaces
/// (`" 1 234,5 "` -> 1234.5). `None` when nothing numeric remains.
pub fn parse_locale_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    parse_float_prefix(&cleaned)
}

/// Round to the nearest integer, halves toward +infinity (`-2.5` -> `-2`).
pub fn round_half_up(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 { f + 1.0 } else { f }
}

/// Fixed-point text with halves rounded away from zero and no `-0`.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    let scale = 10f64.powi(digits as i32);
    let abs = x.abs();
    // exact ties only; `{:.N}` would round these to even
    let exact = format!("{:.30}", abs);
    let tie = exact
        .split_once('.')
        .and_then(|(_, frac)| frac.get(digits..))
        .is_some_and(|rest| rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0'));
    let magnitude = if tie { ((abs * scale).floor() + 1.0) / scale } else { abs };
    let out = format!("{:.*}", digits, magnitude);
    let is_zero = out.bytes().all(|b| b == b'0' || b == b'.');
    if x.is_sign_negative() && !is_zero {
        join!("-", &out)
    } else {
        out
    }
}
