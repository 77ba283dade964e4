//! Primitive → string coercions
//!
//! Text content and attribute values go through the same coercions as a
//! browser host: numbers follow ECMAScript `Number::toString`, booleans
//! become `"true"` / `"false"`.

use compact_str::CompactString;

/// Magnitude at which integers switch to exponent notation (`1e+21`).
const EXP_UPPER: i32 = 21;
/// Decimal exponent below which fractions switch to exponent notation (`1e-7`).
const EXP_LOWER: i32 = -6;

/// Format a number the way the host's default numeric-to-string rule does.
///
/// ```
/// use tola_vnode::convert::number_to_string;
///
/// assert_eq!(number_to_string(42.0), "42");
/// assert_eq!(number_to_string(0.5), "0.5");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// ```
pub fn number_to_string(value: f64) -> CompactString {
    if value.is_nan() {
        return CompactString::const_new("NaN");
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return CompactString::const_new(s);
    }
    if value == 0.0 {
        // Covers -0 as well
        return CompactString::const_new("0");
    }

    // `{:e}` yields the shortest round-trip digits: "1.2345e3", "5e-7"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // value = 0.d1d2..dk × 10^n
    let k = digits.len() as i32;
    let n = exp + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= EXP_UPPER {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= EXP_UPPER {
        let (int, frac) = digits.split_at(n as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if EXP_LOWER < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e >= 0 { '+' } else { '-' });
        out.push_str(&e.abs().to_string());
    }

    CompactString::from(out)
}

/// Format a boolean as an attribute value.
#[inline]
pub fn bool_to_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
