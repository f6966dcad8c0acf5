//! Number lexer.
//!
//! Parses one numeric literal into a [`Value`] plus the formatting facts
//! the writer needs to reproduce the literal byte-for-byte: hex digit
//! case, decimal digit grouping, leading-zero runs, and exponent shape.
//!
//! Exponents are applied by repeated multiplication (with 0.1 for a
//! negative exponent) rather than a single `powi` call; in the integer
//! case each step truncates, so `5e-1` collapses to 0.

use crate::style::{IntFormat, RealDigits, RealFormat};
use crate::value::Value;

/// A lexing failure at a byte offset; the parser converts this into an
/// invalid-value error with line/column context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LexError {
    pub offset: usize,
    pub msg: &'static str,
}

/// Lexes the numeric literal starting at `start` and returns the value
/// together with the offset just past the literal.
///
/// `start` must point at a sign, digit, or `.` (the value parser's
/// dispatch guarantees this).
pub(crate) fn lex(buf: &[u8], start: usize) -> Result<(Value, usize), LexError> {
    let len = buf.len();
    let mut p = start;

    let mut negative = false;
    if p < len && buf[p] == b'+' {
        p += 1;
    } else if p < len && buf[p] == b'-' {
        negative = true;
        p += 1;
    }

    let mut int_format = IntFormat::Decimal;
    let mut digits = String::with_capacity(24);
    let mut is_real = false;
    let mut lead_digit = true;

    if p < len && buf[p] == b'.' {
        // `.5`-style literal: synthesize the `0` the float conversion
        // needs, but remember the source had none.
        is_real = true;
        lead_digit = false;
        digits.push('0');
        digits.push('.');
        p += 1;
        while p < len && buf[p].is_ascii_digit() {
            digits.push(buf[p] as char);
            p += 1;
        }
    } else if buf[p..].starts_with(b"0x") || buf[p..].starts_with(b"0X") {
        p += 2;
        let mut upper = false;
        while p < len && buf[p].is_ascii_hexdigit() {
            if buf[p].is_ascii_uppercase() {
                upper = true;
            }
            digits.push(buf[p] as char);
            p += 1;
        }
        int_format = if upper {
            IntFormat::UpperHex
        } else {
            IntFormat::LowerHex
        };
    } else {
        while p < len && buf[p].is_ascii_digit() {
            digits.push(buf[p] as char);
            p += 1;
        }

        if p < len && buf[p] == b'.' {
            is_real = true;
            digits.push('.');
            p += 1;
            let mut fraction_len = 0;
            while p < len && buf[p].is_ascii_digit() {
                digits.push(buf[p] as char);
                fraction_len += 1;
                p += 1;
            }
            // A bare trailing dot (`5.`) gets one zero so the fraction is
            // never empty; fractions with digits stay exactly as written.
            if fraction_len == 0 {
                digits.push('0');
            }
        }
    }

    let mut exponent: i32 = 0;
    let mut exp_negative = false;
    let mut exp_plus = false;

    if !int_format.is_hex() && p < len && (buf[p] | 0x20) == b'e' {
        p += 1;
        if p < len && (buf[p] == b'+' || buf[p] == b'-' || buf[p].is_ascii_digit()) {
            if buf[p] == b'-' {
                exp_negative = true;
                p += 1;
            } else if buf[p] == b'+' {
                exp_plus = true;
                p += 1;
            }
            let exp_start = p;
            while p < len && buf[p].is_ascii_digit() {
                p += 1;
            }
            let text = std::str::from_utf8(&buf[exp_start..p]).unwrap_or("");
            if !text.is_empty() {
                exponent = text.parse().map_err(|_| LexError {
                    offset: exp_start,
                    msg: "exponent out of range",
                })?;
            }
        }
    }

    if digits.is_empty() {
        return Err(LexError {
            offset: start,
            msg: "expected digits in numeric literal",
        });
    }

    if !is_real {
        let magnitude = if int_format.is_hex() {
            i128::from_str_radix(&digits, 16)
        } else {
            digits.parse::<i128>()
        }
        .map_err(|_| LexError {
            offset: start,
            msg: "malformed integer literal",
        })?;

        let signed = if negative { -magnitude } else { magnitude };
        let mut value = i64::try_from(signed).map_err(|_| LexError {
            offset: start,
            msg: "integer literal out of range",
        })?;

        // Repeated truncating multiplication: a negative exponent zeroes
        // the integer on the first step.
        let step: i64 = if exp_negative { 0 } else { 10 };
        for _ in 0..exponent {
            if value == 0 {
                break;
            }
            value = value.checked_mul(step).ok_or(LexError {
                offset: start,
                msg: "integer literal out of range",
            })?;
        }

        return Ok((
            Value::Integer {
                value,
                format: int_format,
            },
            p,
        ));
    }

    let mut value: f64 = digits.parse().map_err(|_| LexError {
        offset: start,
        msg: "malformed real literal",
    })?;
    if negative {
        value = -value;
    }

    let format = match real_digits(&digits, lead_digit) {
        // Literals whose digit groups overflow the stored integers lose
        // their exact formatting and fall back to canonical rendering.
        None => RealFormat::Plain,
        Some(parts) => {
            if exponent != 0 {
                RealFormat::Exponent {
                    digits: parts,
                    exponent,
                    negative: exp_negative,
                    explicit_plus: exp_plus,
                }
            } else {
                RealFormat::Digits(parts)
            }
        }
    };

    let eb: f64 = if exp_negative { 0.1 } else { 10.0 };
    for _ in 0..exponent {
        value *= eb;
        // saturated values stop changing; no need to finish a huge exponent
        if value == 0.0 || value.is_infinite() {
            break;
        }
    }

    Ok((Value::Real { value, format }, p))
}

/// Splits the accumulated digit buffer at the decimal point into the
/// fields the writer replays. Returns `None` when a digit group does not
/// fit the stored integer widths.
fn real_digits(digits: &str, lead_digit: bool) -> Option<RealDigits> {
    let (int_text, frac_text) = digits.split_once('.')?;

    let integer_part: i64 = int_text.parse().ok()?;

    let zero_run = frac_text.bytes().take_while(|b| *b == b'0').count();
    // Keep at least one digit in the fraction so `0.00` re-renders with
    // both zeros instead of collapsing to `0.0`.
    let leading_zeros = zero_run.min(frac_text.len().saturating_sub(1));
    let fraction: i64 = if frac_text.is_empty() {
        0
    } else {
        frac_text[leading_zeros..].parse().ok()?
    };

    Some(RealDigits {
        integer_part,
        fraction,
        leading_zeros: u8::try_from(leading_zeros).ok()?,
        lead_digit,
    })
}
