use crate::error::PriceError;
use crate::math::math_helpers::{div_rounding_half_up, pow10};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

const INFINITY: &str = "Infinity";

#[inline]
fn is_negative(numerator: &BigInt, denominator: &BigInt) -> bool {
    !numerator.is_zero() && numerator.is_negative() != denominator.is_negative()
}

/// Renders `numerator / denominator` with exactly `fractional_digits`
/// decimals, rounding half up on the magnitude.
///
/// Returns `"Infinity"` for a zero denominator instead of failing.
pub fn format_fixed(numerator: &BigInt, denominator: &BigInt, fractional_digits: u32) -> String {
    if denominator.is_zero() {
        return INFINITY.to_string();
    }
    let negative = is_negative(numerator, denominator);
    let den = denominator.magnitude();
    let scale = pow10(fractional_digits);

    let quotient = match div_rounding_half_up(&(numerator.magnitude() * &scale), den) {
        Ok(quotient) => quotient,
        Err(_) => return INFINITY.to_string(),
    };

    let mut out = String::new();
    if negative && !quotient.is_zero() {
        out.push('-');
    }
    out.push_str(&(&quotient / &scale).to_string());
    if fractional_digits > 0 {
        let fraction = (&quotient % &scale).to_string();
        out.push('.');
        out.push_str(&format!(
            "{fraction:0>width$}",
            width = fractional_digits as usize
        ));
    }
    out
}

/// Renders `numerator / denominator` with adaptive precision: fractional
/// digits are produced by long division until the remainder is exhausted
/// or `max_significant_digits` significant digits have been emitted. The
/// last digit is rounded half up (carrying into the integer part if needed)
/// and trailing zeros are stripped.
///
/// Leading zeros after the decimal point do not count toward the budget,
/// so tiny sub‑cent prices keep their meaningful digits.
pub fn format_rational(
    numerator: &BigInt,
    denominator: &BigInt,
    max_significant_digits: usize,
) -> String {
    if denominator.is_zero() {
        return INFINITY.to_string();
    }
    if numerator.is_zero() {
        return "0".to_string();
    }
    let negative = is_negative(numerator, denominator);
    let den = denominator.magnitude();

    let mut integer = numerator.magnitude() / den;
    let mut remainder = numerator.magnitude() % den;
    let mut significant = if integer.is_zero() {
        0
    } else {
        integer.to_string().len()
    };

    let mut digits: Vec<u8> = Vec::new();
    while !remainder.is_zero() && significant < max_significant_digits {
        remainder *= 10u32;
        // always in 0..=9
        let digit = (&remainder / den).to_u8().unwrap_or_default();
        remainder %= den;
        if digit != 0 || significant > 0 {
            significant += 1;
        }
        digits.push(digit);
    }

    if !remainder.is_zero() && &remainder << 1u32 >= *den {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            integer += 1u32;
        }
    }

    while digits.last() == Some(&0) {
        digits.pop();
    }

    let mut out = String::new();
    if negative && (!integer.is_zero() || !digits.is_empty()) {
        out.push('-');
    }
    out.push_str(&integer.to_string());
    if !digits.is_empty() {
        out.push('.');
        out.extend(digits.iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Formats a USD amount with precision chosen by magnitude:
/// `>= 1` gets two decimals and thousands separators, `[0.01, 1)` gets
/// four decimals, and anything smaller keeps six significant digits.
///
/// The tier follows the rounded amount, so `0.99999` prints as `$1.00`
/// and `0.0099999999` as `$0.0100`.
pub fn format_usd_from_rational(numerator: &BigInt, denominator: &BigInt) -> String {
    if denominator.is_zero() {
        return INFINITY.to_string();
    }
    if numerator.is_zero() {
        return "$0.00".to_string();
    }
    let sign = if is_negative(numerator, denominator) {
        "-"
    } else {
        ""
    };
    let abs_num = BigInt::from(numerator.magnitude().clone());
    let abs_den = BigInt::from(denominator.magnitude().clone());

    // the amount at four decimals, scaled by 10^4
    let four_dp_scale = pow10(4);
    let rounded_four_dp =
        div_rounding_half_up(&(abs_num.magnitude() * &four_dp_scale), abs_den.magnitude())
            .unwrap_or_default();

    let body = if rounded_four_dp >= four_dp_scale {
        let fixed = format_fixed(&abs_num, &abs_den, 2);
        match fixed.split_once('.') {
            Some((int_part, frac)) => format!("{}.{frac}", group_thousands(int_part)),
            None => group_thousands(&fixed),
        }
    } else if &abs_num * 100u32 >= abs_den {
        format_fixed(&abs_num, &abs_den, 4)
    } else {
        match format_rational(&abs_num, &abs_den, 6) {
            // six significant digits rounded up to a whole cent
            cent if cent == "0.01" => format_fixed(&abs_num, &abs_den, 4),
            sub_cent => sub_cent,
        }
    };
    format!("{sign}${body}")
}

/// Inserts `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Parses a plain decimal string (`"12"`, `"0.0031"`, `"+7.5"`) into an
/// integer scaled by `10^decimals`. Extra fractional digits are rounded
/// half up.
pub fn parse_fixed(text: &str, decimals: u32) -> Result<BigUint, PriceError> {
    let invalid = || PriceError::InvalidDecimal(text.to_string());
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let keep = frac_part.len().min(decimals as usize);
    let (kept, dropped) = frac_part.split_at(keep);
    let padded = format!("{int_part}{kept}{}", "0".repeat(decimals as usize - keep));
    let mut value = if padded.is_empty() {
        BigUint::zero()
    } else {
        BigUint::parse_bytes(padded.as_bytes(), 10).ok_or_else(invalid)?
    };
    if dropped.bytes().next().is_some_and(|b| b >= b'5') {
        value += 1u32;
    }
    Ok(value)
}
