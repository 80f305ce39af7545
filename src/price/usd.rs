use crate::error::PriceError;
use crate::math::format::{format_usd_from_rational, parse_fixed};
use crate::math::math_helpers::pow10;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Fixed‑point scale for every USD amount inside the crate.
pub const USD_DECIMALS: u32 = 18;

/// Converts a UI/oracle USD value into a fixed‑point integer with
/// [`USD_DECIMALS`] decimals.
///
/// The conversion goes through the shortest decimal rendering of the
/// `f64`, so `0.1` becomes exactly `10^17` and not the binary expansion.
/// NaN, infinities, non‑positive values and values below `10^-18` are
/// rejected with the offending field name.
pub fn usd_to_fixed(field: &'static str, value: f64) -> Result<BigUint, PriceError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PriceError::InvalidUsdValue { field, value });
    }
    let fixed = parse_fixed(&value.to_string(), USD_DECIMALS)?;
    if fixed.is_zero() {
        return Err(PriceError::InvalidUsdValue { field, value });
    }
    Ok(fixed)
}

/// Renders a fixed‑point USD amount, see [`format_usd_from_rational`].
pub fn format_usd_fixed(amount: &BigUint) -> String {
    format_usd_from_rational(
        &BigInt::from(amount.clone()),
        &BigInt::from(pow10(USD_DECIMALS)),
    )
}
