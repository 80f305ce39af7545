use crate::Q192_BITS;
use crate::error::PriceError;
use crate::math::math_helpers::{pow10, sqrt_floor};
use crate::math::rational::Rational;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[inline]
fn q192() -> BigUint {
    BigUint::one() << Q192_BITS
}

/// Raw token1/token0 ratio `sqrtPrice² / 2^192` as an exact rational.
pub fn price_ratio_from_sqrt_x96(sqrt_price_x96: &BigUint) -> Rational {
    Rational {
        numerator: BigInt::from(sqrt_price_x96 * sqrt_price_x96),
        denominator: BigInt::from(q192()),
    }
}

/// Price of one whole token0 in whole token1, undoing each token's
/// decimal scale without dividing.
pub fn price1_per0_from_sqrt_x96(sqrt_price_x96: &BigUint, decimals0: u8, decimals1: u8) -> Rational {
    let raw = price_ratio_from_sqrt_x96(sqrt_price_x96);
    let shift = pow10(u32::from(decimals0.abs_diff(decimals1)));
    if decimals0 >= decimals1 {
        raw.scale_up(&shift)
    } else {
        Rational {
            numerator: raw.numerator,
            denominator: raw.denominator * BigInt::from(shift),
        }
    }
}

/// Quote units per one whole base unit, whichever slot the base token
/// occupies in the pool.
pub fn human_price_quote_per_base(
    sqrt_price_x96: &BigUint,
    base_decimals: u8,
    quote_decimals: u8,
    base_is_token0: bool,
) -> Result<Rational, PriceError> {
    if sqrt_price_x96.is_zero() {
        return Err(PriceError::NonPositivePrice {
            field: "sqrtPriceX96",
        });
    }
    if base_is_token0 {
        Ok(price1_per0_from_sqrt_x96(
            sqrt_price_x96,
            base_decimals,
            quote_decimals,
        ))
    } else {
        let base_per_quote = price1_per0_from_sqrt_x96(sqrt_price_x96, quote_decimals, base_decimals);
        Ok(Rational {
            numerator: base_per_quote.denominator,
            denominator: base_per_quote.numerator,
        })
    }
}

/// Inverse of [`human_price_quote_per_base`]: turns a human price of
/// `price_numerator / (price_denominator * 10^price_decimals)` quote per
/// base into a floor‑rounded sqrt price.
///
/// The raw ratio is scaled by `2^192` and divided once, right before the
/// only square root. A ratio that scales down to zero is reported as
/// `PriceError::PriceUnderflow` rather than returned as a zero price.
pub fn sqrt_price_x96_from_rational(
    price_numerator: &BigUint,
    price_denominator: &BigUint,
    price_decimals: u32,
    base_decimals: u8,
    quote_decimals: u8,
    base_is_token0: bool,
) -> Result<BigUint, PriceError> {
    if price_numerator.is_zero() {
        return Err(PriceError::NonPositivePrice {
            field: "price numerator",
        });
    }
    if price_denominator.is_zero() {
        return Err(PriceError::NonPositivePrice {
            field: "price denominator",
        });
    }

    // raw quote units per raw base unit
    let quote_raw = price_numerator * pow10(u32::from(quote_decimals));
    let base_raw = price_denominator * pow10(price_decimals + u32::from(base_decimals));

    let (token1, token0) = if base_is_token0 {
        (quote_raw, base_raw)
    } else {
        (base_raw, quote_raw)
    };

    let scaled = (token1 << Q192_BITS) / token0;
    if scaled.is_zero() {
        return Err(PriceError::PriceUnderflow {
            numerator: price_numerator.clone(),
            denominator: price_denominator * pow10(price_decimals),
        });
    }
    Ok(sqrt_floor(&scaled))
}

/// Sqrt price at which `total_supply` base tokens are worth
/// `target_market_cap_usd`, priced in a quote token worth
/// `quote_token_usd_price`.
///
/// Both USD amounts carry `usd_decimals` decimals; `total_supply` is in
/// raw base units. Everything stays rational until the single square root
/// inside [`sqrt_price_x96_from_rational`].
#[allow(clippy::too_many_arguments)]
pub fn target_sqrt_price_x96_from_market_cap(
    total_supply: &BigUint,
    base_decimals: u8,
    target_market_cap_usd: &BigUint,
    usd_decimals: u32,
    quote_token_usd_price: &BigUint,
    quote_decimals: u8,
    base_is_token0: bool,
) -> Result<BigUint, PriceError> {
    if total_supply.is_zero() {
        return Err(PriceError::ZeroTotalSupply);
    }
    if target_market_cap_usd.is_zero() {
        return Err(PriceError::NonPositivePrice {
            field: "target market cap",
        });
    }
    if quote_token_usd_price.is_zero() {
        return Err(PriceError::NonPositivePrice {
            field: "quote token USD price",
        });
    }

    let usd_scale = pow10(usd_decimals);
    // USD per whole base token: (cap / 10^usd) / (supply / 10^base)
    let usd_per_base_num = target_market_cap_usd * pow10(u32::from(base_decimals));
    let usd_per_base_den = total_supply * &usd_scale;
    // quote per whole base token: usd_per_base / (quote_price / 10^usd)
    let numerator = usd_per_base_num * &usd_scale;
    let denominator = usd_per_base_den * quote_token_usd_price;

    sqrt_price_x96_from_rational(
        &numerator,
        &denominator,
        0,
        base_decimals,
        quote_decimals,
        base_is_token0,
    )
}
