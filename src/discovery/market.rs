use crate::error::{BandError, Error, PriceError};
use crate::math::math_helpers::pow10;
use crate::math::rational::Rational;
use crate::math::tick_math::{snap_tick, sqrt_ratio_at_tick, tick_at_sqrt_ratio, validate_tick_spacing};
use crate::price::sqrt_price::{human_price_quote_per_base, target_sqrt_price_x96_from_market_cap};
use crate::price::usd::{USD_DECIMALS, format_usd_fixed, usd_to_fixed};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
pub const DEFAULT_TICK_SPACING: i32 = 200;

/// Whole tokens minted for a content or creator coin.
pub const DEFAULT_TOTAL_SUPPLY_TOKENS: u64 = 1_000_000_000;
/// Whole tokens minted for a protocol‑deployer (Clanker) token.
pub const CLANKER_TOTAL_SUPPLY_TOKENS: u64 = 100_000_000_000;

/// Launch parameters shared by every band of one configuration.
///
/// Ticks produced here are oriented with the launched (base) token as
/// token0, i.e. they index the quote‑per‑base price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketContext {
    /// Total base supply in raw units.
    pub total_supply: BigUint,
    pub base_decimals: u8,
    pub quote_decimals: u8,
    /// USD price of one whole quote token, [`USD_DECIMALS`] fixed point.
    pub quote_token_usd: BigUint,
    pub tick_spacing: i32,
}

impl MarketContext {
    pub fn new(
        total_supply: BigUint,
        base_decimals: u8,
        quote_decimals: u8,
        quote_token_usd: f64,
        tick_spacing: i32,
    ) -> Result<Self, PriceError> {
        if total_supply.is_zero() {
            return Err(PriceError::ZeroTotalSupply);
        }
        validate_tick_spacing(tick_spacing)?;
        Ok(Self {
            total_supply,
            base_decimals,
            quote_decimals,
            quote_token_usd: usd_to_fixed("quote token USD price", quote_token_usd)?,
            tick_spacing,
        })
    }

    /// 1B 18‑decimal tokens against an 18‑decimal quote, spacing 200.
    pub fn content_coin(quote_token_usd: f64) -> Result<Self, PriceError> {
        Self::with_whole_supply(DEFAULT_TOTAL_SUPPLY_TOKENS, quote_token_usd)
    }

    /// 100B 18‑decimal tokens against an 18‑decimal quote, spacing 200.
    pub fn clanker_token(quote_token_usd: f64) -> Result<Self, PriceError> {
        Self::with_whole_supply(CLANKER_TOTAL_SUPPLY_TOKENS, quote_token_usd)
    }

    fn with_whole_supply(tokens: u64, quote_token_usd: f64) -> Result<Self, PriceError> {
        Self::new(
            BigUint::from(tokens) * pow10(u32::from(DEFAULT_TOKEN_DECIMALS)),
            DEFAULT_TOKEN_DECIMALS,
            DEFAULT_TOKEN_DECIMALS,
            quote_token_usd,
            DEFAULT_TICK_SPACING,
        )
    }

    pub fn with_tick_spacing(mut self, tick_spacing: i32) -> Result<Self, PriceError> {
        validate_tick_spacing(tick_spacing)?;
        self.tick_spacing = tick_spacing;
        Ok(self)
    }

    /// Snapped tick at which the whole supply is worth `fdv_usd`
    /// ([`USD_DECIMALS`] fixed point).
    ///
    /// The tick comes from the exact sqrt price of that valuation, floored
    /// by the protocol tick math, then rounded to the spacing grid.
    pub fn tick_for_fdv(&self, fdv_usd: &BigUint) -> Result<i32, PriceError> {
        let sqrt_price_x96 = target_sqrt_price_x96_from_market_cap(
            &self.total_supply,
            self.base_decimals,
            fdv_usd,
            USD_DECIMALS,
            &self.quote_token_usd,
            self.quote_decimals,
            true,
        )?;
        snap_tick(tick_at_sqrt_ratio(&sqrt_price_x96)?, self.tick_spacing)
    }

    /// Fully diluted USD valuation implied by the pool sitting at `tick`.
    pub fn fdv_at_tick(&self, tick: i32) -> Result<Rational, PriceError> {
        let sqrt_price_x96 = sqrt_ratio_at_tick(tick)?;
        let price = human_price_quote_per_base(
            &sqrt_price_x96,
            self.base_decimals,
            self.quote_decimals,
            true,
        )?;
        // quote/base * usd/quote * base
        let usd_per_supply = Rational {
            numerator: BigInt::from(&self.quote_token_usd * &self.total_supply),
            denominator: BigInt::from(
                pow10(USD_DECIMALS) * pow10(u32::from(self.base_decimals)),
            ),
        };
        Ok(price.mul(&usd_per_supply))
    }

    /// Converts a USD FDV range into a `(lower, upper)` tick pair on the
    /// spacing grid.
    ///
    /// Fails on non‑positive values, on `fdv_min_usd >= fdv_max_usd`, and
    /// when both bounds snap onto the same tick (spacing too coarse for the
    /// requested range).
    pub fn fdv_band_to_ticks(&self, fdv_min_usd: f64, fdv_max_usd: f64) -> Result<(i32, i32), Error> {
        let min = usd_to_fixed("minimum FDV", fdv_min_usd)?;
        let max = usd_to_fixed("maximum FDV", fdv_max_usd)?;
        self.fdv_band_to_ticks_fixed(&min, &max)
    }

    /// [`MarketContext::fdv_band_to_ticks`] for fixed‑point USD bounds.
    pub fn fdv_band_to_ticks_fixed(
        &self,
        fdv_min_usd: &BigUint,
        fdv_max_usd: &BigUint,
    ) -> Result<(i32, i32), Error> {
        if fdv_min_usd >= fdv_max_usd {
            return Err(BandError::InvertedFdvRange {
                min_usd: format_usd_fixed(fdv_min_usd),
                max_usd: format_usd_fixed(fdv_max_usd),
            }
            .into());
        }
        let tick_lower = self.tick_for_fdv(fdv_min_usd)?;
        let tick_upper = self.tick_for_fdv(fdv_max_usd)?;
        if tick_lower >= tick_upper {
            return Err(BandError::DegenerateBand {
                tick_lower,
                tick_upper,
                tick_spacing: self.tick_spacing,
            }
            .into());
        }
        Ok((tick_lower, tick_upper))
    }
}
