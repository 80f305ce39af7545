//! Advisory read‑outs for operators. Nothing here feeds back into the
//! encoded configuration.

use crate::discovery::config::DiscoveryPoolConfig;
use crate::discovery::market::MarketContext;
use crate::discovery::shape::WAD;
use crate::error::{BandError, Error};
use crate::math::format::{format_rational, format_usd_from_rational};
use crate::math::math_helpers::u256_to_biguint;
use crate::math::tick_math::{snap_tick, tick_at_sqrt_ratio};
use crate::price::sqrt_price::{human_price_quote_per_base, target_sqrt_price_x96_from_market_cap};
use crate::price::usd::{USD_DECIMALS, format_usd_fixed, usd_to_fixed};
use num_bigint::BigInt;
use tracing::warn;

/// Where a target FDV lands relative to a built configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetMarketCapReport {
    /// Snapped tick of the target valuation.
    pub target_tick: i32,
    pub range_lower_tick: i32,
    pub range_upper_tick: i32,
    pub in_range: bool,
    /// Quote per base at the target, adaptive precision.
    pub target_price: String,
    pub target_fdv: String,
    pub warning: Option<String>,
}

/// Checks whether `target_fdv_usd` falls inside the ticks covered by
/// `config`, for display before submission.
pub fn analyze_target_market_cap(
    target_fdv_usd: f64,
    config: &DiscoveryPoolConfig,
    market: &MarketContext,
) -> Result<TargetMarketCapReport, Error> {
    let target = usd_to_fixed("target FDV", target_fdv_usd)?;
    let sqrt_price_x96 = target_sqrt_price_x96_from_market_cap(
        &market.total_supply,
        market.base_decimals,
        &target,
        USD_DECIMALS,
        &market.quote_token_usd,
        market.quote_decimals,
        true,
    )?;
    let target_tick = snap_tick(tick_at_sqrt_ratio(&sqrt_price_x96)?, market.tick_spacing)?;
    let price = human_price_quote_per_base(
        &sqrt_price_x96,
        market.base_decimals,
        market.quote_decimals,
        true,
    )?;

    let (range_lower_tick, range_upper_tick) = config.tick_range().ok_or(BandError::EmptyConfig)?;
    let in_range = (range_lower_tick..=range_upper_tick).contains(&target_tick);
    let target_fdv = format_usd_fixed(&target);

    let warning = if in_range {
        None
    } else {
        let side = if target_tick < range_lower_tick {
            "below"
        } else {
            "above"
        };
        warn!(
            target_tick,
            range_lower_tick, range_upper_tick, "target FDV outside discovery range"
        );
        Some(format!(
            "target FDV {target_fdv} (tick {target_tick}) is {side} the discovery range [{range_lower_tick}, {range_upper_tick}]"
        ))
    };

    Ok(TargetMarketCapReport {
        target_tick,
        range_lower_tick,
        range_upper_tick,
        in_range,
        target_price: format_rational(&price.numerator, &price.denominator, 8),
        target_fdv,
        warning,
    })
}

/// Human‑readable view of one band.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandSummary {
    pub index: usize,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub num_positions: u16,
    /// Percentage of the discovery supply, e.g. `"12.5%"`.
    pub supply_share: String,
    pub fdv_lower: String,
    pub fdv_upper: String,
}

/// Breaks a configuration (typically a decoded one) down band by band,
/// pricing each tick bound as a USD FDV.
///
/// Decoded payloads are not validated, so mismatched arrays surface as
/// [`BandError::ArrayLengthMismatch`] here.
pub fn describe_pool_config(
    config: &DiscoveryPoolConfig,
    market: &MarketContext,
) -> Result<Vec<BandSummary>, Error> {
    config.check_lengths()?;
    let percent_unit = BigInt::from(WAD / 100);
    let mut summaries = Vec::with_capacity(config.num_bands());

    for index in 0..config.num_bands() {
        let tick_lower = config.lower_ticks()[index];
        let tick_upper = config.upper_ticks()[index];
        let fdv_lower = market.fdv_at_tick(tick_lower)?;
        let fdv_upper = market.fdv_at_tick(tick_upper)?;
        let share = BigInt::from(u256_to_biguint(config.max_discovery_supply_shares()[index]));

        summaries.push(BandSummary {
            index,
            tick_lower,
            tick_upper,
            num_positions: config.num_discovery_positions()[index],
            supply_share: format!("{}%", format_rational(&share, &percent_unit, 6)),
            fdv_lower: format_usd_from_rational(&fdv_lower.numerator, &fdv_lower.denominator),
            fdv_upper: format_usd_from_rational(&fdv_upper.numerator, &fdv_upper.denominator),
        });
    }
    Ok(summaries)
}
