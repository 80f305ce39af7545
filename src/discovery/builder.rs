use crate::discovery::config::DiscoveryPoolConfig;
use crate::discovery::market::MarketContext;
use crate::discovery::shape::{BPS_DENOMINATOR, PoolShape, TARGET_FDV_SPREAD_BPS};
use crate::error::{Error, PriceError};
use crate::price::usd::{format_usd_fixed, usd_to_fixed};
use alloy_primitives::{Address, U256};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

/// Builds the discovery bands of `shape` starting at `min_fdv_usd`.
///
/// Each band covers `[min_fdv * min_multiplier, min_fdv * max_multiplier]`.
/// Once every band has its ticks, all upper ticks after the first are
/// lifted to the topmost band's ceiling, so the first band discovers on
/// its own and the rest share one wide range.
pub fn build_discovery_config(
    currency: Address,
    min_fdv_usd: f64,
    shape: PoolShape,
    market: &MarketContext,
) -> Result<DiscoveryPoolConfig, Error> {
    let base = usd_to_fixed("minimum FDV", min_fdv_usd)?;
    build_from_base_fdv(currency, &base, shape, market)
}

/// Like [`build_discovery_config`], but anchored on a target FDV: the base
/// FDV sits [`TARGET_FDV_SPREAD_BPS`] below the target.
pub fn build_discovery_config_from_target(
    currency: Address,
    target_fdv_usd: f64,
    shape: PoolShape,
    market: &MarketContext,
) -> Result<DiscoveryPoolConfig, Error> {
    let target = usd_to_fixed("target FDV", target_fdv_usd)?;
    let base = target * (BPS_DENOMINATOR - TARGET_FDV_SPREAD_BPS) / BPS_DENOMINATOR;
    if base.is_zero() {
        return Err(PriceError::InvalidUsdValue {
            field: "target FDV",
            value: target_fdv_usd,
        }
        .into());
    }
    build_from_base_fdv(currency, &base, shape, market)
}

/// [`build_discovery_config`] for a fixed‑point base FDV.
pub fn build_from_base_fdv(
    currency: Address,
    base_fdv_usd: &BigUint,
    shape: PoolShape,
    market: &MarketContext,
) -> Result<DiscoveryPoolConfig, Error> {
    let bands = shape.bands();
    let mut lower_ticks = Vec::with_capacity(bands.len());
    let mut upper_ticks = Vec::with_capacity(bands.len());
    let mut num_positions = Vec::with_capacity(bands.len());
    let mut shares = Vec::with_capacity(bands.len());

    for spec in bands {
        let min = base_fdv_usd * spec.fdv.min_multiplier;
        let max = base_fdv_usd * spec.fdv.max_multiplier;
        let (tick_lower, tick_upper) = market.fdv_band_to_ticks_fixed(&min, &max)?;
        lower_ticks.push(tick_lower);
        upper_ticks.push(tick_upper);
        num_positions.push(spec.num_positions);
        shares.push(U256::from(spec.supply_share));
    }

    if let Some(&ceiling) = upper_ticks.last() {
        for upper in upper_ticks.iter_mut().skip(1) {
            *upper = ceiling;
        }
    }

    let config = DiscoveryPoolConfig::new(currency, lower_ticks, upper_ticks, num_positions, shares)?;
    debug!(
        ?shape,
        base_fdv = %format_usd_fixed(base_fdv_usd),
        lower_ticks = ?config.lower_ticks(),
        upper_ticks = ?config.upper_ticks(),
        "built discovery pool config"
    );
    Ok(config)
}
