use crate::discovery::market::MarketContext;
use crate::discovery::shape::{
    CLANKER_MAX_TARGET_FDV_USD, CLANKER_MIN_TARGET_FDV_USD, CLANKER_POSITIONS,
};
use crate::error::{Error, PriceError};
use crate::price::usd::usd_to_fixed;
use tracing::debug;

/// One protocol‑deployer liquidity position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClankerPoolPosition {
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Weight in basis points; the five positions sum to 10000.
    pub position_bps: u16,
}

/// Clamps a target FDV into the preset's safe range.
///
/// Infinity clamps to the ceiling; NaN and non‑positive values are
/// rejected since they carry no usable target.
pub fn clamp_clanker_target_fdv(target_fdv_usd: f64) -> Result<f64, PriceError> {
    if target_fdv_usd.is_nan() || target_fdv_usd <= 0.0 {
        return Err(PriceError::InvalidUsdValue {
            field: "target FDV",
            value: target_fdv_usd,
        });
    }
    Ok(target_fdv_usd.clamp(CLANKER_MIN_TARGET_FDV_USD, CLANKER_MAX_TARGET_FDV_USD))
}

/// Builds the five nested Clanker positions around a target FDV.
///
/// Positions 2/3 and 4/5 share their upper tick. The target is clamped
/// first, so dust and astronomically large targets still yield five
/// well‑ordered positions.
pub fn build_clanker_positions(
    target_fdv_usd: f64,
    market: &MarketContext,
) -> Result<[ClankerPoolPosition; 5], Error> {
    let clamped = clamp_clanker_target_fdv(target_fdv_usd)?;
    if clamped != target_fdv_usd {
        debug!(
            requested = target_fdv_usd,
            clamped, "clamped clanker target FDV"
        );
    }
    let base = usd_to_fixed("target FDV", clamped)?;

    let mut positions = [ClankerPoolPosition {
        tick_lower: 0,
        tick_upper: 0,
        position_bps: 0,
    }; 5];
    for (position, spec) in positions.iter_mut().zip(CLANKER_POSITIONS.iter()) {
        let min = &base * spec.fdv.min_multiplier;
        let max = &base * spec.fdv.max_multiplier;
        let (tick_lower, tick_upper) = market.fdv_band_to_ticks_fixed(&min, &max)?;
        *position = ClankerPoolPosition {
            tick_lower,
            tick_upper,
            position_bps: spec.position_bps,
        };
    }
    debug!(?positions, "built clanker positions");
    Ok(positions)
}
