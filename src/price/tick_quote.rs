use crate::error::PriceError;
use crate::math::tick_math::{snap_tick_f64, validate_tick_spacing};

/// `ln(1.0001)`, the log of one tick step.
const LN_TICK_BASE: f64 = 0.000_099_995_000_333_308_34;

fn positive_usd(field: &'static str, value: f64) -> Result<f64, PriceError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PriceError::InvalidUsdValue { field, value })
    }
}

/// Re‑expresses `tick`, computed against a quote token worth
/// `from_quote_usd`, against a quote token worth `to_quote_usd`, snapped
/// to `tick_spacing`.
///
/// Shifting the quote scales every price by `from / to`, i.e. moves the
/// tick by `ln(from / to) / ln(1.0001)`. The logarithm runs in `f64`
/// because both USD inputs are oracle floats and the result lands on the
/// spacing grid; the float error stays below `1e-9` ticks across the
/// whole tick range.
pub fn convert_tick_quote(
    tick: i32,
    from_quote_usd: f64,
    to_quote_usd: f64,
    tick_spacing: i32,
) -> Result<i32, PriceError> {
    let from = positive_usd("source quote USD price", from_quote_usd)?;
    let to = positive_usd("target quote USD price", to_quote_usd)?;
    validate_tick_spacing(tick_spacing)?;

    let delta = (from / to).ln() / LN_TICK_BASE;
    snap_tick_f64(f64::from(tick) + delta, tick_spacing)
}
