//! Conversions between sqrt prices, human prices and USD valuations.

pub mod sqrt_price;
pub mod tick_quote;
pub mod usd;

pub use sqrt_price::{
    human_price_quote_per_base, price_ratio_from_sqrt_x96, price1_per0_from_sqrt_x96,
    sqrt_price_x96_from_rational, target_sqrt_price_x96_from_market_cap,
};
pub use tick_quote::convert_tick_quote;
pub use usd::{USD_DECIMALS, format_usd_fixed, usd_to_fixed};
