//! FDV‑driven discovery liquidity for Uniswap V3–style pools, in exact
//! integer arithmetic.
//!
//! This crate exposes:
//! - Precision helpers (`math::*`): integer square roots, rationals and
//!   decimal/USD formatting.
//! - Price conversions (`price::*`) between sqrt prices, human prices and
//!   USD market caps.
//! - Discovery band builders (`discovery::*`) for content, creator and
//!   Clanker launches.
//! - The deploy payload codec (`codec`).
//!
//! # Examples
//!
//! ## Building and encoding a content coin config
//! ```no_run
//! use clmm_discovery_math::{
//!     codec::{decode_pool_config, encode_pool_config},
//!     discovery::{MarketContext, PoolShape, build_discovery_config},
//!     Address,
//! };
//!
//! // 1B tokens quoted in a $2,500 currency, tick spacing 200.
//! let market = MarketContext::content_coin(2_500.0).unwrap();
//! let config =
//!     build_discovery_config(Address::ZERO, 25_000.0, PoolShape::Content, &market).unwrap();
//!
//! let bytes = encode_pool_config(&config).unwrap();
//! assert_eq!(decode_pool_config(&bytes).unwrap().config, config);
//! ```
//!
//! ## Clanker positions
//! ```no_run
//! use clmm_discovery_math::discovery::{MarketContext, build_clanker_positions};
//!
//! let market = MarketContext::clanker_token(3_000.0).unwrap();
//! let positions = build_clanker_positions(30_000.0, &market).unwrap();
//! let total: u16 = positions.iter().map(|p| p.position_bps).sum();
//! assert_eq!(total, 10_000);
//! ```

pub use alloy_primitives::{Address, U256};

pub mod codec;
pub mod discovery;
pub mod error;
pub mod math;
pub mod price;

pub use codec::{DecodedPoolConfig, decode_pool_config, encode_pool_config};
pub use discovery::{DiscoveryPoolConfig, MarketContext, PoolShape};
pub use error::Error;

const U256_127: U256 = U256::from_limbs([127, 0, 0, 0]);
const U256_128: U256 = U256::from_limbs([128, 0, 0, 0]);

pub const RESOLUTION: u8 = 96;
/// Bit shift that turns a squared Q64.96 sqrt price into a plain ratio.
pub const Q192_BITS: u32 = 2 * RESOLUTION as u32;
