//! Discovery band construction: FDV ranges to ticks, shape tables and the
//! Clanker preset.

pub mod analysis;
pub mod builder;
pub mod clanker;
pub mod config;
pub mod market;
pub mod shape;

pub use analysis::{BandSummary, TargetMarketCapReport, analyze_target_market_cap, describe_pool_config};
pub use builder::{build_discovery_config, build_discovery_config_from_target, build_from_base_fdv};
pub use clanker::{ClankerPoolPosition, build_clanker_positions, clamp_clanker_target_fdv};
pub use config::DiscoveryPoolConfig;
pub use market::MarketContext;
pub use shape::PoolShape;
