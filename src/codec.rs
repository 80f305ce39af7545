//! ABI encoding of a [`DiscoveryPoolConfig`] into the deploy parameter
//! tuple `(uint8, address, int24[], int24[], uint16[], uint256[])`.

use crate::discovery::config::DiscoveryPoolConfig;
use crate::error::CodecError;
use alloy_primitives::aliases::I24;
use alloy_sol_types::{SolValue, sol};

/// Version written by [`encode_pool_config`].
pub const POOL_CONFIG_VERSION: u8 = 1;

sol! {
    /// Parameter tuple of the pool deploy call, field order is fixed.
    struct PoolConfigParams {
        uint8 version;
        address currency;
        int24[] tickLower;
        int24[] tickUpper;
        uint16[] numDiscoveryPositions;
        uint256[] maxDiscoverySupplyShare;
    }
}

/// A decoded payload together with the version it carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPoolConfig {
    pub version: u8,
    pub config: DiscoveryPoolConfig,
}

fn to_int24(ticks: &[i32]) -> Result<Vec<I24>, CodecError> {
    ticks
        .iter()
        .map(|&tick| I24::try_from(tick).map_err(|_| CodecError::TickOutOfRange(tick)))
        .collect()
}

/// Encodes `config` as version [`POOL_CONFIG_VERSION`].
///
/// The output equals Solidity's `abi.encode(version, currency, ...)`, with
/// no function selector and no outer tuple offset.
pub fn encode_pool_config(config: &DiscoveryPoolConfig) -> Result<Vec<u8>, CodecError> {
    encode_pool_config_with_version(POOL_CONFIG_VERSION, config)
}

pub fn encode_pool_config_with_version(
    version: u8,
    config: &DiscoveryPoolConfig,
) -> Result<Vec<u8>, CodecError> {
    let params = PoolConfigParams {
        version,
        currency: config.currency(),
        tickLower: to_int24(config.lower_ticks())?,
        tickUpper: to_int24(config.upper_ticks())?,
        numDiscoveryPositions: config.num_discovery_positions().to_vec(),
        maxDiscoverySupplyShare: config.max_discovery_supply_shares().to_vec(),
    };
    Ok(params.abi_encode_params())
}

/// Decodes a deploy payload back into its arrays, element for element.
///
/// The arrays are returned as found; band invariants are not re‑checked,
/// so a payload from elsewhere can still be inspected.
pub fn decode_pool_config(bytes: &[u8]) -> Result<DecodedPoolConfig, CodecError> {
    let params = PoolConfigParams::abi_decode_params(bytes)?;
    let config = DiscoveryPoolConfig::from_parts_unchecked(
        params.currency,
        params.tickLower.iter().map(|tick| tick.as_i32()).collect(),
        params.tickUpper.iter().map(|tick| tick.as_i32()).collect(),
        params.numDiscoveryPositions,
        params.maxDiscoverySupplyShare,
    );
    Ok(DecodedPoolConfig {
        version: params.version,
        config,
    })
}
