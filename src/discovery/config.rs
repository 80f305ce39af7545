use crate::discovery::shape::WAD;
use crate::error::BandError;
use alloy_primitives::{Address, U256};

/// A discovery liquidity configuration: one entry per band in each of the
/// parallel arrays.
///
/// Built once and never mutated; the fields are only reachable through
/// accessors. [`DiscoveryPoolConfig::new`] enforces the band invariants,
/// while decoding keeps whatever the bytes contained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryPoolConfig {
    currency: Address,
    lower_ticks: Vec<i32>,
    upper_ticks: Vec<i32>,
    num_discovery_positions: Vec<u16>,
    max_discovery_supply_shares: Vec<U256>,
}

impl DiscoveryPoolConfig {
    /// Validates and assembles a configuration.
    ///
    /// Requires equal, non‑empty arrays, strictly increasing lower ticks,
    /// `lower < upper` per band, and supply shares summing to at most `1e18`.
    pub fn new(
        currency: Address,
        lower_ticks: Vec<i32>,
        upper_ticks: Vec<i32>,
        num_discovery_positions: Vec<u16>,
        max_discovery_supply_shares: Vec<U256>,
    ) -> Result<Self, BandError> {
        check_lengths(
            &lower_ticks,
            &upper_ticks,
            &num_discovery_positions,
            &max_discovery_supply_shares,
        )?;

        for (index, pair) in lower_ticks.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(BandError::NonIncreasingLowerTicks {
                    index: index + 1,
                    tick: pair[1],
                });
            }
        }
        for (&tick_lower, &tick_upper) in lower_ticks.iter().zip(&upper_ticks) {
            if tick_lower >= tick_upper {
                return Err(BandError::DegenerateBand {
                    tick_lower,
                    tick_upper,
                    tick_spacing: 0,
                });
            }
        }

        let total = max_discovery_supply_shares
            .iter()
            .try_fold(U256::ZERO, |acc, share| acc.checked_add(*share));
        match total {
            Some(total) if total <= U256::from(WAD) => {}
            Some(total) => return Err(BandError::SupplySharesExceedOne(total.to_string())),
            None => return Err(BandError::SupplySharesExceedOne("> 2^256".to_string())),
        }

        Ok(Self {
            currency,
            lower_ticks,
            upper_ticks,
            num_discovery_positions,
            max_discovery_supply_shares,
        })
    }

    /// Assembles a configuration exactly as given, for decoded payloads.
    pub(crate) fn from_parts_unchecked(
        currency: Address,
        lower_ticks: Vec<i32>,
        upper_ticks: Vec<i32>,
        num_discovery_positions: Vec<u16>,
        max_discovery_supply_shares: Vec<U256>,
    ) -> Self {
        Self {
            currency,
            lower_ticks,
            upper_ticks,
            num_discovery_positions,
            max_discovery_supply_shares,
        }
    }

    pub fn currency(&self) -> Address {
        self.currency
    }

    pub fn lower_ticks(&self) -> &[i32] {
        &self.lower_ticks
    }

    pub fn upper_ticks(&self) -> &[i32] {
        &self.upper_ticks
    }

    pub fn num_discovery_positions(&self) -> &[u16] {
        &self.num_discovery_positions
    }

    pub fn max_discovery_supply_shares(&self) -> &[U256] {
        &self.max_discovery_supply_shares
    }

    pub fn num_bands(&self) -> usize {
        self.lower_ticks.len()
    }

    /// Fails when the parallel arrays disagree in length or are empty,
    /// which only a decoded payload can produce.
    pub fn check_lengths(&self) -> Result<(), BandError> {
        check_lengths(
            &self.lower_ticks,
            &self.upper_ticks,
            &self.num_discovery_positions,
            &self.max_discovery_supply_shares,
        )
    }

    /// Lowest lower tick and highest upper tick across all bands.
    pub fn tick_range(&self) -> Option<(i32, i32)> {
        let lower = self.lower_ticks.iter().min()?;
        let upper = self.upper_ticks.iter().max()?;
        Some((*lower, *upper))
    }
}

fn check_lengths(
    lower_ticks: &[i32],
    upper_ticks: &[i32],
    num_discovery_positions: &[u16],
    max_discovery_supply_shares: &[U256],
) -> Result<(), BandError> {
    let len = lower_ticks.len();
    if upper_ticks.len() != len
        || num_discovery_positions.len() != len
        || max_discovery_supply_shares.len() != len
    {
        return Err(BandError::ArrayLengthMismatch {
            lower: len,
            upper: upper_ticks.len(),
            positions: num_discovery_positions.len(),
            shares: max_discovery_supply_shares.len(),
        });
    }
    if len == 0 {
        return Err(BandError::EmptyConfig);
    }
    Ok(())
}
