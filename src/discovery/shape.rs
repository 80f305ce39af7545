//! Fixed multiplier tables for each pool shape.
//!
//! Every band is described relative to a base FDV: a band with
//! `min_multiplier = 2, max_multiplier = 4` covers `[2 * base, 4 * base]`.

/// `1e18`, the fixed‑point unit of a supply share (100%).
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Target‑FDV mode places the base FDV this many basis points below the target.
pub const TARGET_FDV_SPREAD_BPS: u16 = 5_000;

/// Positions minted inside each discovery band.
pub const DEFAULT_POSITIONS_PER_BAND: u16 = 11;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FdvBand {
    pub min_multiplier: u32,
    pub max_multiplier: u32,
}

impl FdvBand {
    pub const fn new(min_multiplier: u32, max_multiplier: u32) -> Self {
        Self {
            min_multiplier,
            max_multiplier,
        }
    }
}

/// One row of a discovery table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandSpec {
    pub fdv: FdvBand,
    pub num_positions: u16,
    /// Share of the discovery supply, `WAD` = 100%.
    pub supply_share: u64,
}

const fn band(min: u32, max: u32, share_percent: u64) -> BandSpec {
    BandSpec {
        fdv: FdvBand::new(min, max),
        num_positions: DEFAULT_POSITIONS_PER_BAND,
        supply_share: share_percent * (WAD / 100),
    }
}

const CONTENT_BANDS: [BandSpec; 4] = [
    band(1, 2, 5),
    band(2, 4, 10),
    band(4, 8, 15),
    band(8, 16, 20),
];

const CONTENT_COMPACT_BANDS: [BandSpec; 3] = [band(1, 2, 10), band(2, 4, 15), band(4, 8, 25)];

const CREATOR_BANDS: [BandSpec; 3] = [band(1, 3, 10), band(3, 6, 15), band(6, 10, 20)];

/// Which discovery table a launch uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolShape {
    /// Content coins: four doubling bands.
    Content,
    /// Content coins with the top band dropped.
    ContentCompact,
    /// Creator coins: three bands with gentler growth.
    Creator,
}

impl PoolShape {
    pub const fn bands(self) -> &'static [BandSpec] {
        match self {
            PoolShape::Content => &CONTENT_BANDS,
            PoolShape::ContentCompact => &CONTENT_COMPACT_BANDS,
            PoolShape::Creator => &CREATOR_BANDS,
        }
    }
}

/// One of the protocol‑deployer (Clanker) positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClankerPositionSpec {
    pub fdv: FdvBand,
    pub position_bps: u16,
}

/// Five nested positions: 2 and 3 share a ceiling, as do 4 and 5.
pub const CLANKER_POSITIONS: [ClankerPositionSpec; 5] = [
    ClankerPositionSpec {
        fdv: FdvBand::new(1, 5),
        position_bps: 1_000,
    },
    ClankerPositionSpec {
        fdv: FdvBand::new(5, 2_000),
        position_bps: 5_000,
    },
    ClankerPositionSpec {
        fdv: FdvBand::new(15, 2_000),
        position_bps: 1_500,
    },
    ClankerPositionSpec {
        fdv: FdvBand::new(2_000, 50_000),
        position_bps: 2_000,
    },
    ClankerPositionSpec {
        fdv: FdvBand::new(7_500, 50_000),
        position_bps: 500,
    },
];

/// Clanker target FDVs are clamped into this USD range.
pub const CLANKER_MIN_TARGET_FDV_USD: f64 = 1_000.0;
pub const CLANKER_MAX_TARGET_FDV_USD: f64 = 1_000_000_000_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(bands: &[BandSpec]) {
        assert!(!bands.is_empty());
        let mut total = 0u64;
        for (i, spec) in bands.iter().enumerate() {
            assert!(spec.fdv.min_multiplier < spec.fdv.max_multiplier);
            if i > 0 {
                assert!(spec.fdv.min_multiplier > bands[i - 1].fdv.min_multiplier);
            }
            total += spec.supply_share;
        }
        assert!(total <= WAD);
    }

    #[test]
    fn discovery_tables_are_well_formed() {
        for shape in [PoolShape::Content, PoolShape::ContentCompact, PoolShape::Creator] {
            assert_well_formed(shape.bands());
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(PoolShape::Content.bands().len(), 4);
        assert_eq!(PoolShape::ContentCompact.bands().len(), 3);
        assert_eq!(PoolShape::Creator.bands().len(), 3);
        assert_eq!(PoolShape::Creator.bands()[2].fdv, FdvBand::new(6, 10));
    }

    #[test]
    fn clanker_weights_sum_to_full_bps() {
        let total: u16 = CLANKER_POSITIONS.iter().map(|p| p.position_bps).sum();
        assert_eq!(total, BPS_DENOMINATOR);
    }

    #[test]
    fn clanker_positions_nest() {
        assert_eq!(CLANKER_POSITIONS[1].fdv.max_multiplier, CLANKER_POSITIONS[2].fdv.max_multiplier);
        assert_eq!(CLANKER_POSITIONS[3].fdv.max_multiplier, CLANKER_POSITIONS[4].fdv.max_multiplier);
        assert!(CLANKER_MIN_TARGET_FDV_USD < CLANKER_MAX_TARGET_FDV_USD);
    }
}
