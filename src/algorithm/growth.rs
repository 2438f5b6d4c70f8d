//! Growth clock: one synchronous pass advancing every growing crop
//!
//! The pass is invoked on demand (a scheduler tick or a "skip day" button). A
//! cell grows when it is farmland, watered and planted; its stage rises by one
//! and saturates at the final stage. An optional policy reverts idle farmland
//! back to dirt with a fixed per-tick probability.

use rand::Rng;

use crate::algorithm::bitset::CropSet;
use crate::io::configuration::{DEFAULT_REVERSION_CHANCE, MAX_GROWTH_STAGE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::TileGrid;
use crate::spatial::tile::{CropId, Terrain, Tile};

/// Product-behaviour switches for growth and harvest
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPolicy {
    /// Crops that keep their id when harvested
    pub perennials: CropSet,
    /// Per-tick probability that empty farmland reverts to dirt
    pub reversion_chance: f64,
}

impl GrowthPolicy {
    /// Build a policy, validating the reversion probability
    ///
    /// # Errors
    ///
    /// Returns an error if `reversion_chance` is not a finite value in `[0, 1]`.
    pub fn new(perennials: CropSet, reversion_chance: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&reversion_chance) {
            return Err(invalid_parameter(
                "reversion_chance",
                &reversion_chance,
                &"must be a probability between 0 and 1",
            ));
        }
        Ok(Self {
            perennials,
            reversion_chance,
        })
    }

    /// Policy where every crop is cleared on harvest and farmland never reverts
    pub fn annual_only() -> Self {
        Self {
            perennials: CropSet::default(),
            reversion_chance: 0.0,
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            perennials: CropSet::from_crops(&[CropId::GRAPE]),
            reversion_chance: DEFAULT_REVERSION_CHANCE,
        }
    }
}

/// Counts from one growth pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// Cells whose stage increased
    pub grown: usize,
    /// Growing cells already at the final stage
    pub capped: usize,
    /// Empty farmland cells reverted to dirt
    pub reverted: usize,
}

/// Stage a growing crop reaches after one tick
pub const fn next_stage(growth_stage: u8) -> u8 {
    if growth_stage >= MAX_GROWTH_STAGE {
        MAX_GROWTH_STAGE
    } else {
        growth_stage + 1
    }
}

fn is_idle_farmland(tile: &Tile) -> bool {
    tile.terrain == Terrain::Farmland && tile.crop.is_none()
}

/// Advance every watered, planted cell by one stage
///
/// Reversion rolls are only drawn when the policy enables reversion, so a
/// zero-chance policy never consumes randomness.
pub fn advance_growth<R>(grid: &mut TileGrid, policy: &GrowthPolicy, rng: &mut R) -> GrowthReport
where
    R: Rng,
{
    let mut report = GrowthReport::default();
    let reversion_enabled = policy.reversion_chance > 0.0;

    grid.update_each(|_, _, tile| {
        if tile.is_growing() {
            if tile.growth_stage >= MAX_GROWTH_STAGE {
                report.capped += 1;
            } else {
                report.grown += 1;
            }
            tile.growth_stage = next_stage(tile.growth_stage);
        } else if reversion_enabled
            && is_idle_farmland(tile)
            && rng.random_bool(policy.reversion_chance.min(1.0))
        {
            *tile = Tile::dirt();
            report.reverted += 1;
        }
    });

    report
}
