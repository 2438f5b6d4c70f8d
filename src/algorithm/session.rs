//! Session controller owning the grid
//!
//! The session is the single logical actor that mutates the grid: it applies
//! tools, runs growth ticks, loads and saves state, and lends the grid to the
//! compositor for redraws. Observers subscribe to a channel of
//! [`GardenEvent`]s instead of registering callbacks on the grid.

use crossbeam_channel::{Receiver, Sender, unbounded};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::algorithm::compositor::{DrawInstruction, compose};
use crate::algorithm::growth::{GrowthPolicy, GrowthReport, advance_growth};
use crate::algorithm::tools::{Tool, ToolOutcome, apply_tool};
use crate::io::configuration::{DEFAULT_SEED, MAP_HEIGHT, MAP_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::io::persistence::{decode_grid, encode_grid};
use crate::spatial::grid::TileGrid;
use crate::spatial::tile::{CropId, Terrain, Tile};

/// Session parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Grid columns
    pub width: usize,
    /// Grid rows
    pub height: usize,
    /// Seed for reversion rolls
    pub seed: u64,
    /// Growth and harvest policy
    pub policy: GrowthPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            seed: DEFAULT_SEED,
            policy: GrowthPolicy::default(),
        }
    }
}

/// Change notification for UI and persistence observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GardenEvent {
    /// A tool changed one cell
    TileChanged {
        /// Column
        x: i32,
        /// Row
        y: i32,
        /// Previous tile
        before: Tile,
        /// New tile
        after: Tile,
    },
    /// A mature crop was collected
    CropHarvested {
        /// Column
        x: i32,
        /// Row
        y: i32,
        /// Crop collected
        crop: CropId,
    },
    /// A growth tick completed
    GrowthAdvanced(GrowthReport),
    /// The grid was replaced from saved state
    StateLoaded,
}

/// Counts of notable cells, for logs and status lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSummary {
    /// Farmland cells
    pub farmland: usize,
    /// Watered farmland cells
    pub watered: usize,
    /// Planted cells
    pub planted: usize,
    /// Planted cells ready to harvest
    pub mature: usize,
}

/// Owns the grid and applies every mutation to it
pub struct GardenSession {
    grid: TileGrid,
    policy: GrowthPolicy,
    rng: StdRng,
    subscribers: Vec<Sender<GardenEvent>>,
    ticks: usize,
}

impl GardenSession {
    /// Start a session on a fresh grid
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension is zero.
    pub fn new(config: SessionConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{}x{}", config.width, config.height),
                &"grid must have at least one cell",
            ));
        }

        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            perennials = %config.policy.perennials,
            reversion_chance = config.policy.reversion_chance,
            "starting garden session"
        );

        Ok(Self {
            grid: TileGrid::new(config.width, config.height),
            policy: config.policy,
            rng: StdRng::seed_from_u64(config.seed),
            subscribers: Vec::new(),
            ticks: 0,
        })
    }

    /// Borrow the grid for reads
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Active growth policy
    pub const fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Growth ticks applied since the session started
    pub const fn ticks(&self) -> usize {
        self.ticks
    }

    /// Open a new event stream
    pub fn subscribe(&mut self) -> Receiver<GardenEvent> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    // Dropped receivers are pruned on the next send
    fn emit(&mut self, event: &GardenEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Apply a tool to one cell
    ///
    /// # Errors
    ///
    /// Returns [`crate::FarmError::ToolRejected`] for an illegal transition; the
    /// grid is unchanged and no event is sent.
    pub fn apply(&mut self, x: i32, y: i32, tool: Tool) -> Result<ToolOutcome> {
        let outcome = match apply_tool(&mut self.grid, x, y, tool, &self.policy.perennials) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(x, y, tool = tool.name(), %err, "tool rejected");
                return Err(err);
            }
        };

        debug!(x, y, tool = tool.name(), terrain = %outcome.after.terrain, "tool applied");
        self.emit(&GardenEvent::TileChanged {
            x,
            y,
            before: outcome.before,
            after: outcome.after,
        });
        if let Some(crop) = outcome.harvested {
            info!(x, y, %crop, "crop harvested");
            self.emit(&GardenEvent::CropHarvested { x, y, crop });
        }

        Ok(outcome)
    }

    /// Run one growth pass over the whole grid
    pub fn advance_growth(&mut self) -> GrowthReport {
        let report = advance_growth(&mut self.grid, &self.policy, &mut self.rng);
        self.ticks += 1;
        debug!(
            tick = self.ticks,
            grown = report.grown,
            capped = report.capped,
            reverted = report.reverted,
            "growth advanced"
        );
        self.emit(&GardenEvent::GrowthAdvanced(report));
        report
    }

    /// Draw list for the current grid
    pub fn draw_list(&self) -> Vec<DrawInstruction> {
        compose(&self.grid)
    }

    /// Replace the grid from saved JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the payload fails to parse or validate; the current
    /// grid is kept exactly as it was.
    pub fn load_state(&mut self, json: &str) -> Result<()> {
        let (width, height) = self.grid.dimensions();
        match decode_grid(json, width, height) {
            Ok(grid) => {
                self.grid = grid;
                info!(width, height, "state loaded");
                self.emit(&GardenEvent::StateLoaded);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "state rejected, keeping current grid");
                Err(err)
            }
        }
    }

    /// Serialize the current grid
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn save_state(&self) -> Result<String> {
        encode_grid(&self.grid)
    }

    /// Tally farmland, water and crops on the grid
    pub fn summary(&self) -> GridSummary {
        GridSummary {
            farmland: self.grid.count(|tile| tile.terrain == Terrain::Farmland),
            watered: self.grid.count(|tile| tile.is_farmland() && tile.watered),
            planted: self.grid.count(|tile| tile.crop.is_some()),
            mature: self.grid.count(Tile::is_mature),
        }
    }
}
