//! Command-line interface for scripted farm sessions

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::algorithm::bitset::CropSet;
use crate::algorithm::growth::GrowthPolicy;
use crate::algorithm::session::{GardenSession, SessionConfig};
use crate::algorithm::tools::ToolAction;
use crate::io::configuration::{
    DEFAULT_REVERSION_CHANCE, DEFAULT_SEED, GIF_FRAME_DELAY_MS, MAP_HEIGHT, MAP_WIDTH,
    MAX_TICKS_PER_RUN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{SpriteSheets, export_frame_as_png, render_frame};
use crate::io::persistence::{read_state, save_grid};
use crate::io::progress::TickProgress;
use crate::io::visualization::TimelapseCapture;

#[derive(Parser, Debug)]
#[command(name = "farmtile")]
#[command(
    author,
    version,
    about = "Apply tools to a farm grid, grow crops and render the autotiled result"
)]
/// Command-line arguments for a scripted session
pub struct Cli {
    /// Saved grid to start from (a fresh grid is used if omitted or missing)
    #[arg(value_name = "STATE")]
    pub state: Option<PathBuf>,

    /// Tool action, applied in order (e.g. till:3,4 or plant:3,4:wheat)
    #[arg(short, long = "action", value_name = "ACTION")]
    pub actions: Vec<ToolAction>,

    /// Growth ticks to run after the actions
    #[arg(short, long, default_value_t = 0)]
    pub ticks: usize,

    /// Write the final grid as JSON
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Render the final grid to a PNG
    #[arg(short, long, value_name = "PNG", requires = "assets")]
    pub render: Option<PathBuf>,

    /// Directory holding the sprite sheets
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Record one frame per tick and export an animated GIF
    #[arg(long, value_name = "GIF", requires = "assets")]
    pub timelapse: Option<PathBuf>,

    /// Grid columns
    #[arg(short = 'w', long, default_value_t = MAP_WIDTH)]
    pub width: usize,

    /// Grid rows
    #[arg(short = 'H', long, default_value_t = MAP_HEIGHT)]
    pub height: usize,

    /// Random seed for farmland reversion
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Per-tick chance that empty farmland reverts to dirt
    #[arg(long, default_value_t = DEFAULT_REVERSION_CHANCE)]
    pub reversion_chance: f64,

    /// Clear every crop on harvest, including grapes
    #[arg(long)]
    pub no_perennials: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session parameters described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the reversion chance is not a probability.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let policy = if self.no_perennials {
            GrowthPolicy::new(CropSet::default(), self.reversion_chance)?
        } else {
            GrowthPolicy::new(GrowthPolicy::default().perennials, self.reversion_chance)?
        };

        Ok(SessionConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            policy,
        })
    }
}

/// Counts reported by a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Actions applied
    pub applied: usize,
    /// Actions rejected and skipped
    pub rejected: usize,
    /// Growth ticks run
    pub ticks: usize,
}

/// Drives one session from parsed arguments
pub struct SessionRunner {
    cli: Cli,
    session: GardenSession,
}

impl SessionRunner {
    /// Create the session described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments describe an invalid session.
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.ticks > MAX_TICKS_PER_RUN {
            return Err(invalid_parameter(
                "ticks",
                &cli.ticks,
                &format!("at most {MAX_TICKS_PER_RUN} ticks per run"),
            ));
        }
        let session = GardenSession::new(cli.session_config()?)?;
        Ok(Self { cli, session })
    }

    /// Session being driven
    pub const fn session(&self) -> &GardenSession {
        &self.session
    }

    /// Load, act, grow, then save and render as requested
    ///
    /// # Errors
    ///
    /// Returns an error if the saved state cannot be loaded, the sprite sheets
    /// cannot be read, or an output cannot be written. Rejected tool actions
    /// are logged and skipped.
    pub fn process(&mut self) -> Result<RunSummary> {
        if let Some(path) = self.cli.state.as_ref().filter(|path| path.exists()) {
            self.session.load_state(&read_state(path)?)?;
            info!(path = %path.display(), "loaded saved grid");
        }

        let mut summary = RunSummary::default();
        for action in &self.cli.actions {
            match self.session.apply(action.x, action.y, action.tool) {
                Ok(_) => summary.applied += 1,
                Err(err) => {
                    warn!(%action, %err, "skipping action");
                    summary.rejected += 1;
                }
            }
        }

        let sheets = self
            .cli
            .assets
            .as_deref()
            .map(SpriteSheets::load)
            .transpose()?;
        let (width, height) = self.session.grid().dimensions();

        let mut timelapse = match (&self.cli.timelapse, &sheets) {
            (Some(_), Some(sheets)) => {
                let mut capture = TimelapseCapture::new(self.cli.ticks + 1);
                capture.record_frame(
                    0,
                    render_frame(&self.session.draw_list(), sheets, width, height)?,
                );
                Some(capture)
            }
            _ => None,
        };

        let mut progress = if self.cli.should_show_progress() {
            TickProgress::new(self.cli.ticks)
        } else {
            TickProgress::hidden()
        };

        for tick in 1..=self.cli.ticks {
            let report = self.session.advance_growth();
            progress.tick(&report);
            if let (Some(capture), Some(sheets)) = (timelapse.as_mut(), &sheets) {
                capture.record_frame(
                    tick,
                    render_frame(&self.session.draw_list(), sheets, width, height)?,
                );
            }
        }
        progress.finish();
        summary.ticks = self.cli.ticks;

        if let Some(path) = &self.cli.save {
            save_grid(self.session.grid(), path)?;
            info!(path = %path.display(), "saved grid");
        }

        if let (Some(path), Some(sheets)) = (&self.cli.render, &sheets) {
            let frame = render_frame(&self.session.draw_list(), sheets, width, height)?;
            export_frame_as_png(&frame, path)?;
            info!(path = %path.display(), "rendered grid");
        }

        if let (Some(path), Some(capture)) = (&self.cli.timelapse, &timelapse) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(path = %path.display(), frames = capture.frame_count(), "exported timelapse");
        }

        let cells = self.session.summary();
        info!(
            applied = summary.applied,
            rejected = summary.rejected,
            ticks = summary.ticks,
            farmland = cells.farmland,
            planted = cells.planted,
            mature = cells.mature,
            "session finished"
        );

        Ok(summary)
    }
}
