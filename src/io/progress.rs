//! Progress display for long growth runs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::growth::GrowthReport;
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD_TICKS};

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Ticks: [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the growth ticks of one run
///
/// Short runs below [`PROGRESS_THRESHOLD_TICKS`] get no bar at all.
pub struct TickProgress {
    bar: Option<ProgressBar>,
    grown: usize,
    reverted: usize,
}

impl TickProgress {
    /// Create a tracker for `total_ticks` ticks
    pub fn new(total_ticks: usize) -> Self {
        let bar = (total_ticks >= PROGRESS_THRESHOLD_TICKS).then(|| {
            let bar = ProgressBar::new(total_ticks as u64);
            bar.set_style(TICK_STYLE.clone());
            bar
        });
        Self {
            bar,
            grown: 0,
            reverted: 0,
        }
    }

    /// A tracker that never draws
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            grown: 0,
            reverted: 0,
        }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one completed tick
    pub fn tick(&mut self, report: &GrowthReport) {
        self.grown += report.grown;
        self.reverted += report.reverted;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("grown {} reverted {}", self.grown, self.reverted));
        }
    }

    /// Totals accumulated so far as (grown, reverted)
    pub const fn totals(&self) -> (usize, usize) {
        (self.grown, self.reverted)
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
