//! Progress display for multi-generation automaton runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generations computed out of a requested total
///
/// A hidden tracker keeps counting but draws nothing, so callers do not need
/// to branch on quiet mode.
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Visible progress bar for `total` generations
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message("generations");
        Self { bar }
    }

    /// Tracker that never draws
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Tracker drawn unless `quiet`
    pub fn for_run(total: usize, quiet: bool) -> Self {
        if quiet {
            Self::hidden(total)
        } else {
            Self::new(total)
        }
    }

    /// Record one more computed generation
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Generations recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
