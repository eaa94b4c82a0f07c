//! Progress display for batch compositing over the preset catalog

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many presets of a batch have been handled
///
/// When hidden, every call is a no-op so callers don't need to branch on
/// `--quiet`.
pub struct BatchProgress {
    bar: ProgressBar,
    written: usize,
    skipped: usize,
}

impl BatchProgress {
    /// Create a visible progress bar over `total` presets
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix("Presets");
        Self {
            bar,
            written: 0,
            skipped: 0,
        }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self {
            bar,
            written: 0,
            skipped: 0,
        }
    }

    /// Show which preset is being composited
    pub fn start(&self, id: &str) {
        self.bar.set_message(id.to_string());
    }

    /// Record a composited and saved preset
    pub fn complete(&mut self) {
        self.written += 1;
        self.bar.inc(1);
    }

    /// Record a preset whose output already existed
    pub fn skip(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Number of presets written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Number of presets skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Position of the bar, i.e. presets handled either way
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
