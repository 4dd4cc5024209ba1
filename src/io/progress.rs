//! Progress display driven by pipeline events
//!
//! One bar, one tick per pipeline milestone. Percentages shown are purely
//! presentational; the pipeline only guarantees the five named events.

use crate::io::configuration::PIPELINE_STAGES;
use crate::mosaic::pipeline::ProgressEvent;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Renders pipeline milestones as a single stage progress bar
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create the stage bar, initially at zero of the five milestones
    pub fn new() -> Self {
        let bar = ProgressBar::new(PIPELINE_STAGES);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Advance the bar for a completed milestone
    pub fn observe(&self, event: &ProgressEvent) {
        let message = match event {
            ProgressEvent::LibraryBuilt {
                candidates,
                skipped,
            } => format!("library built ({candidates} candidates, {skipped} skipped)"),
            ProgressEvent::TargetPartitioned { rows, cols } => {
                format!("target partitioned ({rows}x{cols} tiles)")
            }
            ProgressEvent::SamplingComplete { tiles } => {
                format!("sampling done ({tiles} tiles)")
            }
            ProgressEvent::MatchingComplete { tiles } => {
                format!("matching done ({tiles} tiles)")
            }
            ProgressEvent::AssemblyComplete { width, height } => {
                format!("assembled {width}x{height}")
            }
        };
        self.bar.set_message(message);
        self.bar.inc(1);
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_with_message("mosaic complete");
    }
}
