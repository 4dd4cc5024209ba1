//! Command-line interface for mosaic generation
//!
//! The runner keeps the interface thread free: the pipeline executes on a
//! worker thread and streams its milestone events back over a channel, where
//! they drive the progress display. The composite only touches the
//! filesystem after the worker has handed it back, so an export failure never
//! loses the generated image.

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_TARGET_LONG_SIDE, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX};
use crate::io::error::{Result, computation_error};
use crate::io::image::export_mosaic;
use crate::io::progress::ProgressManager;
use crate::mosaic::pipeline::{MosaicConfig, MosaicPipeline, ProgressEvent};
use clap::Parser;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Command-line arguments for the mosaic generator
#[derive(Parser)]
#[command(name = "mosaicry")]
#[command(
    author,
    version,
    about = "Reproduce an image as a mosaic of small tiles matched by average color"
)]
pub struct Cli {
    /// Target image to reproduce as a mosaic
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory searched recursively for candidate tiles (.jpg/.jpeg)
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Side length of each square tile, in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Width the target is resized to before partitioning, in pixels
    #[arg(short, long, default_value_t = DEFAULT_TARGET_LONG_SIDE)]
    pub long_side: u32,

    /// Output path (defaults to <target stem>_mosaic.jpg next to the target)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for the color sampler
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Destination for the composite image
    ///
    /// Explicit `--output` wins; otherwise the path is derived from the
    /// target as `<stem>_mosaic.jpg` in the target's directory.
    pub fn output_path(&self) -> PathBuf {
        if let Some(ref output) = self.output {
            return output.clone();
        }

        let stem = self.target.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.jpg", stem.to_string_lossy());

        if let Some(parent) = self.target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Runs one mosaic generation on a worker thread with progress reporting
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the mosaic and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns any pipeline error, `Computation` if the worker thread
    /// panicked, and `ImageExport` if the final write fails.
    // Allow print for user-facing summary output
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let config = MosaicConfig {
            tile_size: self.cli.tile_size,
            target_long_side: self.cli.long_side,
            seed: self.cli.seed,
        };
        let mut pipeline = MosaicPipeline::new(config)?;

        let progress = self.cli.should_show_progress().then(ProgressManager::new);
        let (sender, receiver) = mpsc::channel::<ProgressEvent>();

        let target = self.cli.target.clone();
        let library = self.cli.library.clone();
        let worker = thread::spawn(move || {
            pipeline.run_from_paths(&target, &library, move |event| {
                let _ = sender.send(event);
            })
        });

        // The channel closes when the worker drops its sender
        let mut skipped = 0;
        for event in receiver {
            if let ProgressEvent::LibraryBuilt { skipped: count, .. } = event {
                skipped = count;
            }
            if let Some(ref bar) = progress {
                bar.observe(&event);
            }
        }

        let mosaic = worker
            .join()
            .map_err(|_| computation_error("mosaic worker", &"worker thread panicked"))??;

        if let Some(ref bar) = progress {
            bar.finish();
        }

        let output_path = self.cli.output_path();
        export_mosaic(&mosaic, &output_path)?;

        if !self.cli.quiet {
            if skipped > 0 {
                eprintln!("Skipped {skipped} unreadable candidate images");
            }
            eprintln!("Wrote {}", output_path.display());
        }

        Ok(())
    }
}
