//! Staged end-to-end mosaic generation
//!
//! The pipeline runs library build, target preparation, sampling, matching,
//! and assembly as pure stages over owned data, emitting one progress event
//! per completed milestone. It holds the seeded random source for every
//! sampling call, so a fixed seed makes a whole run reproducible. A
//! cancellation token is checked between stages and per tile during matching;
//! generation itself has no internal parallelism, but callers are expected to
//! run it off the interface thread (see `io::cli`).

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{load_rgb, resize_to_long_side};
use crate::mosaic::compose;
use crate::mosaic::library::CandidateLibrary;
use crate::mosaic::matcher::select_tiles;
use crate::mosaic::partition::{GridGeometry, partition};
use crate::mosaic::sampler::{SampleRegion, estimate_region_color};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Configuration surface of the mosaic core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Side length of every tile (candidate and target), in pixels
    pub tile_size: u32,
    /// Width the target image is resized to before partitioning
    pub target_long_side: u32,
    /// Seed for the color sampler's random source
    pub seed: u64,
}

impl MosaicConfig {
    fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"tile size must be at least 1",
            ));
        }
        if self.target_long_side == 0 {
            return Err(invalid_parameter(
                "target_long_side",
                &self.target_long_side,
                &"target long side must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Coarse progress milestones emitted once per completed stage
///
/// The milestones are contractual; any notion of percentage is up to the
/// listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Candidate library is ready
    LibraryBuilt {
        /// Number of usable candidates
        candidates: usize,
        /// Number of source files that failed to decode
        skipped: usize,
    },
    /// Target image resized and partitioned into the tile grid
    TargetPartitioned {
        /// Grid rows
        rows: u32,
        /// Grid columns
        cols: u32,
    },
    /// Representative colors estimated for every target tile
    SamplingComplete {
        /// Number of sampled tiles
        tiles: usize,
    },
    /// Every target tile matched to a candidate
    MatchingComplete {
        /// Number of matched tiles
        tiles: usize,
    },
    /// Output image assembled
    AssemblyComplete {
        /// Output width in pixels
        width: u32,
        /// Output height in pixels
        height: u32,
    },
}

/// Cooperative cancellation flag shared between a pipeline and its caller
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an untripped token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the pipeline stops at its next checkpoint
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One-shot mosaic generation run
///
/// Owns the validated configuration, the seeded random source backing every
/// sampling call, and the cancellation token handed out to callers.
pub struct MosaicPipeline {
    config: MosaicConfig,
    rng: StdRng,
    cancel: CancelToken,
}

impl MosaicPipeline {
    /// Create a pipeline from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile size or target long side is
    /// zero; nothing is rejected later once work has started.
    pub fn new(config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            cancel: CancelToken::new(),
        })
    }

    /// A clone of the cancellation token for external control
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Decode the target, build the library from a directory, and run
    ///
    /// Candidate decode failures are skipped (reported through the
    /// `LibraryBuilt` event); a target decode failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if the target cannot be decoded, `FileSystem` if
    /// the library directory cannot be read, plus everything `run` returns.
    pub fn run_from_paths<F>(
        &mut self,
        target_path: &Path,
        library_dir: &Path,
        progress: F,
    ) -> Result<RgbImage>
    where
        F: FnMut(ProgressEvent),
    {
        let target = load_rgb(target_path)?;
        let library =
            CandidateLibrary::from_directory(library_dir, self.config.tile_size, &mut self.rng)?;
        self.run(&target, &library, progress)
    }

    /// Generate the mosaic for a decoded target and a pre-built library
    ///
    /// # Errors
    ///
    /// Returns `EmptyLibrary` if no candidate is usable (checked before any
    /// matching) and `Cancelled` if the token trips at a checkpoint.
    pub fn run<F>(
        &mut self,
        target: &RgbImage,
        library: &CandidateLibrary,
        mut progress: F,
    ) -> Result<RgbImage>
    where
        F: FnMut(ProgressEvent),
    {
        self.checkpoint("library")?;
        if library.is_empty() {
            return Err(MosaicError::EmptyLibrary {
                skipped: library.skipped().len(),
            });
        }
        progress(ProgressEvent::LibraryBuilt {
            candidates: library.len(),
            skipped: library.skipped().len(),
        });

        self.checkpoint("partition")?;
        let resized = resize_to_long_side(target, self.config.target_long_side);
        let geometry = GridGeometry::new(
            resized.width(),
            resized.height(),
            self.config.tile_size,
            self.config.tile_size,
        )?;
        let tiles = partition(&resized, self.config.tile_size, self.config.tile_size)?;
        progress(ProgressEvent::TargetPartitioned {
            rows: geometry.rows,
            cols: geometry.cols,
        });

        self.checkpoint("sampling")?;
        let target_colors: Vec<_> = tiles
            .iter()
            .map(|tile| {
                estimate_region_color(&tile.image, SampleRegion::full(&tile.image), &mut self.rng)
            })
            .collect();
        progress(ProgressEvent::SamplingComplete {
            tiles: target_colors.len(),
        });

        let candidate_colors = library.colors();
        let selections = select_tiles(&target_colors, &candidate_colors, &self.cancel)?;
        progress(ProgressEvent::MatchingComplete {
            tiles: selections.len(),
        });

        self.checkpoint("assembly")?;
        let matched = matched_images(library, &selections)?;
        let output = compose::assemble(
            &matched,
            geometry.cols,
            self.config.tile_size,
            self.config.tile_size,
        )?;
        progress(ProgressEvent::AssemblyComplete {
            width: output.width(),
            height: output.height(),
        });

        Ok(output)
    }

    fn checkpoint(&self, stage: &'static str) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(MosaicError::Cancelled { stage });
        }
        Ok(())
    }
}

// Selections come from matcher::find_closest and are always in bounds for a
// non-empty library; the lookup stays fallible rather than indexing.
fn matched_images(library: &CandidateLibrary, selections: &[usize]) -> Result<Vec<RgbImage>> {
    selections
        .iter()
        .map(|&index| {
            library
                .entries()
                .get(index)
                .map(|entry| entry.image.clone())
                .ok_or_else(|| {
                    crate::io::error::computation_error(
                        "tile lookup",
                        &format!("selection {index} exceeds library size {}", library.len()),
                    )
                })
        })
        .collect()
}
