//! Candidate tile library construction
//!
//! The library is built once per mosaic run: every source image is stretched
//! to a uniform square and its representative color is sampled a single time
//! and cached in the entry. Candidate files that fail to decode are skipped
//! and recorded rather than aborting the build, so a mosaic can still be
//! produced from the images that did load.

use crate::color::Rgb;
use crate::io::error::Result;
use crate::io::image::{collect_candidate_paths, resize_square};
use crate::mosaic::sampler::{SampleRegion, estimate_region_color};
use image::RgbImage;
use rand::Rng;
use std::path::{Path, PathBuf};

/// A candidate tile and its cached representative color
#[derive(Debug, Clone)]
pub struct CandidateEntry {
    /// The square candidate tile image
    pub image: RgbImage,
    /// Representative color, sampled once at build time
    pub average_color: Rgb,
}

/// The full set of candidate entries available for one mosaic run
#[derive(Debug, Default)]
pub struct CandidateLibrary {
    entries: Vec<CandidateEntry>,
    skipped: Vec<PathBuf>,
}

impl CandidateLibrary {
    /// Build a library from in-memory source images
    ///
    /// Each image is stretched (aspect ratio not preserved) to a
    /// `tile_size x tile_size` square and its color sampled once.
    pub fn from_images<R: Rng>(sources: Vec<RgbImage>, tile_size: u32, rng: &mut R) -> Self {
        let entries = sources
            .into_iter()
            .map(|source| {
                let image = resize_square(&source, tile_size);
                let average_color = estimate_region_color(&image, SampleRegion::full(&image), rng);
                CandidateEntry {
                    image,
                    average_color,
                }
            })
            .collect();

        Self {
            entries,
            skipped: Vec::new(),
        }
    }

    /// Build a library from every `.jpg`/`.jpeg` file under a directory
    ///
    /// The directory is walked recursively and discovered paths are sorted so
    /// candidate order is stable across runs. Files that fail to decode are
    /// recorded in the skipped list and the build continues.
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the directory itself cannot be read. An empty
    /// result is not an error here; the pipeline rejects it before matching.
    pub fn from_directory<R: Rng>(dir: &Path, tile_size: u32, rng: &mut R) -> Result<Self> {
        let paths = collect_candidate_paths(dir)?;

        let mut entries = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();

        for path in paths {
            match image::open(&path) {
                Ok(decoded) => {
                    let image = resize_square(&decoded.to_rgb8(), tile_size);
                    let average_color =
                        estimate_region_color(&image, SampleRegion::full(&image), rng);
                    entries.push(CandidateEntry {
                        image,
                        average_color,
                    });
                }
                Err(_) => skipped.push(path),
            }
        }

        Ok(Self { entries, skipped })
    }

    /// All candidate entries, in build order
    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    /// Cached representative colors, aligned with `entries`
    pub fn colors(&self) -> Vec<Rgb> {
        self.entries.iter().map(|entry| entry.average_color).collect()
    }

    /// Paths of candidate files that failed to decode
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Number of usable candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no candidate loaded successfully
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
