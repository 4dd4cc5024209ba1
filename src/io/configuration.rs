//! Constants and runtime configuration defaults

// Sampling
/// Side of the random sample grid; the sampler draws this many pixels squared
pub const SAMPLE_GRID_DIM: u32 = 5;

// Matching
/// Starting value of the running minimum in the candidate scan
///
/// Historical sentinel, kept exactly: a candidate must come in strictly below
/// this distance to be selected at all, and when none does the scan falls
/// back to index 0.
pub const MATCH_THRESHOLD: f64 = 1000.0;

// Candidate discovery
/// File-name suffixes accepted as candidate images, matched case-sensitively
pub const CANDIDATE_SUFFIXES: &[&str] = &[".jpg", ".jpeg"];

// Default values for configurable parameters
/// Default side length of each square tile, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Default width of the resized target image, in pixels
pub const DEFAULT_TARGET_LONG_SIDE: u32 = 1024;
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames derived from the target
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Progress display settings
/// Number of pipeline milestones shown on the stage progress bar
pub const PIPELINE_STAGES: u64 = 5;
