//! Photo mosaic generation by average-color tile matching
//!
//! The pipeline partitions a target image into a grid of equal square tiles,
//! estimates a representative color for each tile by randomized sampling,
//! and replaces every tile with the candidate image from a user-supplied
//! library whose estimated color lies closest under a weighted Euclidean
//! metric. Matched tiles are composited back into a single output image.

#![forbid(unsafe_code)]

/// RGB color value type and the weighted color-distance metric
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Core mosaic pipeline: sampling, partitioning, matching, and assembly
pub mod mosaic;

pub use io::error::{MosaicError, Result};
