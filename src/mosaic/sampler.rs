//! Randomized average-color estimation for image regions
//!
//! The estimator draws a fixed number of uniformly random pixels from a
//! region and averages their channels. It is a randomized estimate, not an
//! exact mean: repeated calls over the same region may return different
//! results unless the caller injects a seeded random source.

use crate::color::Rgb;
use crate::io::configuration::SAMPLE_GRID_DIM;
use image::RgbImage;
use rand::Rng;

/// A rectangular pixel region inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    /// Left edge of the region, in pixels
    pub x: u32,
    /// Top edge of the region, in pixels
    pub y: u32,
    /// Region width, in pixels
    pub width: u32,
    /// Region height, in pixels
    pub height: u32,
}

impl SampleRegion {
    /// The full extent of an image
    pub fn full(image: &RgbImage) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Estimate the representative color of a region by random sampling
///
/// Draws `SAMPLE_GRID_DIM`^2 pixels with independently uniform coordinates
/// within the region, sampling with replacement, and returns the truncating
/// integer mean of each channel. Degenerate spans (width or height of zero)
/// are widened to 1 so coordinate generation stays valid; coordinates are
/// additionally clamped to the image bounds.
pub fn estimate_region_color<R: Rng>(image: &RgbImage, region: SampleRegion, rng: &mut R) -> Rgb {
    let samples = SAMPLE_GRID_DIM * SAMPLE_GRID_DIM;
    let span_x = region.width.max(1);
    let span_y = region.height.max(1);
    let max_x = image.width().saturating_sub(1);
    let max_y = image.height().saturating_sub(1);

    let mut reds: u32 = 0;
    let mut greens: u32 = 0;
    let mut blues: u32 = 0;

    for _ in 0..samples {
        let sx = (region.x + rng.random_range(0..span_x)).min(max_x);
        let sy = (region.y + rng.random_range(0..span_y)).min(max_y);
        let pixel = image.get_pixel(sx, sy);
        let [red, green, blue] = pixel.0;
        reds += u32::from(red);
        greens += u32::from(green);
        blues += u32::from(blue);
    }

    Rgb::new(
        (reds / samples) as u8,
        (greens / samples) as u8,
        (blues / samples) as u8,
    )
}
