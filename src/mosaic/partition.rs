//! Grid geometry and row-major tile extraction from the target image

use crate::io::error::{Result, invalid_parameter};
use image::{RgbImage, imageops};

/// A tile extracted from the target image
#[derive(Debug, Clone)]
pub struct TargetTile {
    /// The extracted sub-image, exactly `tile_width x tile_height`
    pub image: RgbImage,
    /// Left edge of the tile inside the parent image
    pub origin_x: u32,
    /// Top edge of the tile inside the parent image
    pub origin_y: u32,
}

/// Row-major tile grid covering as much of an image as whole tiles allow
///
/// Pixels beyond `cols * tile_width` or `rows * tile_height` fall outside the
/// grid; no partial tiles exist. Tile index `i` maps to `row = i / cols`,
/// `col = i % cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Number of whole tile rows
    pub rows: u32,
    /// Number of whole tile columns
    pub cols: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
}

impl GridGeometry {
    /// Compute the grid for an image of the given dimensions
    ///
    /// An image smaller than one tile yields zero rows or columns, which is
    /// valid geometry describing an empty grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either tile dimension is zero.
    pub fn new(
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self> {
        if tile_width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &tile_width,
                &"tile width must be at least 1",
            ));
        }
        if tile_height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &tile_height,
                &"tile height must be at least 1",
            ));
        }

        Ok(Self {
            rows: image_height / tile_height,
            cols: image_width / tile_width,
            tile_width,
            tile_height,
        })
    }

    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Split an image into a row-major sequence of equal-size tiles
///
/// The sequence is recomputed from the image on every call. An image smaller
/// than one tile produces an empty sequence, not an error.
///
/// # Errors
///
/// Returns `InvalidParameter` if either tile dimension is zero.
pub fn partition(image: &RgbImage, tile_width: u32, tile_height: u32) -> Result<Vec<TargetTile>> {
    let geometry = GridGeometry::new(image.width(), image.height(), tile_width, tile_height)?;

    let mut tiles = Vec::with_capacity(geometry.tile_count() as usize);
    for row in 0..geometry.rows {
        for col in 0..geometry.cols {
            let origin_x = col * tile_width;
            let origin_y = row * tile_height;
            let sub = imageops::crop_imm(image, origin_x, origin_y, tile_width, tile_height);
            tiles.push(TargetTile {
                image: sub.to_image(),
                origin_x,
                origin_y,
            });
        }
    }

    Ok(tiles)
}
