//! Composite assembly of matched tiles into the output image

use crate::io::error::{Result, invalid_parameter};
use image::{RgbImage, imageops};

/// Stitch matched tiles into one image matching the partition geometry
///
/// Tile `i` is painted by plain overwrite at `(col * tile_width,
/// row * tile_height)` with `row = i / cols`, `col = i % cols`; no gap,
/// border, or blending between tiles. The output measures exactly
/// `cols * tile_width x rows * tile_height` with
/// `rows = ceil(len / cols)`. An empty tile list yields a 0x0 image.
///
/// # Errors
///
/// Returns `InvalidParameter` if a tile dimension is zero, or if `cols` is
/// zero while tiles are present.
pub fn assemble(
    tiles: &[RgbImage],
    cols: u32,
    tile_width: u32,
    tile_height: u32,
) -> Result<RgbImage> {
    if tile_width == 0 || tile_height == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &format!("{tile_width}x{tile_height}"),
            &"tile dimensions must be at least 1",
        ));
    }
    if tiles.is_empty() {
        return Ok(RgbImage::new(0, 0));
    }
    if cols == 0 {
        return Err(invalid_parameter(
            "cols",
            &cols,
            &"column count must be at least 1 when tiles are present",
        ));
    }

    let rows = (tiles.len() as u32).div_ceil(cols);
    let mut output = RgbImage::new(cols * tile_width, rows * tile_height);

    for (index, tile) in tiles.iter().enumerate() {
        let col = index as u32 % cols;
        let row = index as u32 / cols;
        imageops::replace(
            &mut output,
            tile,
            i64::from(col * tile_width),
            i64::from(row * tile_height),
        );
    }

    Ok(output)
}
