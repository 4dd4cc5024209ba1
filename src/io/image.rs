//! Image decoding, resizing, candidate discovery, and export
//!
//! The pipeline itself is format-agnostic; every encode/decode concern lives
//! here at the interface boundary. Resizing uses a Catmull-Rom filter, an
//! area-averaging-quality downsample matching the composite's needs.

use crate::io::configuration::CANDIDATE_SUFFIXES;
use crate::io::error::{MosaicError, Result};
use image::{RgbImage, imageops, imageops::FilterType};
use std::path::{Path, PathBuf};

/// Decode an image into an RGB buffer, flattening any alpha channel
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// Resize an image so its width equals `long_side`, preserving aspect ratio
///
/// The new height is `round(long_side / (width / height))`, clamped to at
/// least one pixel. An image already at the requested dimensions is returned
/// unchanged.
pub fn resize_to_long_side(image: &RgbImage, long_side: u32) -> RgbImage {
    let ratio = f64::from(image.width()) / f64::from(image.height());
    let height = ((f64::from(long_side) / ratio).round() as u32).max(1);

    if image.width() == long_side && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, long_side, height, FilterType::CatmullRom)
}

/// Stretch an image to a `side x side` square, ignoring aspect ratio
///
/// Candidate tiles must all share the composite's uniform tile size, so the
/// source is stretched rather than cropped. An image already square at the
/// requested side is returned unchanged.
pub fn resize_square(image: &RgbImage, side: u32) -> RgbImage {
    if image.width() == side && image.height() == side {
        return image.clone();
    }
    imageops::resize(image, side, side, FilterType::CatmullRom)
}

/// Recursively collect candidate image paths under a directory
///
/// A file qualifies when its name ends in `.jpg` or `.jpeg`, case as given —
/// no case folding. Results are sorted so candidate order is stable across
/// runs and filesystems.
///
/// # Errors
///
/// Returns `FileSystem` if a directory cannot be read.
pub fn collect_candidate_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    walk_candidates(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn walk_candidates(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|source| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| MosaicError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory entry",
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_candidates(&path, paths)?;
        } else if is_candidate_name(&path) {
            paths.push(path);
        }
    }
    Ok(())
}

fn is_candidate_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            CANDIDATE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
}

/// Write the composite image to disk, creating parent directories as needed
///
/// The format is inferred from the path's extension by the encoder.
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if encoding or writing fails; the in-memory image remains
/// usable either way.
pub fn export_mosaic(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    image.save(path).map_err(|source| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
