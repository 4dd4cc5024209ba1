//! Tests for decoding, resizing, candidate discovery, and export

use image::{Rgb as ImageRgb, RgbImage};
use mosaicry::MosaicError;
use mosaicry::io::image::{
    collect_candidate_paths, export_mosaic, load_rgb, resize_square, resize_to_long_side,
};

fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, ImageRgb(color))
}

#[test]
fn test_long_side_resize_preserves_aspect_ratio() {
    let image = solid(100, 50, [1, 2, 3]);
    let resized = resize_to_long_side(&image, 10);
    assert_eq!((resized.width(), resized.height()), (10, 5));
}

#[test]
fn test_long_side_resize_rounds_the_height() {
    // 5:3 aspect at long side 7 gives 7 / (5/3) = 4.2, rounded to 4
    let image = solid(5, 3, [1, 2, 3]);
    let resized = resize_to_long_side(&image, 7);
    assert_eq!((resized.width(), resized.height()), (7, 4));
}

#[test]
fn test_long_side_resize_never_collapses_to_zero_height() {
    let image = solid(100, 1, [1, 2, 3]);
    let resized = resize_to_long_side(&image, 10);
    assert_eq!((resized.width(), resized.height()), (10, 1));
}

#[test]
fn test_resize_at_current_dimensions_is_identity() {
    let image = solid(10, 5, [9, 8, 7]);
    let resized = resize_to_long_side(&image, 10);
    assert_eq!(resized, image);
}

#[test]
fn test_square_resize_ignores_aspect_ratio() {
    let image = solid(30, 10, [5, 5, 5]);
    let resized = resize_square(&image, 8);
    assert_eq!((resized.width(), resized.height()), (8, 8));
}

#[test]
fn test_square_resize_at_size_is_identity() {
    let image = solid(8, 8, [5, 6, 7]);
    assert_eq!(resize_square(&image, 8), image);
}

#[test]
fn test_candidate_discovery_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("sub");
    std::fs::create_dir(&nested).unwrap();

    for name in ["b.jpg", "a.jpeg", "notes.txt", "photo.notjpg", "upper.JPG"] {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }
    std::fs::write(nested.join("c.jpg"), b"").unwrap();

    let paths = collect_candidate_paths(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();

    // Sorted by full path; the nested entry sorts under its directory
    assert_eq!(names, vec!["a.jpeg", "b.jpg", "c.jpg"]);
}

#[test]
fn test_candidate_discovery_on_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = collect_candidate_paths(&dir.path().join("missing"));
    assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
}

#[test]
fn test_load_rgb_reports_decode_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"garbage").unwrap();

    assert!(matches!(
        load_rgb(&path),
        Err(MosaicError::ImageLoad { .. })
    ));
}

#[test]
fn test_export_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("mosaic.png");

    let image = solid(6, 4, [120, 130, 140]);
    export_mosaic(&image, &path).unwrap();

    let loaded = load_rgb(&path).unwrap();
    assert_eq!(loaded, image);
}
