//! Tests for candidate library construction

use image::{Rgb as ImageRgb, RgbImage};
use mosaicry::color::Rgb;
use mosaicry::mosaic::library::CandidateLibrary;
use rand::{SeedableRng, rngs::StdRng};

fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, ImageRgb(color))
}

#[test]
fn test_from_images_resizes_everything_square() {
    let sources = vec![
        solid(30, 10, [255, 0, 0]),
        solid(4, 4, [0, 255, 0]),
        solid(9, 21, [0, 0, 255]),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    let library = CandidateLibrary::from_images(sources, 8, &mut rng);

    assert_eq!(library.len(), 3);
    for entry in library.entries() {
        assert_eq!((entry.image.width(), entry.image.height()), (8, 8));
    }
}

#[test]
fn test_colors_are_cached_in_entry_order() {
    let sources = vec![solid(6, 6, [255, 0, 0]), solid(6, 6, [0, 0, 255])];
    let mut rng = StdRng::seed_from_u64(12);
    let library = CandidateLibrary::from_images(sources, 4, &mut rng);

    assert_eq!(
        library.colors(),
        vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]
    );
}

#[test]
fn test_empty_library_reports_empty() {
    let mut rng = StdRng::seed_from_u64(13);
    let library = CandidateLibrary::from_images(Vec::new(), 4, &mut rng);
    assert!(library.is_empty());
    assert_eq!(library.len(), 0);
    assert!(library.skipped().is_empty());
}

#[test]
fn test_from_directory_skips_undecodable_files() {
    let dir = tempfile::tempdir().unwrap();
    solid(8, 8, [10, 20, 30])
        .save(dir.path().join("good.jpg"))
        .unwrap();
    std::fs::write(dir.path().join("broken.jpeg"), b"not an image").unwrap();

    let mut rng = StdRng::seed_from_u64(14);
    let library = CandidateLibrary::from_directory(dir.path(), 4, &mut rng).unwrap();

    assert_eq!(library.len(), 1);
    assert_eq!(library.skipped().len(), 1);
    assert!(
        library
            .skipped()
            .first()
            .is_some_and(|path| path.ends_with("broken.jpeg"))
    );
}

#[test]
fn test_from_directory_recurses_and_filters_by_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    solid(8, 8, [1, 2, 3]).save(dir.path().join("a.jpg")).unwrap();
    solid(8, 8, [4, 5, 6]).save(nested.join("b.jpeg")).unwrap();
    // Wrong suffix and wrong case are both ignored, without decoding
    solid(8, 8, [7, 8, 9]).save(dir.path().join("c.png")).unwrap();
    std::fs::write(dir.path().join("d.JPG"), b"ignored").unwrap();

    let mut rng = StdRng::seed_from_u64(15);
    let library = CandidateLibrary::from_directory(dir.path(), 4, &mut rng).unwrap();

    assert_eq!(library.len(), 2);
    assert!(library.skipped().is_empty());
}

#[test]
fn test_from_directory_on_missing_path_is_a_filesystem_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    let mut rng = StdRng::seed_from_u64(16);
    let result = CandidateLibrary::from_directory(&missing, 4, &mut rng);
    assert!(matches!(
        result,
        Err(mosaicry::MosaicError::FileSystem { .. })
    ));
}
