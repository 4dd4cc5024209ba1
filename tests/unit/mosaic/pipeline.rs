//! Tests for pipeline configuration and cancellation plumbing

use mosaicry::MosaicError;
use mosaicry::mosaic::pipeline::{CancelToken, MosaicConfig, MosaicPipeline};

#[test]
fn test_zero_tile_size_is_rejected_up_front() {
    let result = MosaicPipeline::new(MosaicConfig {
        tile_size: 0,
        target_long_side: 100,
        seed: 1,
    });
    assert!(matches!(
        result,
        Err(MosaicError::InvalidParameter {
            parameter: "tile_size",
            ..
        })
    ));
}

#[test]
fn test_zero_long_side_is_rejected_up_front() {
    let result = MosaicPipeline::new(MosaicConfig {
        tile_size: 8,
        target_long_side: 0,
        seed: 1,
    });
    assert!(matches!(
        result,
        Err(MosaicError::InvalidParameter {
            parameter: "target_long_side",
            ..
        })
    ));
}

#[test]
fn test_valid_config_is_accepted() {
    let result = MosaicPipeline::new(MosaicConfig {
        tile_size: 8,
        target_long_side: 640,
        seed: 1,
    });
    assert!(result.is_ok());
}

#[test]
fn test_cancel_token_starts_untripped() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_token_clones_share_state() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
}

#[test]
fn test_pipeline_hands_out_a_live_token() {
    let pipeline = MosaicPipeline::new(MosaicConfig {
        tile_size: 8,
        target_long_side: 640,
        seed: 1,
    })
    .unwrap();

    let token = pipeline.cancel_token();
    assert!(!token.is_cancelled());
    token.cancel();
    assert!(pipeline.cancel_token().is_cancelled());
}
