//! Core mosaic-generation pipeline
//!
//! This module contains the algorithmic heart of the crate:
//! - Randomized representative-color estimation for image regions
//! - Row-major tile partitioning of the target image
//! - Candidate library construction with per-image recoverable failures
//! - Nearest-color matching with the threshold-gated linear scan
//! - Composite assembly of the matched tiles

/// Composite assembly of matched tiles into the output image
pub mod compose;
/// Candidate tile library construction and storage
pub mod library;
/// Nearest-color candidate selection
pub mod matcher;
/// Grid geometry and row-major tile extraction
pub mod partition;
/// Staged end-to-end generation with progress events and cancellation
pub mod pipeline;
/// Randomized average-color estimation for image regions
pub mod sampler;
