//! Input/output operations and error handling
//!
//! Everything here is the thin shell around the core pipeline: decoding and
//! encoding at the interface boundary, candidate discovery on the
//! filesystem, the CLI, progress display, and the crate's error taxonomy.

/// Command-line interface and the worker-thread runner
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Image decoding, resizing, candidate discovery, and export
pub mod image;
/// Progress display driven by pipeline events
pub mod progress;
