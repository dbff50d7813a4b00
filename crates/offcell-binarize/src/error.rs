//! Error types for offcell-binarize
//!
//! Unsupported input shapes surface as `offcell_core::Error::InvalidShape`
//! and malformed configuration as `offcell_core::Error::InvalidParameter`,
//! both raised eagerly before any stage computes. Degenerate (flat) input
//! is not an error at all; it surfaces as a warning on the pipeline output.

use thiserror::Error;

/// Errors that can occur during binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error (invalid shape, parameter, or dimensions)
    #[error("core error: {0}")]
    Core(#[from] offcell_core::Error),

    /// Filtering error from the center-surround stage
    #[error("filter error: {0}")]
    Filter(#[from] offcell_filter::FilterError),

    /// Region analysis error from speckle removal
    #[error("region error: {0}")]
    Region(#[from] offcell_region::RegionError),
}

/// Result type for binarization operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
