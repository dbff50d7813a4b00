//! offcell-binarize - Adaptive document binarization with OFF cells
//!
//! Converts a document photograph (dark text on a bright page) into a
//! binary text/background map, robust to the non-uniform illumination of
//! handheld capture: shadows, stains, highlights. The method models
//! OFF-type center-surround receptive fields of early vision — units that
//! respond where a pixel's neighborhood is darker than its broader
//! surround, which is what printed text produces locally regardless of
//! the page's global brightness.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`luminance`] - RGB/gray input to a [0, 1] luminance map
//! 2. [`center_surround`] - per-scale rectified OFF responses
//! 3. [`normalize`] - percentile stretch onto a common [0, 1] range
//! 4. [`combine`] - multi-scale fusion (pointwise max by default)
//! 5. [`threshold`] - adaptive Otsu split into TEXT/BACKGROUND
//! 6. speckle removal via `offcell-region` (optional, on by default)
//!
//! The entry points are [`binarize`] and [`binarize_with`].

pub mod center_surround;
pub mod combine;
pub mod config;
mod error;
pub mod luminance;
pub mod normalize;
pub mod pipeline;
pub mod threshold;

pub use config::{
    BinarizeConfig, CombineRule, DEFAULT_LOWER_PERCENTILE, DEFAULT_MIN_COMPONENT_SIZE,
    DEFAULT_SCALE_SIGMAS, DEFAULT_UPPER_PERCENTILE, Scale, ThresholdStrategy,
};
pub use error::{BinarizeError, BinarizeResult};
pub use pipeline::{BinarizeOutput, Warning, binarize, binarize_with};

// Re-export commonly used stage functions
pub use center_surround::{off_response, response_bank};
pub use combine::combine;
pub use luminance::extract_luminance;
pub use normalize::percentile_stretch;
pub use threshold::{ThresholdResult, apply_threshold};
