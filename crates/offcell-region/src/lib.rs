//! offcell-region - Connected component analysis for binary text maps
//!
//! Used by the binarization pipeline's final speckle-removal step: TEXT
//! components with too few pixels are reclassified as BACKGROUND.
//!
//! - [`conncomp`]: union-find labeling of TEXT components
//! - [`select`]: size-based component filtering

pub mod conncomp;
mod error;
pub mod select;

pub use conncomp::{Component, Connectivity, label_components};
pub use error::{RegionError, RegionResult};
pub use select::remove_small_components;
