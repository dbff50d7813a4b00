//! offcell - Adaptive document binarization based on OFF center-surround cells
//!
//! Takes a document photograph (RGB or grayscale, dark text on a bright
//! page) and returns a binary text/background map, robust to the shadows,
//! stains, and highlights of handheld capture. The method models OFF-type
//! center-surround cells of the retina, which respond to local luminance
//! decrements — what ink produces on a page regardless of global
//! brightness.
//!
//! # Example
//!
//! ```
//! use offcell::{PixelArray, binarize::binarize};
//!
//! // A bright page with one dark vertical stroke
//! let mut samples = vec![220u8; 64 * 64];
//! for y in 0..64 {
//!     samples[y * 64 + 32] = 40;
//! }
//! let page = PixelArray::from_gray8(64, 64, &samples).unwrap();
//!
//! let output = binarize(&page).unwrap();
//! assert_eq!(output.map.dimensions(), (64, 64));
//! ```

// Re-export core types (data containers used everywhere)
pub use offcell_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use offcell_binarize as binarize;
pub use offcell_filter as filter;
pub use offcell_io as io;
pub use offcell_region as region;
