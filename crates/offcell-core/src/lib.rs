//! offcell-core - Data containers for OFF center-surround binarization
//!
//! This crate provides the data structures passed between the pipeline
//! stages:
//!
//! - [`PixelArray`] - Immutable input image (grayscale or RGB, channel-last)
//! - [`FloatMap`] - 2-D floating-point map (luminance, responses, activation)
//! - [`BinaryMap`] - 2-D text/background map, the terminal artifact
//!
//! All intermediate maps are owned by a single pipeline invocation and
//! dropped at function return; only the [`BinaryMap`] is handed to the
//! caller.

pub mod binary_map;
pub mod error;
pub mod float_map;
pub mod pixel_array;

pub use binary_map::BinaryMap;
pub use error::{Error, Result};
pub use float_map::FloatMap;
pub use pixel_array::PixelArray;
