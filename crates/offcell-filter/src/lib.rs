//! offcell-filter - Smoothing kernels and separable convolution
//!
//! This crate provides the low-pass machinery the center-surround filter
//! bank is built from:
//!
//! - 1-D symmetric smoothing kernels (Gaussian, boxcar)
//! - Separable convolution over [`offcell_core::FloatMap`]
//! - Border handling (mirror reflection or edge replication)

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{Border, gaussian_smooth, smooth};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
