//! Smoothing kernels
//!
//! The pipeline only needs 1-D symmetric low-pass kernels: separable
//! convolution applies the same kernel along rows and then columns, which
//! for a Gaussian is exact and for any symmetric kernel preserves the
//! qualitative falloff the filter bank requires.

use crate::{FilterError, FilterResult};

/// A 1-D symmetric smoothing kernel
///
/// Stores `2 * radius + 1` taps, normalized to sum to 1 so that a flat
/// region convolves to itself.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Half-width; taps run from -radius to +radius
    radius: usize,
    /// Tap weights, length `2 * radius + 1`, sum 1
    taps: Vec<f32>,
}

impl Kernel {
    /// Create a Gaussian kernel for the given standard deviation.
    ///
    /// The radius is `ceil(3 * sigma)`, which captures > 99.7% of the
    /// Gaussian mass; taps are normalized to sum to exactly 1.
    pub fn gaussian(sigma: f32) -> FilterResult<Self> {
        if !(sigma > 0.0) || !sigma.is_finite() {
            return Err(FilterError::InvalidKernel(format!(
                "sigma must be positive and finite, got {sigma}"
            )));
        }

        let radius = (3.0 * sigma).ceil() as usize;
        let radius = radius.max(1);
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);

        let mut taps = Vec::with_capacity(2 * radius + 1);
        for i in 0..=(2 * radius) {
            let d = i as f32 - radius as f32;
            taps.push((-d * d * inv_two_sigma_sq).exp());
        }

        let mut kernel = Kernel { radius, taps };
        kernel.normalize();
        Ok(kernel)
    }

    /// Create a boxcar (uniform averaging) kernel with the given half-width.
    pub fn boxcar(radius: usize) -> FilterResult<Self> {
        if radius == 0 {
            return Err(FilterError::InvalidKernel(
                "boxcar radius must be >= 1".into(),
            ));
        }

        let len = 2 * radius + 1;
        Ok(Kernel {
            radius,
            taps: vec![1.0 / len as f32; len],
        })
    }

    /// Get the kernel half-width
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Get the number of taps (`2 * radius + 1`)
    #[inline]
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Whether the kernel has no taps (never true for a constructed kernel)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Get the tap weights
    #[inline]
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// Get the sum of all taps
    pub fn sum(&self) -> f32 {
        self.taps.iter().sum()
    }

    /// Rescale the taps so they sum to 1
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() >= 1e-12 {
            for t in &mut self.taps {
                *t /= sum;
            }
        }
    }
}
