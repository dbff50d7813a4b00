//! Pipeline configuration
//!
//! All knobs of the pipeline live in [`BinarizeConfig`]; the defaults are
//! documented constants so that [`crate::binarize`] works out of the box
//! with nothing but an image.

use crate::{BinarizeError, BinarizeResult};
use offcell_core::Error;
use offcell_region::Connectivity;

// ============================================================================
// Default parameters
// ============================================================================

/// Default (center, surround) Gaussian sigmas, fine to coarse.
///
/// The middle pair is the classic single-scale OFF cell configuration for
/// ~300 dpi body text. The surrounds span a few pixels of context up to
/// tens of pixels; the centers all stay at stroke-width scale so that the
/// response stays tight around the ink instead of haloing with the
/// context size.
pub const DEFAULT_SCALE_SIGMAS: [(f32, f32); 3] = [(0.5, 4.0), (0.6, 10.0), (0.8, 25.0)];

/// Default lower percentile for activation normalization
pub const DEFAULT_LOWER_PERCENTILE: f32 = 1.0;

/// Default upper percentile for activation normalization
pub const DEFAULT_UPPER_PERCENTILE: f32 = 99.0;

/// Default minimum TEXT component size in pixels (speckle removal)
pub const DEFAULT_MIN_COMPONENT_SIZE: usize = 10;

// ============================================================================
// Configuration types
// ============================================================================

/// One receptive-field scale: a (center, surround) Gaussian sigma pair
///
/// The surround must be strictly wider than the center; the pair is tuned
/// to a stroke-width/text-size range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Standard deviation of the center Gaussian, in pixels
    pub sigma_center: f32,
    /// Standard deviation of the surround Gaussian, in pixels
    pub sigma_surround: f32,
}

impl Scale {
    /// Create a scale from a (center, surround) sigma pair
    pub fn new(sigma_center: f32, sigma_surround: f32) -> Self {
        Self {
            sigma_center,
            sigma_surround,
        }
    }

    /// Check the scale's invariants: positive finite sigmas, surround > center
    pub fn validate(&self) -> BinarizeResult<()> {
        if !(self.sigma_center > 0.0) || !self.sigma_center.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "center sigma must be positive, got {}",
                self.sigma_center
            ))
            .into());
        }
        if !(self.sigma_surround > 0.0) || !self.sigma_surround.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "surround sigma must be positive, got {}",
                self.sigma_surround
            ))
            .into());
        }
        if self.sigma_surround <= self.sigma_center {
            return Err(Error::InvalidParameter(format!(
                "surround sigma ({}) must exceed center sigma ({})",
                self.sigma_surround, self.sigma_center
            ))
            .into());
        }
        Ok(())
    }
}

/// How the normalized per-scale activations are fused
#[derive(Debug, Clone, PartialEq)]
pub enum CombineRule {
    /// Pointwise maximum across scales: a pixel is text-like if any scale
    /// sees a decrement there. The most illumination-robust choice.
    Max,
    /// Weighted average; one weight per scale, summing to 1
    WeightedAverage { weights: Vec<f32> },
}

/// How the activation map is split into TEXT and BACKGROUND
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdStrategy {
    /// A single Otsu split over the whole activation map
    GlobalOtsu,
    /// Per-tile Otsu splits with a global fallback for flat tiles,
    /// for extreme residual gradients
    Windowed {
        /// Tile side length in pixels (minimum 2)
        window: u32,
    },
}

/// Configuration record for the binarization pipeline
#[derive(Debug, Clone)]
pub struct BinarizeConfig {
    /// Receptive-field scales, fine to coarse
    pub scales: Vec<Scale>,
    /// Lower percentile of the normalization stretch
    pub lower_percentile: f32,
    /// Upper percentile of the normalization stretch
    pub upper_percentile: f32,
    /// Fusion rule for the per-scale activations
    pub combine: CombineRule,
    /// Decision rule turning activation into TEXT/BACKGROUND
    pub threshold: ThresholdStrategy,
    /// Shape the rectified response by the local surround luminance, so
    /// decrements under a dim (shadowed) surround score like decrements
    /// under a lit one
    pub surround_adaptation: bool,
    /// Remove TEXT components smaller than this many pixels; `None`
    /// disables speckle removal
    pub min_component_size: Option<usize>,
    /// Connectivity used by speckle removal
    pub connectivity: Connectivity,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            scales: DEFAULT_SCALE_SIGMAS
                .iter()
                .map(|&(c, s)| Scale::new(c, s))
                .collect(),
            lower_percentile: DEFAULT_LOWER_PERCENTILE,
            upper_percentile: DEFAULT_UPPER_PERCENTILE,
            combine: CombineRule::Max,
            threshold: ThresholdStrategy::GlobalOtsu,
            surround_adaptation: true,
            min_component_size: Some(DEFAULT_MIN_COMPONENT_SIZE),
            connectivity: Connectivity::FourWay,
        }
    }
}

impl BinarizeConfig {
    /// Validate the whole configuration.
    ///
    /// Called by the pipeline entry point before any computation, so a
    /// malformed configuration always fails fast and identically.
    pub fn validate(&self) -> BinarizeResult<()> {
        if self.scales.is_empty() {
            return Err(BinarizeError::Core(Error::InvalidParameter(
                "scale list must not be empty".into(),
            )));
        }
        for scale in &self.scales {
            scale.validate()?;
        }

        if !(0.0..=100.0).contains(&self.lower_percentile)
            || !(0.0..=100.0).contains(&self.upper_percentile)
            || self.lower_percentile >= self.upper_percentile
        {
            return Err(BinarizeError::Core(Error::InvalidParameter(format!(
                "percentile bounds must satisfy 0 <= lower < upper <= 100, got ({}, {})",
                self.lower_percentile, self.upper_percentile
            ))));
        }

        if let CombineRule::WeightedAverage { weights } = &self.combine {
            if weights.len() != self.scales.len() {
                return Err(BinarizeError::Core(Error::InvalidParameter(format!(
                    "{} combination weights for {} scales",
                    weights.len(),
                    self.scales.len()
                ))));
            }
            let sum: f32 = weights.iter().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(BinarizeError::Core(Error::InvalidParameter(format!(
                    "combination weights must sum to 1, got {sum}"
                ))));
            }
            if weights.iter().any(|&w| w < 0.0) {
                return Err(BinarizeError::Core(Error::InvalidParameter(
                    "combination weights must be non-negative".into(),
                )));
            }
        }

        if let ThresholdStrategy::Windowed { window } = self.threshold {
            if window < 2 {
                return Err(BinarizeError::Core(Error::InvalidParameter(format!(
                    "threshold window must be >= 2, got {window}"
                ))));
            }
        }

        Ok(())
    }
}
