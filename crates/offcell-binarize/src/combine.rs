//! Multi-scale combination
//!
//! Fuses the normalized per-scale activations into one map. The default
//! rule is the pointwise maximum: a pixel is text-like if ANY scale's
//! receptive field sees a decrement there, so a fine scale catches thin
//! strokes a coarse scale blurs away and vice versa. Both rules are
//! commutative over the scale set.

use crate::BinarizeResult;
use crate::config::CombineRule;
use offcell_core::{Error, FloatMap};

/// Fuse normalized activation maps into a single combined activation map.
///
/// Inputs are expected in [0, 1]; the maximum rule cannot leave that
/// interval and a weighted average with weights summing to 1 cannot
/// either, so no re-normalization pass is needed. The result is still
/// clamped against float drift.
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty map list or malformed weights,
/// and `DimensionMismatch` if the maps disagree in size — all checked
/// before any combination.
pub fn combine(maps: &[FloatMap], rule: &CombineRule) -> BinarizeResult<FloatMap> {
    let first = maps.first().ok_or_else(|| {
        Error::InvalidParameter("cannot combine an empty set of activation maps".into())
    })?;
    let dims = first.dimensions();
    for map in &maps[1..] {
        if map.dimensions() != dims {
            return Err(Error::DimensionMismatch {
                expected: dims,
                actual: map.dimensions(),
            }
            .into());
        }
    }

    if let CombineRule::WeightedAverage { weights } = rule {
        if weights.len() != maps.len() {
            return Err(Error::InvalidParameter(format!(
                "{} weights for {} maps",
                weights.len(),
                maps.len()
            ))
            .into());
        }
        let sum: f32 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(Error::InvalidParameter(format!(
                "combination weights must sum to 1, got {sum}"
            ))
            .into());
        }
    }

    let (w, h) = dims;
    let mut out = FloatMap::new(w, h)?;
    let out_data = out.data_mut();

    match rule {
        CombineRule::Max => {
            out_data.copy_from_slice(first.data());
            for map in &maps[1..] {
                for (dst, &src) in out_data.iter_mut().zip(map.data()) {
                    if src > *dst {
                        *dst = src;
                    }
                }
            }
        }
        CombineRule::WeightedAverage { weights } => {
            for (map, &weight) in maps.iter().zip(weights) {
                for (dst, &src) in out_data.iter_mut().zip(map.data()) {
                    *dst += weight * src;
                }
            }
            for v in out_data.iter_mut() {
                *v = v.clamp(0.0, 1.0);
            }
        }
    }

    Ok(out)
}
