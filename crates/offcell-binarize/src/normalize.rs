//! Scale normalization
//!
//! Each rectified response map is stretched independently onto [0, 1] so
//! the scales become comparable before fusion: a coarse scale's raw
//! magnitudes would otherwise dominate a fine scale's. The stretch anchors
//! on percentiles rather than the raw min/max so a single noise pixel
//! cannot flatten the useful range.

use crate::BinarizeResult;
use offcell_core::{Error, FloatMap};

/// Value spans narrower than this count as collapsed
const DEGENERATE_SPAN: f32 = 1e-9;

/// Stretch a response map onto [0, 1] between two percentile anchors.
///
/// Values at or below the `lower` percentile map to 0, at or above the
/// `upper` percentile to 1, linear in between. Strictly order-preserving
/// within the stretch window. A flat map (blank page) normalizes to
/// uniformly zero instead of dividing by zero.
///
/// The percentile window can collapse on a map that still carries signal:
/// text so sparse that fewer pixels respond than the upper percentile
/// excludes leaves both anchors at 0. Such a map falls back to a full
/// min-max stretch; only a truly flat map takes the all-zero path.
///
/// # Errors
///
/// Returns `InvalidParameter` unless `0 <= lower < upper <= 100`.
pub fn percentile_stretch(map: &FloatMap, lower: f32, upper: f32) -> BinarizeResult<FloatMap> {
    if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper {
        return Err(Error::InvalidParameter(format!(
            "percentile bounds must satisfy 0 <= lower < upper <= 100, got ({lower}, {upper})"
        ))
        .into());
    }

    let mut lo = percentile_value(map.data(), lower);
    let mut hi = percentile_value(map.data(), upper);

    let (w, h) = map.dimensions();
    if hi - lo < DEGENERATE_SPAN {
        let (min, max) = (map.min(), map.max());
        if max - min < DEGENERATE_SPAN {
            return Ok(FloatMap::new(w, h)?);
        }
        lo = min;
        hi = max;
    }

    let inv = 1.0 / (hi - lo);
    let mut out = FloatMap::new(w, h)?;
    for (dst, &src) in out.data_mut().iter_mut().zip(map.data()) {
        *dst = ((src - lo) * inv).clamp(0.0, 1.0);
    }
    Ok(out)
}

/// Normalize every map of a response bank independently.
pub fn normalize_bank(
    maps: &[FloatMap],
    lower: f32,
    upper: f32,
) -> BinarizeResult<Vec<FloatMap>> {
    maps.iter()
        .map(|m| percentile_stretch(m, lower, upper))
        .collect()
}

/// Linearly interpolated percentile of a sample set.
fn percentile_value(data: &[f32], pct: f32) -> f32 {
    debug_assert!(!data.is_empty());
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);

    let pos = pct / 100.0 * (sorted.len() - 1) as f32;
    let below = pos.floor() as usize;
    let above = pos.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        let frac = pos - below as f32;
        sorted[below] * (1.0 - frac) + sorted[above] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_in_unit_interval() {
        let map = FloatMap::from_fn(20, 20, |x, y| (x * y) as f32).unwrap();
        let out = percentile_stretch(&map, 1.0, 99.0).unwrap();
        assert!(out.min() >= 0.0);
        assert!(out.max() <= 1.0);
    }

    #[test]
    fn test_order_preserving() {
        let map = FloatMap::from_fn(10, 1, |x, _| x as f32 * 0.1).unwrap();
        let out = percentile_stretch(&map, 0.0, 100.0).unwrap();
        let row = out.row(0);
        for pair in row.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_sparse_response_survives_collapsed_window() {
        // 50 of 10000 pixels carry response: the 99th-percentile anchor
        // sits at 0, but the map is not flat, so the stretch falls back
        // to the full range instead of erasing the signal.
        let map = FloatMap::from_fn(100, 100, |x, y| {
            if y == 0 && x < 50 { 0.8 } else { 0.0 }
        })
        .unwrap();
        let out = percentile_stretch(&map, 1.0, 99.0).unwrap();
        assert_eq!(out.max(), 1.0);
        assert_eq!(out.get_pixel_unchecked(10, 0), 1.0);
        assert_eq!(out.get_pixel_unchecked(10, 50), 0.0);
    }

    #[test]
    fn test_flat_map_normalizes_to_zero() {
        let map = FloatMap::new_with_value(15, 15, 0.42).unwrap();
        let out = percentile_stretch(&map, 1.0, 99.0).unwrap();
        assert!(out.data().iter().all(|&v| v == 0.0));
        assert!(out.data().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_full_range_stretch_hits_anchors() {
        let map = FloatMap::from_fn(10, 10, |x, y| (y * 10 + x) as f32).unwrap();
        let out = percentile_stretch(&map, 0.0, 100.0).unwrap();
        assert_eq!(out.get_pixel_unchecked(0, 0), 0.0);
        assert_eq!(out.get_pixel_unchecked(9, 9), 1.0);
    }

    #[test]
    fn test_idempotent_on_normalized_map() {
        // A map whose percentile anchors already sit at 0 and 1 is a fixed
        // point of the stretch.
        let map = FloatMap::from_fn(10, 10, |x, y| {
            let i = y * 10 + x;
            if i < 3 {
                0.0
            } else if i >= 97 {
                1.0
            } else {
                (i as f32 - 3.0) / 94.0
            }
        })
        .unwrap();

        let once = percentile_stretch(&map, 1.0, 99.0).unwrap();
        let twice = percentile_stretch(&once, 1.0, 99.0).unwrap();
        for (a, b) in once.data().iter().zip(twice.data()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_outlier_does_not_flatten_range() {
        // 99 small values and one huge outlier; with a percentile anchor
        // below the outlier the small values still use most of the unit
        // interval.
        let mut data = vec![0.0f32; 100];
        for (i, v) in data.iter_mut().enumerate() {
            *v = i as f32 / 100.0;
        }
        data[99] = 1000.0;
        let map = FloatMap::from_data(10, 10, data).unwrap();

        let out = percentile_stretch(&map, 0.0, 98.0).unwrap();
        // Second-largest input (0.98) should land near the top, not near 0
        assert!(out.get_pixel_unchecked(8, 9) > 0.9);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let map = FloatMap::new(4, 4).unwrap();
        assert!(percentile_stretch(&map, 50.0, 50.0).is_err());
        assert!(percentile_stretch(&map, 90.0, 10.0).is_err());
        assert!(percentile_stretch(&map, -1.0, 99.0).is_err());
        assert!(percentile_stretch(&map, 1.0, 100.5).is_err());
    }

    #[test]
    fn test_percentile_value_interpolates() {
        let data = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(percentile_value(&data, 0.0), 0.0);
        assert_eq!(percentile_value(&data, 100.0), 3.0);
        assert!((percentile_value(&data, 50.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_bank_independent() {
        let weak = FloatMap::new_with_value(4, 4, 0.0).unwrap();
        let strong = FloatMap::from_fn(4, 4, |x, y| (x + y) as f32).unwrap();
        let bank = normalize_bank(&[weak, strong], 0.0, 100.0).unwrap();
        assert!(bank[0].data().iter().all(|&v| v == 0.0));
        assert_eq!(bank[1].max(), 1.0);
    }
}
