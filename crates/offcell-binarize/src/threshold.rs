//! Adaptive thresholding
//!
//! Converts the combined activation map into the binary output. The split
//! point is derived from the activation map's own statistics (Otsu's
//! between-class-variance criterion), never a fixed constant: the
//! center-surround stage already removed the page-wide illumination shift,
//! so background and text form two populations a single global split
//! separates well. A windowed variant computes per-tile splits for extreme
//! residual gradients, falling back to the global split on tiles too flat
//! to carry a bimodal histogram.

use crate::BinarizeResult;
use crate::config::ThresholdStrategy;
use offcell_core::{BinaryMap, Error, FloatMap};

/// Histogram resolution for the Otsu split
pub const ACTIVATION_BINS: usize = 256;

/// Activation spread below which the whole map counts as degenerate
pub const DEGENERATE_SPREAD: f32 = 1e-6;

/// Tile spread below which a windowed tile reuses the global split
pub const MIN_TILE_SPREAD: f32 = 0.05;

/// Result of the thresholding stage
#[derive(Debug, Clone)]
pub struct ThresholdResult {
    /// The binary TEXT/BACKGROUND map
    pub map: BinaryMap,
    /// The global split point that was derived (or fallen back to)
    pub threshold: f32,
    /// True if the activation map had no variance (blank input); the map
    /// is then all BACKGROUND
    pub degenerate: bool,
}

/// Split an activation map into TEXT (>= threshold) and BACKGROUND.
pub fn apply_threshold(
    map: &FloatMap,
    strategy: ThresholdStrategy,
) -> BinarizeResult<ThresholdResult> {
    if let ThresholdStrategy::Windowed { window } = strategy {
        if window < 2 {
            return Err(Error::InvalidParameter(format!(
                "threshold window must be >= 2, got {window}"
            ))
            .into());
        }
    }

    let (w, h) = map.dimensions();
    let lo = map.min();
    let hi = map.max();

    if hi - lo < DEGENERATE_SPREAD {
        // Blank input: no text/background separation exists. Report the
        // top of the reference interval so nothing could have passed.
        return Ok(ThresholdResult {
            map: BinaryMap::new(w, h)?,
            threshold: 1.0,
            degenerate: true,
        });
    }

    let global = otsu_split(map.data(), lo, hi);
    let mut out = BinaryMap::new(w, h)?;

    match strategy {
        ThresholdStrategy::GlobalOtsu => {
            for y in 0..h {
                for x in 0..w {
                    out.set(x, y, map.get_pixel_unchecked(x, y) >= global);
                }
            }
        }
        ThresholdStrategy::Windowed { window } => {
            for tile_y in (0..h).step_by(window as usize) {
                let tile_h = window.min(h - tile_y);
                for tile_x in (0..w).step_by(window as usize) {
                    let tile_w = window.min(w - tile_x);

                    let mut values = Vec::with_capacity((tile_w * tile_h) as usize);
                    for y in tile_y..tile_y + tile_h {
                        values.extend_from_slice(
                            &map.row(y)[tile_x as usize..(tile_x + tile_w) as usize],
                        );
                    }

                    let tile_lo = values.iter().cloned().fold(f32::INFINITY, f32::min);
                    let tile_hi = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                    let split = if tile_hi - tile_lo < MIN_TILE_SPREAD {
                        global
                    } else {
                        otsu_split(&values, tile_lo, tile_hi)
                    };

                    for y in tile_y..tile_y + tile_h {
                        for x in tile_x..tile_x + tile_w {
                            out.set(x, y, map.get_pixel_unchecked(x, y) >= split);
                        }
                    }
                }
            }
        }
    }

    Ok(ThresholdResult {
        map: out,
        threshold: global,
        degenerate: false,
    })
}

/// Otsu's split over a 256-bin histogram of `data` spanning [lo, hi].
///
/// Returns the value maximizing the between-class variance; callers
/// guarantee `hi > lo`.
fn otsu_split(data: &[f32], lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    let mut hist = [0u64; ACTIVATION_BINS];
    for &v in data {
        let bin = (((v - lo) / span) * (ACTIVATION_BINS - 1) as f32) as usize;
        hist[bin.min(ACTIVATION_BINS - 1)] += 1;
    }

    let total = data.len() as f64;
    let total_sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best_var = -1.0f64;
    let mut best_bin = 0usize;

    for (bin, &count) in hist.iter().enumerate().take(ACTIVATION_BINS - 1) {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }

        sum_bg += bin as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (total_sum - sum_bg) / weight_fg;
        let between = weight_bg * weight_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg);

        if between > best_var {
            best_var = between;
            best_bin = bin;
        }
    }

    if best_var < 0.0 {
        // Single populated bin: split at the midpoint
        return lo + span * 0.5;
    }

    // Everything at or below best_bin is background; the threshold sits at
    // the lower edge of the next bin, on the same scale the binning used.
    lo + span * (best_bin + 1) as f32 / (ACTIVATION_BINS - 1) as f32
}
