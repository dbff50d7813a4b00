//! Separable convolution over FloatMap
//!
//! A single 1-D kernel is applied along rows, then along columns of the
//! intermediate result. Border pixels are resolved by reflecting or
//! replicating coordinates, so the output always has the input's exact
//! dimensions and no out-of-bounds read can occur.

use crate::{FilterResult, Kernel};
use offcell_core::FloatMap;

/// How coordinates outside the map are resolved during convolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// Mirror reflection about the edge: `-1 -> 0`, `-2 -> 1`, `w -> w-1`
    #[default]
    Mirror,
    /// Clamp to the nearest edge pixel
    Replicate,
}

impl Border {
    /// Map a possibly out-of-range coordinate into `[0, len)`
    #[inline]
    fn resolve(self, i: i64, len: i64) -> i64 {
        match self {
            Border::Mirror => {
                let mut i = i;
                // Repeated reflection handles kernels wider than the map
                loop {
                    if i < 0 {
                        i = -i - 1;
                    } else if i >= len {
                        i = 2 * len - i - 1;
                    } else {
                        return i;
                    }
                }
            }
            Border::Replicate => i.clamp(0, len - 1),
        }
    }
}

/// Convolve a map with a 1-D kernel along rows, then columns.
///
/// Equivalent to convolving with the 2-D outer product of the kernel with
/// itself, at separable cost. The output has the input's dimensions.
pub fn smooth(map: &FloatMap, kernel: &Kernel, border: Border) -> FilterResult<FloatMap> {
    let horizontal = convolve_rows(map, kernel, border)?;
    convolve_cols(&horizontal, kernel, border)
}

/// Gaussian smoothing convenience wrapper
pub fn gaussian_smooth(map: &FloatMap, sigma: f32, border: Border) -> FilterResult<FloatMap> {
    let kernel = Kernel::gaussian(sigma)?;
    smooth(map, &kernel, border)
}

fn convolve_rows(map: &FloatMap, kernel: &Kernel, border: Border) -> FilterResult<FloatMap> {
    let w = map.width();
    let h = map.height();
    let radius = kernel.radius() as i64;
    let taps = kernel.taps();

    let mut out = FloatMap::new(w, h)?;
    for y in 0..h {
        let row = map.row(y);
        for x in 0..w {
            let mut sum = 0.0f32;
            for (t, &tap) in taps.iter().enumerate() {
                let sx = border.resolve(x as i64 + t as i64 - radius, w as i64);
                sum += row[sx as usize] * tap;
            }
            out.set_pixel_unchecked(x, y, sum);
        }
    }
    Ok(out)
}

fn convolve_cols(map: &FloatMap, kernel: &Kernel, border: Border) -> FilterResult<FloatMap> {
    let w = map.width();
    let h = map.height();
    let radius = kernel.radius() as i64;
    let taps = kernel.taps();

    let mut out = FloatMap::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (t, &tap) in taps.iter().enumerate() {
                let sy = border.resolve(y as i64 + t as i64 - radius, h as i64);
                sum += map.get_pixel_unchecked(x, sy as u32) * tap;
            }
            out.set_pixel_unchecked(x, y, sum);
        }
    }
    Ok(out)
}
