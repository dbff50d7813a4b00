//! OFF center-surround filter bank
//!
//! Models one OFF ganglion cell per pixel and scale: a narrow Gaussian
//! "center" average and a wider Gaussian "surround" average of the
//! luminance map. The cell fires where the center is darker than the
//! surround — exactly what ink on a brighter page produces locally,
//! regardless of the page's absolute brightness.
//!
//! The rectified response can optionally be shaped by the surround
//! luminance, `a' = (1 + s) * a / (s + a)`: under a dim (shadowed)
//! surround the same absolute decrement yields a stronger response, which
//! is what makes the method hold up under stains and shadow gradients.

use crate::BinarizeResult;
use crate::config::Scale;
use offcell_core::FloatMap;
use offcell_filter::{Border, gaussian_smooth};

/// Guard against 0/0 in the adaptation ratio on perfectly black regions
const ADAPTATION_EPS: f32 = 1e-12;

/// Compute the rectified OFF response of the luminance map at one scale.
///
/// The response is `max(surround - center, 0)`: strictly positive only
/// where the narrow neighborhood is darker than the broad one; the
/// opposite polarity (bright details on dark ground) is clipped to zero.
/// Border pixels use mirror padding, so the output never shrinks.
///
/// # Errors
///
/// Returns `InvalidParameter` for a malformed scale, before any smoothing.
pub fn off_response(
    luminance: &FloatMap,
    scale: &Scale,
    surround_adaptation: bool,
) -> BinarizeResult<FloatMap> {
    scale.validate()?;

    let center = gaussian_smooth(luminance, scale.sigma_center, Border::Mirror)?;
    let surround = gaussian_smooth(luminance, scale.sigma_surround, Border::Mirror)?;

    let (w, h) = luminance.dimensions();
    let mut response = FloatMap::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let s = surround.get_pixel_unchecked(x, y);
            let a = (s - center.get_pixel_unchecked(x, y)).max(0.0);
            let value = if surround_adaptation {
                adapt(a, s)
            } else {
                a
            };
            response.set_pixel_unchecked(x, y, value);
        }
    }

    Ok(response)
}

/// Compute one rectified response map per configured scale.
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty scale list or any malformed
/// scale; validation completes before the first smoothing pass.
pub fn response_bank(
    luminance: &FloatMap,
    scales: &[Scale],
    surround_adaptation: bool,
) -> BinarizeResult<Vec<FloatMap>> {
    if scales.is_empty() {
        return Err(offcell_core::Error::InvalidParameter(
            "scale list must not be empty".into(),
        )
        .into());
    }
    for scale in scales {
        scale.validate()?;
    }

    scales
        .iter()
        .map(|scale| off_response(luminance, scale, surround_adaptation))
        .collect()
}

/// Surround-luminance adaptation of a rectified response.
///
/// Monotonic in `a` for fixed `s` and maps [0, 1] responses into [0, 1];
/// zero response stays zero.
#[inline]
fn adapt(a: f32, s: f32) -> f32 {
    if a + s < ADAPTATION_EPS {
        return 0.0;
    }
    ((1.0 + s) * a) / (s + a)
}
