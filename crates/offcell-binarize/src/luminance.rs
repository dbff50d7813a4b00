//! Luminance extraction
//!
//! Reduces the input image to a single [0, 1] luminance map. RGB inputs
//! are combined with Rec. 709 luma weights; grayscale inputs pass through
//! (copied, never mutating the caller's array). Dividing by the input's
//! full-scale value makes every later stage bit-depth independent.

use crate::BinarizeResult;
use offcell_core::{Error, FloatMap, PixelArray};

/// Rec. 709 luma weight for the red channel
pub const LUMA_RED: f32 = 0.2126;

/// Rec. 709 luma weight for the green channel
pub const LUMA_GREEN: f32 = 0.7152;

/// Rec. 709 luma weight for the blue channel
pub const LUMA_BLUE: f32 = 0.0722;

/// Extract a [0, 1] luminance map from a grayscale or RGB input image.
///
/// # Errors
///
/// Returns `Error::InvalidShape` for any channel count other than 1 or 3,
/// before touching any pixel data.
pub fn extract_luminance(image: &PixelArray) -> BinarizeResult<FloatMap> {
    let channels = image.channels();
    if channels != 1 && channels != 3 {
        return Err(Error::InvalidShape { channels }.into());
    }

    let (w, h) = image.dimensions();
    let inv_max = 1.0 / image.max_value();
    let mut map = FloatMap::new(w, h)?;

    match channels {
        1 => {
            for y in 0..h {
                for x in 0..w {
                    map.set_pixel_unchecked(x, y, image.sample_unchecked(x, y, 0) * inv_max);
                }
            }
        }
        _ => {
            for y in 0..h {
                for x in 0..w {
                    let r = image.sample_unchecked(x, y, 0);
                    let g = image.sample_unchecked(x, y, 1);
                    let b = image.sample_unchecked(x, y, 2);
                    let luma = LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b;
                    map.set_pixel_unchecked(x, y, luma * inv_max);
                }
            }
        }
    }

    Ok(map)
}
