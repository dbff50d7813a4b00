//! offcell-io - Image file glue for the binarization pipeline
//!
//! The core contract ends at in-memory arrays: this crate is the external
//! collaborator that decodes image files into [`PixelArray`] inputs and
//! encodes [`BinaryMap`] outputs as image files. Grayscale files keep
//! their bit depth; everything else is decoded to 8-bit RGB.

mod error;

use image::DynamicImage;
use offcell_core::{BinaryMap, PixelArray};
use std::path::Path;

pub use error::{IoError, IoResult};

/// Decode an image file into a pipeline input.
///
/// 8-bit and 16-bit grayscale files become 1-channel arrays with the
/// matching full-scale value; any other color type is converted to 8-bit
/// RGB first.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelArray> {
    let decoded = image::open(path).map_err(|e| IoError::Decode(e.to_string()))?;

    let array = match decoded {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            PixelArray::from_gray8(w, h, buf.as_raw())?
        }
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            let data = buf.as_raw().iter().map(|&v| v as f32).collect();
            PixelArray::from_data(w, h, 1, offcell_core::pixel_array::MAX_VALUE_16BIT, data)?
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            PixelArray::from_rgb8(w, h, rgb.as_raw())?
        }
    };

    Ok(array)
}

/// Render a binary map as 8-bit grayscale samples: TEXT black, BACKGROUND white
pub fn mask_to_gray8(map: &BinaryMap) -> Vec<u8> {
    map.data().iter().map(|&text| if text { 0 } else { 255 }).collect()
}

/// Encode a binary map as an image file (format chosen by extension).
pub fn write_mask<P: AsRef<Path>>(map: &BinaryMap, path: P) -> IoResult<()> {
    let (w, h) = map.dimensions();
    let buf = image::GrayImage::from_raw(w, h, mask_to_gray8(map))
        .ok_or_else(|| IoError::Encode("mask buffer size mismatch".into()))?;
    buf.save(path).map_err(|e| IoError::Encode(e.to_string()))
}
