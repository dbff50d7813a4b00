//! PixelArray - Immutable input image
//!
//! The pipeline accepts either a grayscale image (1 channel) or an RGB
//! image (3 channels, channel-last interleaved). Samples are non-negative
//! and may come from any bit depth; `max_value` records the full-scale
//! sample value (255 for 8-bit input, 65535 for 16-bit, ...) so the
//! luminance stage can map everything into [0, 1].
//!
//! The pipeline never mutates a `PixelArray`; it reads it once to build
//! the luminance map and discards nothing the caller owns.

use crate::error::{Error, Result};

/// Full-scale sample value for 8-bit input
pub const MAX_VALUE_8BIT: f32 = 255.0;

/// Full-scale sample value for 16-bit input
pub const MAX_VALUE_16BIT: f32 = 65535.0;

/// Immutable input image, grayscale or RGB
///
/// Data is interleaved channel-last in row-major order: the sample for
/// channel `c` of pixel (x, y) is at index
/// `(y * width + x) * channels + c`.
#[derive(Debug, Clone)]
pub struct PixelArray {
    width: u32,
    height: u32,
    channels: u32,
    max_value: f32,
    data: Vec<f32>,
}

impl PixelArray {
    /// Create an input image from raw interleaved samples
    ///
    /// Dimension and length checks happen here; the channel count is
    /// deliberately not restricted so that the luminance stage owns the
    /// shape check required by its contract.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for zero width/height or zero
    /// channels, and `Error::InvalidParameter` if the data length doesn't
    /// match `width * height * channels` or `max_value` is not positive.
    pub fn from_data(
        width: u32,
        height: u32,
        channels: u32,
        max_value: f32,
        data: Vec<f32>,
    ) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if !(max_value > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "max_value must be positive, got {max_value}"
            )));
        }

        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }

        Ok(PixelArray {
            width,
            height,
            channels,
            max_value,
            data,
        })
    }

    /// Create an 8-bit grayscale input image
    pub fn from_gray8(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let data = samples.iter().map(|&v| v as f32).collect();
        Self::from_data(width, height, 1, MAX_VALUE_8BIT, data)
    }

    /// Create an 8-bit RGB input image (interleaved, channel-last)
    pub fn from_rgb8(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let data = samples.iter().map(|&v| v as f32).collect();
        Self::from_data(width, height, 3, MAX_VALUE_8BIT, data)
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of channels (1 = grayscale, 3 = RGB)
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the full-scale sample value
    #[inline]
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Get the sample for channel `c` of pixel (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, c: u32) -> f32 {
        let idx = ((y as usize) * (self.width as usize) + (x as usize))
            * (self.channels as usize)
            + (c as usize);
        self.data[idx]
    }

    /// Get raw access to the interleaved samples
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
