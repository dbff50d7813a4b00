//! BinaryMap - Text/background output map
//!
//! The terminal artifact of the pipeline: one of two symbolic classes per
//! pixel, `true` = TEXT (dark ink) and `false` = BACKGROUND (page).
//! Ownership transfers to the caller; encoding it as an image file is the
//! concern of `offcell-io` or any codec the caller prefers.

use crate::error::{Error, Result};

/// 2-D map of TEXT/BACKGROUND classes
///
/// Stored row-major, one `bool` per pixel (`true` = TEXT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMap {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryMap {
    /// Create an all-BACKGROUND map
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(BinaryMap {
            width,
            height,
            data: vec![false; size],
        })
    }

    /// Create a map from raw row-major data
    pub fn from_data(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(BinaryMap {
            width,
            height,
            data,
        })
    }

    /// Get the map width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the map dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at (x, y) is TEXT
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn is_text(&self, x: u32, y: u32) -> bool {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the class of the pixel at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, text: bool) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = text;
    }

    /// Get raw access to the data
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Get mutable access to the data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [bool] {
        &mut self.data
    }

    /// Number of TEXT pixels
    pub fn count_text(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Fraction of pixels on which two maps agree
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the maps differ in size.
    pub fn agreement(&self, other: &BinaryMap) -> Result<f64> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let equal = self
            .data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a == b)
            .count();
        Ok(equal as f64 / self.data.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_background() {
        let map = BinaryMap::new(10, 10).unwrap();
        assert_eq!(map.count_text(), 0);
    }

    #[test]
    fn test_set_and_count() {
        let mut map = BinaryMap::new(4, 4).unwrap();
        map.set(1, 2, true);
        map.set(3, 3, true);
        assert!(map.is_text(1, 2));
        assert!(!map.is_text(0, 0));
        assert_eq!(map.count_text(), 2);
    }

    #[test]
    fn test_agreement_identical() {
        let mut a = BinaryMap::new(5, 5).unwrap();
        a.set(2, 2, true);
        let b = a.clone();
        assert_eq!(a.agreement(&b).unwrap(), 1.0);
    }

    #[test]
    fn test_agreement_partial() {
        let a = BinaryMap::new(2, 2).unwrap();
        let mut b = BinaryMap::new(2, 2).unwrap();
        b.set(0, 0, true);
        assert_eq!(a.agreement(&b).unwrap(), 0.75);
    }

    #[test]
    fn test_agreement_size_mismatch() {
        let a = BinaryMap::new(2, 2).unwrap();
        let b = BinaryMap::new(3, 2).unwrap();
        assert!(matches!(
            a.agreement(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
