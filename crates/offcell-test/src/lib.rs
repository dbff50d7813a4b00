//! offcell-test - Synthetic document images for tests
//!
//! The core contract is array-in/array-out, so the tests are hermetic:
//! instead of golden image files, this crate builds synthetic pages —
//! blank pages, pages with strokes, shaded (shadow-simulating) variants —
//! and a deterministic noise source.

use offcell_core::{PixelArray, Result};

/// A uniformly colored grayscale page
pub fn blank_page(width: u32, height: u32, value: u8) -> PixelArray {
    PixelArray::from_gray8(width, height, &vec![value; (width * height) as usize])
        .expect("valid synthetic page")
}

/// A grayscale page with one vertical stroke.
///
/// The page has `page` brightness everywhere except a `stroke_width`-wide
/// vertical line of `stroke` brightness starting at `column`.
pub fn vertical_stroke_page(
    width: u32,
    height: u32,
    page: u8,
    stroke: u8,
    column: u32,
    stroke_width: u32,
) -> PixelArray {
    let mut samples = vec![page; (width * height) as usize];
    for y in 0..height {
        for x in column..(column + stroke_width).min(width) {
            samples[(y * width + x) as usize] = stroke;
        }
    }
    PixelArray::from_gray8(width, height, &samples).expect("valid synthetic page")
}

/// Apply a smooth multiplicative shading gradient, simulating a shadow.
///
/// The shading factor runs linearly from `min_factor` at the left edge to
/// 1.0 at the right edge, so every pixel (text and background alike) is
/// darkened by the same local amount — the situation a handheld capture
/// under a side shadow produces.
pub fn with_shading_gradient(image: &PixelArray, min_factor: f32) -> Result<PixelArray> {
    let (w, h) = image.dimensions();
    let channels = image.channels();
    let denom = (w.saturating_sub(1)).max(1) as f32;

    let mut data = Vec::with_capacity(image.data().len());
    for y in 0..h {
        for x in 0..w {
            let factor = min_factor + (1.0 - min_factor) * x as f32 / denom;
            for c in 0..channels {
                data.push(image.sample_unchecked(x, y, c) * factor);
            }
        }
    }
    PixelArray::from_data(w, h, channels, image.max_value(), data)
}

/// An RGB page with one vertical stroke (page white-ish, stroke dark blue-gray)
pub fn rgb_stroke_page(width: u32, height: u32, column: u32) -> PixelArray {
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for _y in 0..height {
        for x in 0..width {
            if x == column {
                samples.extend_from_slice(&[40, 40, 60]);
            } else {
                samples.extend_from_slice(&[230, 228, 220]);
            }
        }
    }
    PixelArray::from_rgb8(width, height, &samples).expect("valid synthetic page")
}

/// Deterministic pseudo-random sampler (LCG, Numerical Recipes constants)
pub struct NoiseSampler {
    state: u64,
}

impl NoiseSampler {
    /// Create a sampler with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next uniform sample in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        const A: u64 = 1664525;
        const C: u64 = 1013904223;
        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        ((self.state >> 16) & 0xffff_ffff) as f32 / 4_294_967_296.0
    }

    /// Next uniform sample in [-amplitude, amplitude]
    pub fn next_signed(&mut self, amplitude: f32) -> f32 {
        (2.0 * self.next_f32() - 1.0) * amplitude
    }
}

/// Add deterministic uniform noise to every sample, clamped to the valid range
pub fn with_noise(image: &PixelArray, amplitude: f32, seed: u64) -> Result<PixelArray> {
    let mut sampler = NoiseSampler::new(seed);
    let data = image
        .data()
        .iter()
        .map(|&v| (v + sampler.next_signed(amplitude)).clamp(0.0, image.max_value()))
        .collect();
    PixelArray::from_data(
        image.width(),
        image.height(),
        image.channels(),
        image.max_value(),
        data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page() {
        let page = blank_page(10, 5, 220);
        assert_eq!(page.dimensions(), (10, 5));
        assert!(page.data().iter().all(|&v| v == 220.0));
    }

    #[test]
    fn test_vertical_stroke_page() {
        let page = vertical_stroke_page(20, 10, 220, 40, 8, 2);
        assert_eq!(page.sample_unchecked(8, 3, 0), 40.0);
        assert_eq!(page.sample_unchecked(9, 3, 0), 40.0);
        assert_eq!(page.sample_unchecked(10, 3, 0), 220.0);
        assert_eq!(page.sample_unchecked(7, 3, 0), 220.0);
    }

    #[test]
    fn test_shading_gradient_is_smooth_and_bounded() {
        let page = blank_page(50, 5, 200);
        let shaded = with_shading_gradient(&page, 0.4).unwrap();
        assert!((shaded.sample_unchecked(0, 0, 0) - 80.0).abs() < 1e-3);
        assert!((shaded.sample_unchecked(49, 0, 0) - 200.0).abs() < 1e-3);
        // Monotone along the row
        for x in 1..50 {
            assert!(shaded.sample_unchecked(x, 2, 0) >= shaded.sample_unchecked(x - 1, 2, 0));
        }
    }

    #[test]
    fn test_noise_deterministic_and_clamped() {
        let page = blank_page(16, 16, 250);
        let a = with_noise(&page, 10.0, 42).unwrap();
        let b = with_noise(&page, 10.0, 42).unwrap();
        assert_eq!(a.data(), b.data());
        assert!(a.data().iter().all(|&v| (0.0..=255.0).contains(&v)));
        // Noise actually perturbs
        assert!(a.data().iter().any(|&v| v != 250.0));
    }

    #[test]
    fn test_sampler_in_unit_interval() {
        let mut s = NoiseSampler::new(7);
        for _ in 0..1000 {
            let v = s.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
