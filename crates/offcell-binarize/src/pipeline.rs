//! The binarization pipeline entry point
//!
//! Strictly linear, synchronous, and pure: luminance extraction, the OFF
//! center-surround filter bank, per-scale normalization, multi-scale
//! combination, adaptive thresholding, then optional speckle removal.
//! Every intermediate map is owned by the invocation and dropped at
//! return; only the [`BinarizeOutput`] escapes.

use crate::BinarizeResult;
use crate::center_surround::response_bank;
use crate::combine::combine;
use crate::config::BinarizeConfig;
use crate::luminance::extract_luminance;
use crate::normalize::normalize_bank;
use crate::threshold::apply_threshold;
use offcell_core::{BinaryMap, PixelArray};
use offcell_region::remove_small_components;

/// Non-fatal conditions surfaced alongside the binary output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The input was flat (blank page); the output is all BACKGROUND
    DegenerateInput,
}

/// Output of a pipeline invocation
#[derive(Debug, Clone)]
pub struct BinarizeOutput {
    /// The binary TEXT/BACKGROUND map, same spatial shape as the input
    pub map: BinaryMap,
    /// The adaptive split point derived from the activation statistics
    pub threshold: f32,
    /// Non-fatal conditions encountered during the run
    pub warnings: Vec<Warning>,
}

/// Binarize a document image with the default configuration.
///
/// Works out of the box: multi-scale OFF center-surround activation,
/// max-rule combination, a global Otsu split, and removal of TEXT
/// components smaller than 10 pixels.
///
/// # Examples
///
/// ```
/// use offcell_core::PixelArray;
/// use offcell_binarize::binarize;
///
/// let page = PixelArray::from_gray8(64, 64, &[220u8; 64 * 64]).unwrap();
/// let output = binarize(&page).unwrap();
/// assert_eq!(output.map.count_text(), 0);
/// ```
pub fn binarize(image: &PixelArray) -> BinarizeResult<BinarizeOutput> {
    binarize_with(image, &BinarizeConfig::default())
}

/// Binarize a document image with an explicit configuration.
///
/// # Errors
///
/// Fails fast, before any computation, with `InvalidParameter` for a
/// malformed configuration or `InvalidShape` for an unsupported channel
/// count. Blank input is not an error; it yields an all-BACKGROUND map
/// plus [`Warning::DegenerateInput`].
pub fn binarize_with(
    image: &PixelArray,
    config: &BinarizeConfig,
) -> BinarizeResult<BinarizeOutput> {
    config.validate()?;

    let luminance = extract_luminance(image)?;
    let responses = response_bank(&luminance, &config.scales, config.surround_adaptation)?;
    drop(luminance);

    let normalized = normalize_bank(
        &responses,
        config.lower_percentile,
        config.upper_percentile,
    )?;
    drop(responses);

    let activation = combine(&normalized, &config.combine)?;
    drop(normalized);

    let result = apply_threshold(&activation, config.threshold)?;

    let mut warnings = Vec::new();
    if result.degenerate {
        warnings.push(Warning::DegenerateInput);
    }

    let map = match config.min_component_size {
        Some(min_size) if !result.degenerate => {
            remove_small_components(&result.map, min_size, config.connectivity)?
        }
        _ => result.map,
    };

    Ok(BinarizeOutput {
        map,
        threshold: result.threshold,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use offcell_core::Error;

    #[test]
    fn test_output_shape_matches_input() {
        let image = PixelArray::from_gray8(33, 21, &vec![200u8; 33 * 21]).unwrap();
        let output = binarize(&image).unwrap();
        assert_eq!(output.map.dimensions(), (33, 21));
    }

    #[test]
    fn test_blank_page_warns_degenerate() {
        let image = PixelArray::from_gray8(40, 40, &[128u8; 1600]).unwrap();
        let output = binarize(&image).unwrap();
        assert_eq!(output.warnings, vec![Warning::DegenerateInput]);
        assert_eq!(output.map.count_text(), 0);
    }

    #[test]
    fn test_invalid_config_fails_before_compute() {
        let image = PixelArray::from_gray8(8, 8, &[200u8; 64]).unwrap();
        let config = BinarizeConfig {
            scales: vec![],
            ..Default::default()
        };
        let result = binarize_with(&image, &config);
        assert!(matches!(
            result,
            Err(crate::BinarizeError::Core(Error::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_invalid_shape_reported() {
        let image = PixelArray::from_data(4, 4, 5, 255.0, vec![0.0; 80]).unwrap();
        let result = binarize(&image);
        assert!(matches!(
            result,
            Err(crate::BinarizeError::Core(Error::InvalidShape {
                channels: 5
            }))
        ));
    }

    #[test]
    fn test_failure_is_deterministic() {
        let image = PixelArray::from_data(4, 4, 2, 255.0, vec![0.0; 32]).unwrap();
        let a = binarize(&image);
        let b = binarize(&image);
        assert!(matches!(
            (a, b),
            (
                Err(crate::BinarizeError::Core(Error::InvalidShape { .. })),
                Err(crate::BinarizeError::Core(Error::InvalidShape { .. }))
            )
        ));
    }

    #[test]
    fn test_speckle_removal_disabled_keeps_map() {
        // With removal disabled, isolated detections survive; this only
        // checks the configuration path, the behavior is covered in the
        // integration tests.
        let image = PixelArray::from_gray8(16, 16, &[210u8; 256]).unwrap();
        let config = BinarizeConfig {
            min_component_size: None,
            ..Default::default()
        };
        let output = binarize_with(&image, &config).unwrap();
        assert_eq!(output.map.dimensions(), (16, 16));
    }
}
