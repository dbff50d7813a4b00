//! Regression tests for robustness to illumination, noise, and stroke
//! width on synthetic pages.

use offcell_binarize::{
    BinarizeConfig, Scale, binarize, binarize_with, extract_luminance, off_response,
};
use offcell_core::BinaryMap;
use offcell_test::{vertical_stroke_page, with_noise, with_shading_gradient};

fn assert_column_all_text(map: &BinaryMap, x: u32) {
    for y in 0..map.height() {
        assert!(map.is_text(x, y), "expected TEXT at ({x}, {y})");
    }
}

#[test]
fn test_shading_gradient_leaves_mask_stable() {
    // The same stroke pattern, flat and under a smooth side shadow that
    // takes 30% of the brightness at the left edge. The two masks must
    // agree on at least 95% of the pixels and both must carry the stroke.
    let flat = vertical_stroke_page(100, 80, 200, 30, 40, 2);
    let shaded = with_shading_gradient(&flat, 0.7).unwrap();

    let mask_flat = binarize(&flat).unwrap().map;
    let mask_shaded = binarize(&shaded).unwrap().map;

    for x in [40u32, 41] {
        assert_column_all_text(&mask_flat, x);
        assert_column_all_text(&mask_shaded, x);
    }
    assert!(mask_flat.agreement(&mask_shaded).unwrap() >= 0.95);
}

#[test]
fn test_global_brightness_leaves_mask_stable() {
    // Scaling every sample by a constant factor changes nothing the
    // center-surround decrement cares about after normalization.
    let bright = vertical_stroke_page(100, 80, 220, 40, 40, 2);
    let dim = vertical_stroke_page(100, 80, 140, 25, 40, 2);

    let mask_bright = binarize(&bright).unwrap().map;
    let mask_dim = binarize(&dim).unwrap().map;

    for x in [40u32, 41] {
        assert_column_all_text(&mask_bright, x);
        assert_column_all_text(&mask_dim, x);
    }
    assert!(mask_bright.agreement(&mask_dim).unwrap() >= 0.95);
}

#[test]
fn test_sensor_noise_does_not_break_detection() {
    let clean = vertical_stroke_page(100, 100, 220, 40, 50, 2);
    let noisy = with_noise(&clean, 6.0, 7).unwrap();

    let mask = binarize(&noisy).unwrap().map;

    assert_column_all_text(&mask, 50);
    assert_column_all_text(&mask, 51);

    // Away from the stroke the page stays essentially clean: any noise
    // exceedances are isolated and removed as speckles.
    let mut spurious = 0usize;
    let mut background = 0usize;
    for y in 0..100 {
        for x in (0..44).chain(58..100) {
            background += 1;
            if mask.is_text(x, y) {
                spurious += 1;
            }
        }
    }
    assert!(
        (spurious as f64) < 0.005 * background as f64,
        "{spurious} spurious TEXT pixels on {background} background pixels"
    );
}

#[test]
fn test_thin_stroke_needs_a_fine_center() {
    // A 1 px stroke barely registers under a center Gaussian much wider
    // than the stroke; a stroke-width center sees it at full strength.
    let page = vertical_stroke_page(100, 60, 220, 40, 50, 1);
    let luminance = extract_luminance(&page).unwrap();

    let coarse = off_response(&luminance, &Scale::new(3.0, 25.0), false).unwrap();
    let fine = off_response(&luminance, &Scale::new(0.5, 4.0), false).unwrap();

    assert!(fine.max() > 0.3);
    assert!(coarse.max() < 0.3 * fine.max());
}

#[test]
fn test_fine_scale_recovers_thin_stroke() {
    // The default scale set includes a stroke-width center, so the thin
    // stroke of the previous test is detected end to end.
    let page = vertical_stroke_page(100, 60, 220, 40, 50, 1);
    let output = binarize_with(&page, &BinarizeConfig::default()).unwrap();
    assert_column_all_text(&output.map, 50);
}
