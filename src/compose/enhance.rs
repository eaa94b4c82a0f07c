//! Fixed brightness and contrast enhancement of the tiled mosaic
//!
//! Both operations blend each sample against a "degenerate" reference:
//! black for brightness, a flat grey at the image's mean luma for contrast.
//! Samples are computed in single precision, clamped to [0, 255] and
//! truncated, so the integer results are stable across platforms.

use crate::compose::mask::luminance;
use image::{Rgb, RgbImage};

/// Extrapolate from `reference` towards `value` by `factor`
pub fn blend_channel(reference: u8, value: u8, factor: f32) -> u8 {
    let reference_f = f32::from(reference);
    let sample = factor.mul_add(f32::from(value) - reference_f, reference_f);
    if sample <= 0.0 {
        0
    } else if sample >= 255.0 {
        u8::MAX
    } else {
        sample as u8
    }
}

/// Scale every sample by `factor`
pub fn brightness(img: &RgbImage, factor: f32) -> RgbImage {
    map_channels(img, |v| blend_channel(0, v, factor))
}

/// Mean ITU-R 601 luma of the image, rounded half up
///
/// An empty image has a mean of zero.
pub fn mean_luminance(img: &RgbImage) -> u8 {
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return 0;
    }

    let total: u64 = img
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            u64::from(luminance(r, g, b))
        })
        .sum();

    let mean = total as f64 / count as f64;
    (mean + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Push every sample away from the image's mean luma by `factor`
pub fn contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_luminance(img);
    map_channels(img, |v| blend_channel(mean, v, factor))
}

/// Apply the cosmetic brightness then contrast step used on every mosaic
pub fn enhance_mosaic(img: &RgbImage, brightness_factor: f32, contrast_factor: f32) -> RgbImage {
    contrast(&brightness(img, brightness_factor), contrast_factor)
}

fn map_channels(img: &RgbImage, f: impl Fn(u8) -> u8) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        Rgb([f(r), f(g), f(b)])
    })
}
