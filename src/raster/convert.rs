//! Conversion between 8-bit image buffers and normalized float arrays
//!
//! Arrays are laid out `(row, col)` for single-channel data and
//! `(row, col, channel)` for RGB, matching the pixel order of `image` buffers.

use crate::io::configuration::CHANNEL_MAX;
use crate::io::error::{Result, computation_error};
use image::{GrayImage, RgbImage};
use ndarray::{Array2, Array3};

/// Number of color channels carried through the pipeline
pub const RGB_CHANNELS: usize = 3;

/// Normalize an RGB image into a `(height, width, 3)` array in [0, 1]
///
/// # Errors
///
/// Returns an error if the buffer length disagrees with its dimensions
pub fn rgb_to_array(img: &RgbImage) -> Result<Array3<f32>> {
    let (width, height) = img.dimensions();
    let samples = img.as_raw().iter().map(|&v| f32::from(v) / CHANNEL_MAX);
    Array3::from_shape_vec(
        (height as usize, width as usize, RGB_CHANNELS),
        samples.collect(),
    )
    .map_err(|e| computation_error("rgb normalization", &e))
}

/// Normalize a greyscale image into a `(height, width)` array in [0, 1]
///
/// # Errors
///
/// Returns an error if the buffer length disagrees with its dimensions
pub fn luma_to_array(img: &GrayImage) -> Result<Array2<f32>> {
    let (width, height) = img.dimensions();
    let samples = img.as_raw().iter().map(|&v| f32::from(v) / CHANNEL_MAX);
    Array2::from_shape_vec((height as usize, width as usize), samples.collect())
        .map_err(|e| computation_error("mask normalization", &e))
}

/// Convert a normalized channel value back to an 8-bit sample
///
/// Values are clamped to [0, 1] and rounded to the nearest integer.
pub fn denormalize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8
}

/// Denormalize a `(height, width, 3)` array into an RGB image
///
/// # Errors
///
/// Returns an error if the array does not have three channels or its
/// dimensions exceed the image size limits
pub fn array_to_rgb(data: &Array3<f32>) -> Result<RgbImage> {
    let (height, width, channels) = data.dim();
    if channels != RGB_CHANNELS {
        return Err(computation_error(
            "rgb denormalization",
            &format!("expected {RGB_CHANNELS} channels, found {channels}"),
        ));
    }

    let width = u32::try_from(width).map_err(|e| computation_error("rgb denormalization", &e))?;
    let height =
        u32::try_from(height).map_err(|e| computation_error("rgb denormalization", &e))?;

    // Logical iteration order is row-major regardless of memory layout
    let samples: Vec<u8> = data.iter().map(|&v| denormalize(v)).collect();

    RgbImage::from_raw(width, height, samples).ok_or_else(|| {
        computation_error("rgb denormalization", &"sample count does not fit dimensions")
    })
}
