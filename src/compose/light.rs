//! Light map derived from the base image's shading

use crate::io::error::{Result, computation_error};
use ndarray::{Array2, Array3, Axis};

/// Per-pixel greyscale of a normalized `(height, width, channel)` image
///
/// Each value is the arithmetic mean of the pixel's channels.
///
/// # Errors
///
/// Returns an error if the image has no channels
pub fn light_map(base: &Array3<f32>) -> Result<Array2<f32>> {
    base.mean_axis(Axis(2))
        .ok_or_else(|| computation_error("light map", &"image has no channels"))
}

/// Mix the light map into a multiplier for the pattern
///
/// `(1 - shadow) + shadow * light`: a shadow weight of zero gives a flat 1,
/// a weight of one passes the light map through unchanged. Weights above
/// one can push dark pixels below zero.
pub fn adjusted_light(light: &Array2<f32>, shadow: f32) -> Array2<f32> {
    light.mapv(|l| shadow.mul_add(l, 1.0 - shadow))
}
