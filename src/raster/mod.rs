//! Raster plumbing between `image` buffers and `ndarray` arrays

/// Normalization and denormalization of pixel buffers
pub mod convert;
/// Size-exact resampling
pub mod resample;

pub use convert::{array_to_rgb, luma_to_array, rgb_to_array};
pub use resample::resize_exact;
