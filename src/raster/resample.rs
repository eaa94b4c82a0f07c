//! Exact-size resampling shared by the mask and pattern stages

use crate::io::configuration::RESAMPLE_FILTER;
use image::{ImageBuffer, Pixel, imageops};

/// Resize an image to exactly `width` x `height`
///
/// Returns an untouched copy when the size already matches, so resampling
/// never softens inputs that are already the right size.
pub fn resize_exact<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, RESAMPLE_FILTER)
}
