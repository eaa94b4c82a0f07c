//! Single-channel mask extraction and fitting to the base image

use crate::io::error::{Result, invalid_image};
use crate::raster::resize_exact;
use image::{DynamicImage, GrayImage, Luma};

/// Which channel of a decoded mask image carries the effect strength
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MaskChannel {
    /// ITU-R 601 luma of the color channels; alpha is ignored
    #[default]
    Luminance,
    /// The alpha channel; the image must have one
    Alpha,
}

// ITU-R 601 weights in 16.16 fixed point
const LUMA_RED: u32 = 19_595;
const LUMA_GREEN: u32 = 38_470;
const LUMA_BLUE: u32 = 7_471;
const LUMA_ROUNDING: u32 = 0x8000;

/// Fixed-point ITU-R 601 luma of one RGB sample
///
/// Greys map to themselves exactly.
pub const fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * LUMA_RED + g as u32 * LUMA_GREEN + b as u32 * LUMA_BLUE;
    ((weighted + LUMA_ROUNDING) >> 16) as u8
}

/// Reduce a decoded mask to one 8-bit channel
///
/// # Errors
///
/// Returns an error if:
/// - The image has zero width or height
/// - `Alpha` is requested for an image without an alpha channel
pub fn extract_mask(img: &DynamicImage, channel: MaskChannel) -> Result<GrayImage> {
    if img.width() == 0 || img.height() == 0 {
        return Err(invalid_image("mask", &"image is empty"));
    }

    match channel {
        MaskChannel::Luminance => {
            let rgb = img.to_rgb8();
            Ok(GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([luminance(r, g, b)])
            }))
        }
        MaskChannel::Alpha => {
            if !img.color().has_alpha() {
                return Err(invalid_image(
                    "mask",
                    &format!("{:?} has no alpha channel", img.color()),
                ));
            }
            let rgba = img.to_rgba8();
            Ok(GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                let [_, _, _, alpha] = rgba.get_pixel(x, y).0;
                Luma([alpha])
            }))
        }
    }
}

/// Resample a mask to the exact size of the base image
///
/// Expects a mask already reduced by [`extract_mask`], so interpolation runs
/// on the single effect channel rather than on color channels.
pub fn fit_mask(mask: &GrayImage, width: u32, height: u32) -> GrayImage {
    resize_exact(mask, width, height)
}
