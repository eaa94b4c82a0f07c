//! Masked pattern compositing pipeline
//!
//! The pipeline is a fixed sequence of whole-image stages:
//!
//! 1. Resize the mask to the base image
//! 2. Tile the resized pattern over the base canvas
//! 3. Apply the cosmetic brightness/contrast step to the mosaic
//! 4. Normalize base, mask and mosaic to [0, 1]
//! 5. Light the mosaic with the base image's greyscale shading
//! 6. Apply the color boost and contrast curves
//! 7. Blend pattern and base through the mask
//!
//! Inputs are never modified; every call returns a fresh image.

use crate::compose::enhance::enhance_mosaic;
use crate::compose::light::{adjusted_light, light_map};
use crate::compose::mask::{MaskChannel, extract_mask, fit_mask};
use crate::compose::mosaic::{build_mosaic, tile_dimensions};
use crate::compose::params::CompositeParams;
use crate::compose::tone::tone_sample;
use crate::io::configuration::{MOSAIC_BRIGHTNESS, MOSAIC_CONTRAST};
use crate::io::error::{CompositeError, Result, invalid_image};
use crate::raster::convert::RGB_CHANNELS;
use crate::raster::{array_to_rgb, luma_to_array, rgb_to_array};
use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::{Array2, Array3, Axis, Zip};
use tracing::debug;

/// Normalized inputs to the final masked blend
///
/// All three rasters share the base image's pixel dimensions.
#[derive(Debug, Clone)]
pub struct Layers {
    /// Base image, `(height, width, 3)` in [0, 1]
    pub base: Array3<f32>,
    /// Fully processed pattern, `(height, width, 3)` in [0, 1]
    pub pattern: Array3<f32>,
    /// Effect strength, `(height, width)` in [0, 1]
    pub mask: Array2<f32>,
}

impl Layers {
    /// Pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        let (height, width, _) = self.base.dim();
        (width as u32, height as u32)
    }

    /// Convex per-pixel blend `pattern * mask + base * (1 - mask)`
    ///
    /// # Errors
    ///
    /// Returns an error if the three layers disagree in size
    pub fn blend(&self) -> Result<Array3<f32>> {
        let expected = self.dimensions();
        if self.pattern.dim() != self.base.dim() {
            let (height, width, _) = self.pattern.dim();
            return Err(CompositeError::DimensionMismatch {
                expected,
                actual: (width as u32, height as u32),
            });
        }

        check_plane(&self.mask, self.base.dim())?;

        let mut out = Array3::<f32>::zeros(self.base.dim());
        Zip::from(out.lanes_mut(Axis(2)))
            .and(self.base.lanes(Axis(2)))
            .and(self.pattern.lanes(Axis(2)))
            .and(&self.mask)
            .for_each(|lane, base, pattern, &m| {
                Zip::from(lane)
                    .and(base)
                    .and(pattern)
                    .for_each(|o, &b, &p| *o = p.mul_add(m, b * (1.0 - m)));
            });

        Ok(out)
    }
}

/// Composites a tiled pattern onto the masked region of a base image
#[derive(Debug, Clone)]
pub struct PatternCompositor {
    params: CompositeParams,
}

impl PatternCompositor {
    /// Create a compositor with validated parameters
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is outside its valid range
    pub fn new(params: CompositeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this compositor applies
    pub const fn params(&self) -> &CompositeParams {
        &self.params
    }

    /// Run every stage up to, but not including, the masked blend
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any input has zero width or height
    /// - A normalization or light map computation fails
    pub fn prepare(&self, base: &RgbImage, mask: &GrayImage, pattern: &RgbImage) -> Result<Layers> {
        ensure_non_empty("base", base.dimensions())?;
        ensure_non_empty("mask", mask.dimensions())?;
        ensure_non_empty("pattern", pattern.dimensions())?;

        let (width, height) = base.dimensions();
        let mask = fit_mask(mask, width, height);

        let (tile_width, tile_height) = tile_dimensions(width, height, self.params.tile_scale);
        debug!(
            width,
            height,
            tile_width,
            tile_height,
            "Tiling pattern over base canvas"
        );
        let mosaic = build_mosaic(pattern, width, height, self.params.tile_scale);
        let mosaic = enhance_mosaic(&mosaic, MOSAIC_BRIGHTNESS, MOSAIC_CONTRAST);

        let base = rgb_to_array(base)?;
        let mask = luma_to_array(&mask)?;
        let mosaic = rgb_to_array(&mosaic)?;

        let light = adjusted_light(&light_map(&base)?, self.params.shadow);
        check_plane(&light, mosaic.dim())?;

        debug!(
            shadow = self.params.shadow,
            color_boost = self.params.color_boost,
            contrast = self.params.contrast,
            "Applying light and tone curves"
        );
        let boost = self.params.color_boost;
        let contrast = self.params.contrast;
        let mut pattern = Array3::<f32>::zeros(mosaic.dim());
        Zip::from(pattern.lanes_mut(Axis(2)))
            .and(mosaic.lanes(Axis(2)))
            .and(&light)
            .for_each(|lane, src, &l| {
                Zip::from(lane)
                    .and(src)
                    .for_each(|o, &p| *o = tone_sample(p, l, boost, contrast));
            });

        Ok(Layers {
            base,
            pattern,
            mask,
        })
    }

    /// Composite `pattern` onto the region of `base` selected by `mask`
    ///
    /// The mask is resized to the base image first. The result always has the
    /// base image's dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is empty or a pipeline stage fails
    pub fn composite(
        &self,
        base: &RgbImage,
        mask: &GrayImage,
        pattern: &RgbImage,
    ) -> Result<RgbImage> {
        let layers = self.prepare(base, mask, pattern)?;
        let blended = layers.blend()?;
        array_to_rgb(&blended)
    }

    /// Composite decoded images of any color layout
    ///
    /// Base and pattern are converted to RGB; the mask is reduced to the
    /// selected channel.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is empty, the mask lacks the requested
    /// channel, or a pipeline stage fails
    pub fn composite_dynamic(
        &self,
        base: &DynamicImage,
        mask: &DynamicImage,
        pattern: &DynamicImage,
        channel: MaskChannel,
    ) -> Result<RgbImage> {
        let mask = extract_mask(mask, channel)?;
        self.composite(&base.to_rgb8(), &mask, &pattern.to_rgb8())
    }
}

/// Composite with a one-off compositor built from `params`
///
/// # Errors
///
/// Returns an error if the parameters are invalid, any input is empty, or a
/// pipeline stage fails
pub fn composite(
    base: &RgbImage,
    mask: &GrayImage,
    pattern: &RgbImage,
    params: &CompositeParams,
) -> Result<RgbImage> {
    PatternCompositor::new(*params)?.composite(base, mask, pattern)
}

fn ensure_non_empty(input: &'static str, (width, height): (u32, u32)) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_image(
            input,
            &format!("image is empty ({width}x{height})"),
        ));
    }
    Ok(())
}

// Zip panics on mismatched shapes, so planes are checked against the image first
fn check_plane(plane: &Array2<f32>, shape: (usize, usize, usize)) -> Result<()> {
    let (height, width, channels) = shape;
    let (plane_height, plane_width) = plane.dim();
    if (plane_height, plane_width) != (height, width) || channels != RGB_CHANNELS {
        return Err(CompositeError::DimensionMismatch {
            expected: (width as u32, height as u32),
            actual: (plane_width as u32, plane_height as u32),
        });
    }
    Ok(())
}
