//! User-facing compositing parameters and their validation

use crate::io::configuration::{
    DEFAULT_COLOR_BOOST, DEFAULT_CONTRAST, DEFAULT_SHADOW, DEFAULT_TILE_SCALE,
};
use crate::io::error::{Result, invalid_parameter};

/// The four scalars that steer a composite
///
/// Passed explicitly into every call; the compositor keeps no other state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeParams {
    /// Shadow mix weight α: 0 shows the pattern flat, around 1 lets the base
    /// shading through completely
    pub shadow: f32,
    /// Color boost b: the processed pattern is raised to `1 / b`
    pub color_boost: f32,
    /// Contrast multiplier around mid-grey, 1 is identity
    pub contrast: f32,
    /// Divisor applied to the base size to get one pattern tile
    pub tile_scale: u32,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            shadow: DEFAULT_SHADOW,
            color_boost: DEFAULT_COLOR_BOOST,
            contrast: DEFAULT_CONTRAST,
            tile_scale: DEFAULT_TILE_SCALE,
        }
    }
}

impl CompositeParams {
    /// Build a parameter set without validating it
    pub const fn new(shadow: f32, color_boost: f32, contrast: f32, tile_scale: u32) -> Self {
        Self {
            shadow,
            color_boost,
            contrast,
            tile_scale,
        }
    }

    /// Check every parameter against the compositor's contract
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any float parameter is NaN or infinite
    /// - `color_boost` is zero or negative
    /// - `contrast` is negative
    /// - `tile_scale` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.shadow.is_finite() {
            return Err(invalid_parameter(
                "shadow",
                &self.shadow,
                &"must be finite",
            ));
        }

        if !self.color_boost.is_finite() || self.color_boost <= 0.0 {
            return Err(invalid_parameter(
                "color_boost",
                &self.color_boost,
                &"must be a finite value greater than zero",
            ));
        }

        if !self.contrast.is_finite() || self.contrast < 0.0 {
            return Err(invalid_parameter(
                "contrast",
                &self.contrast,
                &"must be a finite, non-negative value",
            ));
        }

        if self.tile_scale < 1 {
            return Err(invalid_parameter(
                "tile_scale",
                &self.tile_scale,
                &"must be at least 1",
            ));
        }

        Ok(())
    }
}
