//! Compositing constants and runtime configuration defaults

use image::imageops::FilterType;

// Cosmetic normalization applied to every mosaic before the user curves
/// Fixed brightness factor applied to the tiled mosaic
pub const MOSAIC_BRIGHTNESS: f32 = 1.1;
/// Fixed contrast factor applied to the tiled mosaic
pub const MOSAIC_CONTRAST: f32 = 1.1;

/// Smallest edge length of a pattern tile in pixels
pub const MIN_TILE_SIZE: u32 = 8;

/// Filter used for mask and pattern resampling (bicubic)
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Scale between 8-bit samples and normalized channel values
pub const CHANNEL_MAX: f32 = 255.0;

// Presentation defaults for the command line
/// Default shadow mix weight
pub const DEFAULT_SHADOW: f32 = 0.8;
/// Default color boost exponent base
pub const DEFAULT_COLOR_BOOST: f32 = 1.75;
/// Default contrast multiplier
pub const DEFAULT_CONTRAST: f32 = 2.5;
/// Default tile scale divisor
pub const DEFAULT_TILE_SCALE: u32 = 2;

// Typical operating ranges, shown in help text but not enforced
/// Useful range of the shadow mix weight
pub const SHADOW_RANGE: (f32, f32) = (0.0, 1.25);
/// Useful range of the color boost
pub const COLOR_BOOST_RANGE: (f32, f32) = (0.8, 3.0);
/// Useful range of the contrast multiplier
pub const CONTRAST_RANGE: (f32, f32) = (0.5, 4.0);
/// Useful range of the tile scale divisor
pub const TILE_SCALE_RANGE: (u32, u32) = (1, 10);

// Preset catalog layout
/// Subdirectory holding preset model photographs
pub const MODELS_DIR: &str = "models";
/// Subdirectory holding preset masks
pub const MASKS_DIR: &str = "masks";
/// Extensions accepted for preset model photographs
pub const MODEL_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
/// Extensions accepted for preset masks
pub const MASK_EXTENSIONS: &[&str] = &["png"];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of written results
pub const OUTPUT_EXTENSION: &str = "png";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
