//! Pattern compositing pipeline and its stages

/// Full pipeline and masked blend
pub mod compositor;
/// Fixed cosmetic enhancement of the mosaic
pub mod enhance;
/// Light map derived from base image shading
pub mod light;
/// Mask channel extraction and resizing
pub mod mask;
/// Tile sizing and tiling
pub mod mosaic;
/// Compositing parameters and validation
pub mod params;
/// Color boost and contrast curves
pub mod tone;

pub use compositor::{Layers, PatternCompositor, composite};
pub use mask::MaskChannel;
pub use params::CompositeParams;
