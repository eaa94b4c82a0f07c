//! Masked pattern compositing for photographs
//!
//! Tiles a pattern image across a base photograph, lights it with the base
//! image's own shading, shapes it with a color boost and contrast curve, and
//! blends it into the region selected by a mask.

#![forbid(unsafe_code)]

/// Compositing pipeline: parameters, mask handling, mosaic, tone and blend
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Conversions between image buffers and normalized arrays
pub mod raster;

pub use compose::{CompositeParams, MaskChannel, PatternCompositor, composite};
pub use io::error::{CompositeError, Result};
