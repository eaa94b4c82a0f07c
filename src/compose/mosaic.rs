//! Pattern tile sizing and tiling across the base canvas

use crate::io::configuration::MIN_TILE_SIZE;
use crate::raster::resize_exact;
use image::{RgbImage, imageops};

/// Size of one pattern repeat for a canvas of `width` x `height`
///
/// Each edge is the canvas edge divided by `tile_scale`, floored at
/// [`MIN_TILE_SIZE`] so very large divisors never yield empty tiles. A zero
/// divisor is treated as 1.
pub fn tile_dimensions(width: u32, height: u32, tile_scale: u32) -> (u32, u32) {
    let divisor = tile_scale.max(1);
    (
        (width / divisor).max(MIN_TILE_SIZE),
        (height / divisor).max(MIN_TILE_SIZE),
    )
}

/// Repeat `tile` from the top-left corner until a `width` x `height` canvas
/// is covered
///
/// Tiles overhanging the right or bottom edge are cropped.
pub fn tile_canvas(tile: &RgbImage, width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    let (tile_width, tile_height) = tile.dimensions();
    if tile_width == 0 || tile_height == 0 {
        return canvas;
    }

    for y in (0..height).step_by(tile_height as usize) {
        for x in (0..width).step_by(tile_width as usize) {
            imageops::replace(&mut canvas, tile, i64::from(x), i64::from(y));
        }
    }

    canvas
}

/// Resize `pattern` to one tile and tile it over a `width` x `height` canvas
pub fn build_mosaic(pattern: &RgbImage, width: u32, height: u32, tile_scale: u32) -> RgbImage {
    let (tile_width, tile_height) = tile_dimensions(width, height, tile_scale);
    let tile = resize_exact(pattern, tile_width, tile_height);
    tile_canvas(&tile, width, height)
}
