//! Tests for tile sizing and pattern tiling

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use patternfit::compose::mosaic::{build_mosaic, tile_canvas, tile_dimensions};

    fn numbered_tile(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 200]))
    }

    // Tests the tile edge is the base edge divided by the scale
    #[test]
    fn test_tile_dimensions_divide() {
        assert_eq!(tile_dimensions(64, 64, 8), (8, 8));
        assert_eq!(tile_dimensions(100, 50, 3), (33, 16));
        assert_eq!(tile_dimensions(640, 480, 1), (640, 480));
    }

    // Tests tiles never shrink below the 8 pixel floor
    // Verified by removing the minimum clamp
    #[test]
    fn test_tile_dimensions_floor() {
        assert_eq!(tile_dimensions(16, 16, 1000), (8, 8));
        assert_eq!(tile_dimensions(4, 30, 2), (8, 15));
    }

    // Tests a zero divisor behaves like one instead of panicking
    #[test]
    fn test_tile_dimensions_zero_scale() {
        assert_eq!(tile_dimensions(20, 10, 0), (20, 10));
    }

    // Tests the tile repeats from the origin and is cropped at the edges
    // Verified by offsetting the tiling start
    #[test]
    fn test_tile_canvas_repeats_and_crops() {
        let tile = numbered_tile(3, 2);
        let canvas = tile_canvas(&tile, 7, 5);

        assert_eq!(canvas.dimensions(), (7, 5));
        for (x, y, pixel) in canvas.enumerate_pixels() {
            assert_eq!(pixel.0, [(x % 3) as u8, (y % 2) as u8, 200], "at ({x}, {y})");
        }
    }

    // Tests a tile larger than the canvas is simply cropped
    #[test]
    fn test_tile_canvas_larger_tile() {
        let tile = numbered_tile(10, 10);
        let canvas = tile_canvas(&tile, 4, 3);
        assert_eq!(canvas.get_pixel(3, 2).0, [3, 2, 200]);
    }

    // Tests the mosaic always matches the requested canvas size
    #[test]
    fn test_build_mosaic_dimensions() {
        let pattern = numbered_tile(5, 5);
        let mosaic = build_mosaic(&pattern, 37, 21, 4);
        assert_eq!(mosaic.dimensions(), (37, 21));

        let floored = build_mosaic(&pattern, 16, 16, 1000);
        assert_eq!(floored.dimensions(), (16, 16));
    }

    // Tests a pattern already at tile size is tiled without resampling
    #[test]
    fn test_build_mosaic_exact_tile() {
        let pattern = numbered_tile(8, 8);
        let mosaic = build_mosaic(&pattern, 64, 64, 8);
        assert_eq!(mosaic.get_pixel(13, 22).0, [5, 6, 200]);
    }
}
