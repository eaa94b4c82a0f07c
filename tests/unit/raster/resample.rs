//! Tests for exact-size resampling

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use patternfit::raster::resample::resize_exact;

    // Tests matching sizes return an identical copy
    // Verified by always resampling
    #[test]
    fn test_same_size_is_copy() {
        let img = RgbImage::from_fn(5, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 7]));
        assert_eq!(resize_exact(&img, 5, 4), img);
    }

    // Tests resizing hits the requested size in both directions
    #[test]
    fn test_resize_dimensions() {
        let img = GrayImage::from_pixel(10, 10, Luma([30]));
        assert_eq!(resize_exact(&img, 3, 17).dimensions(), (3, 17));
        assert_eq!(resize_exact(&img, 40, 2).dimensions(), (40, 2));
    }

    // Tests flat images stay flat after resampling
    #[test]
    fn test_resize_flat_image() {
        let img = RgbImage::from_pixel(6, 6, Rgb([10, 120, 250]));
        let resized = resize_exact(&img, 13, 9);
        for pixel in resized.pixels() {
            let [r, g, b] = pixel.0;
            assert!(r.abs_diff(10) <= 1 && g.abs_diff(120) <= 1 && b.abs_diff(250) <= 1);
        }
    }
}
