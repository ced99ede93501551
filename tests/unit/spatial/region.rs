//! Tests for region access over image buffers and grids

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use ndarray::{Array2, array};
    use seamcut::{Region, RegionMut};

    // Tests that image regions report [width, height] and read by [x, y]
    #[test]
    fn test_image_region_reads() {
        let image = GrayImage::from_fn(3, 2, |x, y| Luma([u8::try_from(x + 10 * y).unwrap_or(0)]));

        assert_eq!(Region::dimensions(&image), [3, 2]);
        assert_eq!(image.pixel([2, 1]), Some(Luma([12])));
        assert_eq!(image.pixel([3, 0]), None);
        assert_eq!(image.pixel([0, 2]), None);
    }

    // Tests that writes outside an image are refused without panicking
    #[test]
    fn test_image_region_writes() {
        let mut image = GrayImage::new(2, 2);

        assert!(image.set_pixel([1, 0], Luma([9])));
        assert_eq!(image.get_pixel(1, 0), &Luma([9]));
        assert!(!image.set_pixel([2, 0], Luma([9])));
        assert!(!image.set_pixel([usize::MAX, 0], Luma([9])));
    }

    // Tests that grids treat x as the column and y as the row
    // Breaks if grid coordinates are read as [row, col]
    #[test]
    fn test_grid_region_axes() {
        let grid = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        assert_eq!(grid.dimensions(), [3, 2]);
        assert_eq!(grid.pixel([2, 0]), Some(3.0));
        assert_eq!(grid.pixel([0, 1]), Some(4.0));
        assert_eq!(grid.pixel([0, 2]), None);
    }

    // Tests grid writes
    #[test]
    fn test_grid_region_writes() {
        let mut grid = Array2::<f32>::zeros((2, 3));

        assert!(grid.set_pixel([2, 1], 0.5));
        assert!((grid[[1, 2]] - 0.5).abs() < f32::EPSILON);
        assert!(!grid.set_pixel([3, 1], 0.5));
    }
}
