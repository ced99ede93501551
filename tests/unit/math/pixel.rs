//! Tests for pixel normalization and blending

#[cfg(test)]
mod tests {
    use image::{Luma, LumaA, Rgb, Rgba};
    use seamcut::SeamPixel;
    use seamcut::math::pixel::lerp;

    // Tests the linear interpolation endpoints and midpoint
    #[test]
    fn test_lerp() {
        assert!((lerp(2.0, 4.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((lerp(2.0, 4.0, 1.0) - 4.0).abs() < 1e-12);
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-12);
    }

    // Tests channel counts reported for each pixel layout
    #[test]
    fn test_channel_counts() {
        assert_eq!(Luma::<u8>::channel_count(), 1);
        assert_eq!(LumaA::<u8>::channel_count(), 2);
        assert_eq!(Rgb::<u16>::channel_count(), 3);
        assert_eq!(Rgba::<u8>::channel_count(), 4);
        assert_eq!(f64::channel_count(), 1);
        assert_eq!(f32::channel_count(), 1);
    }

    // Tests that integer channels scale by their type's maximum
    #[test]
    fn test_integer_normalization() {
        let pixel = Rgba([0_u8, 51, 255, 128]);
        assert!(pixel.normalized_channel(0).abs() < 1e-12);
        assert!((pixel.normalized_channel(1) - 0.2).abs() < 1e-12);
        assert!((pixel.normalized_channel(2) - 1.0).abs() < 1e-12);

        let deep = Luma([u16::MAX]);
        assert!((deep.normalized_channel(0) - 1.0).abs() < 1e-12);
    }

    // Tests that float channels are taken as already normalized
    #[test]
    fn test_float_normalization() {
        let pixel = Rgb([0.25_f32, 0.5, 1.0]);
        assert!((pixel.normalized_channel(0) - 0.25).abs() < 1e-6);
        assert!((0.75_f64.normalized_channel(0) - 0.75).abs() < 1e-12);
    }

    // Tests that asking for a channel the pixel lacks yields zero
    #[test]
    fn test_missing_channel_is_zero() {
        assert!(Luma([200_u8]).normalized_channel(1).abs() < f64::EPSILON);
        assert!(0.5_f64.normalized_channel(3).abs() < f64::EPSILON);
        assert!(0.5_f32.normalized_channel(1).abs() < f64::EPSILON);
    }

    // Tests that integer blends round to the nearest value
    // Breaks if the midpoint is truncated instead of rounded
    #[test]
    fn test_integer_blend_rounds() {
        let blended = Luma([10_u8]).blend(&Luma([21]), 0.5);
        assert_eq!(blended, Luma([16]));

        let colour = Rgba([255_u8, 0, 100, 255]).blend(&Rgba([0, 255, 100, 255]), 0.5);
        assert_eq!(colour, Rgba([128, 128, 100, 255]));
    }

    // Tests blend weights at both ends keep the respective source
    #[test]
    fn test_blend_endpoints() {
        let a = Rgb([10_u8, 20, 30]);
        let b = Rgb([200_u8, 100, 0]);

        assert_eq!(a.blend(&b, 0.0), a);
        assert_eq!(a.blend(&b, 1.0), b);
    }

    // Tests scalar blends keep full precision
    #[test]
    fn test_scalar_blend() {
        assert!((1.0_f64.blend(&2.0, 0.5) - 1.5).abs() < 1e-12);
        assert!((1.0_f32.blend(&3.0, 0.25) - 1.5).abs() < 1e-6);

        let float_pixel = Luma([0.1_f32]).blend(&Luma([0.2]), 0.5);
        assert!((float_pixel.0[0] - 0.15).abs() < 1e-6);
    }
}
