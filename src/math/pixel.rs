//! Channel access and blending for the pixel types a seam can cut through
//!
//! Error metrics need every channel mapped onto `[0, 1]` regardless of the
//! storage type, and the compositor needs a per-channel linear blend. Image
//! pixels take their normalization range from the subpixel's default maximum
//! (255 for `u8`, 65535 for `u16`, 1.0 for floats); bare `f32`/`f64` scalars
//! are treated as single-channel values that are already normalized.

use image::{Luma, LumaA, Pixel, Primitive, Rgb, Rgba};

/// Pixel capabilities required by seam computation and compositing
pub trait SeamPixel: Copy + Send + Sync {
    /// Number of channels in the pixel
    fn channel_count() -> usize;

    /// Value of `channel` scaled to `[0, 1]`, or 0.0 for a missing channel
    fn normalized_channel(&self, channel: usize) -> f64;

    /// Per-channel linear blend, `weight` 0.0 yields `self` and 1.0 yields `other`
    #[must_use]
    fn blend(&self, other: &Self, weight: f64) -> Self;
}

/// Linear interpolation between two channel values in `f64`
pub fn lerp(a: f64, b: f64, weight: f64) -> f64 {
    (b - a).mul_add(weight, a)
}

// Integer subpixels round to nearest, float subpixels keep the exact value
fn mix_subpixel<S: Primitive>(a: S, b: S, weight: f64) -> S {
    let mixed = lerp(
        a.to_f64().unwrap_or(0.0),
        b.to_f64().unwrap_or(0.0),
        weight,
    );
    let max = S::DEFAULT_MAX_VALUE.to_f64().unwrap_or(1.0);
    let value = if max > 1.0 { mixed.round() } else { mixed };
    <S as num_traits::NumCast>::from(value).unwrap_or(a)
}

fn normalize_subpixel<S: Primitive>(value: S) -> f64 {
    let max = S::DEFAULT_MAX_VALUE.to_f64().unwrap_or(1.0);
    let min = S::DEFAULT_MIN_VALUE.to_f64().unwrap_or(0.0);
    let range = max - min;
    if range > 0.0 {
        (value.to_f64().unwrap_or(0.0) - min) / range
    } else {
        0.0
    }
}

macro_rules! impl_seam_pixel {
    ($($pixel:ident),* $(,)?) => {
        $(
            impl<S> SeamPixel for $pixel<S>
            where
                S: Primitive + Send + Sync,
                $pixel<S>: Pixel<Subpixel = S>,
            {
                fn channel_count() -> usize {
                    usize::from(<Self as Pixel>::CHANNEL_COUNT)
                }

                fn normalized_channel(&self, channel: usize) -> f64 {
                    self.channels()
                        .get(channel)
                        .copied()
                        .map_or(0.0, normalize_subpixel)
                }

                fn blend(&self, other: &Self, weight: f64) -> Self {
                    self.map2(other, |a, b| mix_subpixel(a, b, weight))
                }
            }
        )*
    };
}

impl_seam_pixel!(Luma, LumaA, Rgb, Rgba);

impl SeamPixel for f64 {
    fn channel_count() -> usize {
        1
    }

    fn normalized_channel(&self, channel: usize) -> f64 {
        if channel == 0 { *self } else { 0.0 }
    }

    fn blend(&self, other: &Self, weight: f64) -> Self {
        lerp(*self, *other, weight)
    }
}

impl SeamPixel for f32 {
    fn channel_count() -> usize {
        1
    }

    fn normalized_channel(&self, channel: usize) -> f64 {
        if channel == 0 { f64::from(*self) } else { 0.0 }
    }

    fn blend(&self, other: &Self, weight: f64) -> Self {
        lerp(f64::from(*self), f64::from(*other), weight) as Self
    }
}
