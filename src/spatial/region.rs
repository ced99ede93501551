//! Random-access pixel windows read and written by the seam passes
//!
//! Coordinates are absolute `[x, y]` positions inside the region. Reads and
//! writes outside the region are reported through `None`/`false` rather than
//! panicking; the solver and compositor validate origins up front so these
//! paths are only reached by callers using the traits directly.

use crate::math::SeamPixel;
use image::{ImageBuffer, Pixel};
use ndarray::Array2;
use std::ops::{Deref, DerefMut};

/// Read-only pixel source
pub trait Region: Sync {
    /// Pixel type stored in the region
    type Pixel: SeamPixel;

    /// Region size as `[width, height]`
    fn dimensions(&self) -> [usize; 2];

    /// Pixel at absolute `[x, y]`, or `None` outside the region
    fn pixel(&self, at: [usize; 2]) -> Option<Self::Pixel>;
}

/// Writable pixel destination
pub trait RegionMut: Region {
    /// Store `pixel` at absolute `[x, y]`, returning `false` outside the region
    fn set_pixel(&mut self, at: [usize; 2], pixel: Self::Pixel) -> bool;
}

fn to_image_coordinates(at: [usize; 2]) -> Option<(u32, u32)> {
    Some((u32::try_from(at[0]).ok()?, u32::try_from(at[1]).ok()?))
}

impl<P, C> Region for ImageBuffer<P, C>
where
    P: Pixel + SeamPixel,
    C: Deref<Target = [P::Subpixel]> + Sync,
{
    type Pixel = P;

    fn dimensions(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    fn pixel(&self, at: [usize; 2]) -> Option<P> {
        let (x, y) = to_image_coordinates(at)?;
        self.get_pixel_checked(x, y).copied()
    }
}

impl<P, C> RegionMut for ImageBuffer<P, C>
where
    P: Pixel + SeamPixel,
    C: Deref<Target = [P::Subpixel]> + DerefMut + Sync,
{
    fn set_pixel(&mut self, at: [usize; 2], pixel: P) -> bool {
        let Some((x, y)) = to_image_coordinates(at) else {
            return false;
        };
        self.get_pixel_mut_checked(x, y)
            .map(|slot| *slot = pixel)
            .is_some()
    }
}

// Grids are indexed [row, col], so x selects the column
impl<T: SeamPixel> Region for Array2<T> {
    type Pixel = T;

    fn dimensions(&self) -> [usize; 2] {
        let (rows, cols) = self.dim();
        [cols, rows]
    }

    fn pixel(&self, at: [usize; 2]) -> Option<T> {
        self.get([at[1], at[0]]).copied()
    }
}

impl<T: SeamPixel> RegionMut for Array2<T> {
    fn set_pixel(&mut self, at: [usize; 2], pixel: T) -> bool {
        self.get_mut([at[1], at[0]])
            .map(|slot| *slot = pixel)
            .is_some()
    }
}
