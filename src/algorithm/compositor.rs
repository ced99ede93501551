//! Writes the fused overlap strip into a destination image

use crate::algorithm::seam::Seam;
use crate::io::configuration::CUT_BLEND_WEIGHT;
use crate::io::error::{Result, SeamError, check_bounds, invalid_parameter};
use crate::math::SeamPixel;
use crate::spatial::orientation::{Orientation, translate};
use crate::spatial::{Region, RegionMut};
use std::cmp::Ordering;

/// Combines two source strips along a seam
///
/// Offsets before the cut come from A, offsets after it from B, and the cut
/// itself gets an even blend of both, giving a one-pixel transition.
pub struct Compositor<'a, R, O> {
    source_a: &'a R,
    source_b: &'a R,
    length: usize,
    width: usize,
    orientation: O,
}

impl<R, O: Copy> Clone for Compositor<'_, R, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, O: Copy> Copy for Compositor<'_, R, O> {}

impl<'a, R, O> Compositor<'a, R, O>
where
    R: Region,
    O: Orientation,
{
    /// Create a compositor for a `length` x `width` strip
    ///
    /// # Errors
    ///
    /// Returns `SeamError::InvalidParameter` if either dimension is zero
    pub fn new(
        source_a: &'a R,
        source_b: &'a R,
        length: usize,
        width: usize,
        orientation: O,
    ) -> Result<Self> {
        if length == 0 || width == 0 {
            return Err(invalid_parameter(
                "strip",
                &format!("{length}x{width}"),
                &"length and width must be positive",
            ));
        }
        Ok(Self::from_parts(source_a, source_b, length, width, orientation))
    }

    pub(crate) const fn from_parts(
        source_a: &'a R,
        source_b: &'a R,
        length: usize,
        width: usize,
        orientation: O,
    ) -> Self {
        Self {
            source_a,
            source_b,
            length,
            width,
            orientation,
        }
    }

    /// Write the strip fused along `seam` into `destination` at `destination_origin`
    ///
    /// # Errors
    ///
    /// Returns `SeamError::SeamMismatch` if the seam was computed for a
    /// different strip, or `SeamError::OutOfBounds` if any strip leaves its
    /// region. Nothing is written when an error is returned.
    pub fn fuse<D>(
        &self,
        seam: &Seam,
        origin_a: [usize; 2],
        origin_b: [usize; 2],
        destination: &mut D,
        destination_origin: [usize; 2],
    ) -> Result<()>
    where
        D: RegionMut<Pixel = R::Pixel>,
    {
        if seam.len() != self.length || seam.width() != self.width {
            return Err(SeamError::SeamMismatch {
                expected: (self.length, self.width),
                actual: (seam.len(), seam.width()),
            });
        }

        let extent = self.orientation.extent(self.length, self.width);
        check_bounds("source A", origin_a, extent, self.source_a.dimensions())?;
        check_bounds("source B", origin_b, extent, self.source_b.dimensions())?;
        check_bounds(
            "destination",
            destination_origin,
            extent,
            destination.dimensions(),
        )?;

        for (position, &cut) in seam.cuts().iter().enumerate() {
            for offset in 0..self.width {
                let local = self.orientation.map(offset, position);
                let pixel = self.fused_pixel(offset.cmp(&cut), origin_a, origin_b, local)?;
                let target = translate(destination_origin, local);
                if !destination.set_pixel(target, pixel) {
                    return Err(out_of_bounds("destination", target, destination.dimensions()));
                }
            }
        }

        tracing::trace!(length = self.length, width = self.width, "Fused strip");
        Ok(())
    }

    fn fused_pixel(
        &self,
        side: Ordering,
        origin_a: [usize; 2],
        origin_b: [usize; 2],
        local: [usize; 2],
    ) -> Result<R::Pixel> {
        let read = |source: &R, origin: [usize; 2], region: &'static str| {
            let at = translate(origin, local);
            source
                .pixel(at)
                .ok_or_else(|| out_of_bounds(region, at, source.dimensions()))
        };

        match side {
            Ordering::Less => read(self.source_a, origin_a, "source A"),
            Ordering::Greater => read(self.source_b, origin_b, "source B"),
            Ordering::Equal => {
                let a = read(self.source_a, origin_a, "source A")?;
                let b = read(self.source_b, origin_b, "source B")?;
                Ok(a.blend(&b, CUT_BLEND_WEIGHT))
            }
        }
    }
}

const fn out_of_bounds(region: &'static str, at: [usize; 2], dimensions: [usize; 2]) -> SeamError {
    SeamError::OutOfBounds {
        region,
        origin: at,
        extent: [1, 1],
        dimensions,
    }
}
