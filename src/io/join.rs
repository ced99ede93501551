//! Joining two images across an overlap with a seam cut
//!
//! Images are placed side by side (horizontal) or stacked (vertical) so that
//! the last `overlap` columns/rows of the first image coincide with the first
//! ones of the second. Outside the overlap each image is copied as is; inside
//! it the solver picks the seam and the compositor fuses both sides.

use crate::algorithm::{ErrorMetric, Execution, Seam, SeamSolver, StripConfig};
use crate::io::error::{Result, SeamError, invalid_parameter};
use crate::math::SeamPixel;
use crate::spatial::orientation::translate;
use crate::spatial::{Region, RegionMut, SeamDirection};
use image::{ImageBuffer, Pixel};

/// Placement of two images and their overlap strip in the joined output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinLayout {
    /// Join direction
    pub direction: SeamDirection,
    /// Overlap strip (length along the seam, width across it)
    pub strip: StripConfig,
    /// Output `[width, height]`
    pub output_dimensions: [usize; 2],
    /// Top-left of the second image in the output
    pub second_origin: [usize; 2],
    /// Strip origin inside the first image (and inside the output)
    pub first_strip_origin: [usize; 2],
}

impl JoinLayout {
    /// Lay out two images of `first` and `second` `[width, height]` overlapping by `overlap`
    ///
    /// # Errors
    ///
    /// Returns `SeamError::InvalidParameter` if the overlap is zero, exceeds
    /// either image, or the images disagree across the join.
    pub fn plan(
        first: [usize; 2],
        second: [usize; 2],
        overlap: usize,
        direction: SeamDirection,
    ) -> Result<Self> {
        // Axis along which the images are concatenated
        let (along, across) = match direction {
            SeamDirection::Horizontal => (0, 1),
            SeamDirection::Vertical => (1, 0),
        };
        let dim = |size: [usize; 2], axis: usize| size.get(axis).copied().unwrap_or(0);

        if overlap == 0 {
            return Err(invalid_parameter(
                "overlap",
                &overlap,
                &"overlap must be at least one pixel",
            ));
        }
        if dim(first, across) != dim(second, across) {
            return Err(invalid_parameter(
                "images",
                &format!("{}x{} and {}x{}", first[0], first[1], second[0], second[1]),
                &format!("{direction} joins need matching size across the seam"),
            ));
        }
        if overlap > dim(first, along) || overlap > dim(second, along) {
            return Err(invalid_parameter(
                "overlap",
                &overlap,
                &"overlap exceeds the size of an input image",
            ));
        }

        let start = dim(first, along) - overlap;
        let length = dim(first, across);
        let total = start + dim(second, along);

        let (output_dimensions, second_origin) = match direction {
            SeamDirection::Horizontal => ([total, length], [start, 0]),
            SeamDirection::Vertical => ([length, total], [0, start]),
        };

        Ok(Self {
            direction,
            strip: StripConfig::new(length, overlap),
            output_dimensions,
            second_origin,
            first_strip_origin: second_origin,
        })
    }
}

/// Joined output image together with the seam used inside the overlap
pub struct JoinResult<P: Pixel> {
    /// Joined image
    pub image: ImageBuffer<P, Vec<P::Subpixel>>,
    /// Seam chosen across the overlap
    pub seam: Seam,
    /// Layout used for the join
    pub layout: JoinLayout,
}

/// Join two images across an overlap of `overlap` pixels
///
/// # Errors
///
/// Returns an error if the layout is invalid or the seam computation fails
pub fn join_images<P, E>(
    first: &ImageBuffer<P, Vec<P::Subpixel>>,
    second: &ImageBuffer<P, Vec<P::Subpixel>>,
    overlap: usize,
    direction: SeamDirection,
    metric: E,
    execution: Execution,
) -> Result<JoinResult<P>>
where
    P: Pixel + SeamPixel,
    ImageBuffer<P, Vec<P::Subpixel>>: Region<Pixel = P> + RegionMut,
    E: ErrorMetric<ImageBuffer<P, Vec<P::Subpixel>>>,
{
    let layout = JoinLayout::plan(
        Region::dimensions(first),
        Region::dimensions(second),
        overlap,
        direction,
    )?;
    let [out_width, out_height] = layout.output_dimensions;
    let mut output = ImageBuffer::new(to_u32(out_width)?, to_u32(out_height)?);

    copy_into(&mut output, first, [0, 0])?;
    copy_into(&mut output, second, layout.second_origin)?;

    let mut solver = SeamSolver::with_metric(
        first,
        second,
        layout.strip.with_execution(execution),
        direction,
        metric,
    )?;
    let seam = solver
        .blend(
            layout.first_strip_origin,
            [0, 0],
            &mut output,
            layout.first_strip_origin,
        )?
        .clone();

    tracing::info!(
        direction = %direction,
        overlap,
        cost = seam.cost(),
        "Joined images"
    );

    Ok(JoinResult {
        image: output,
        seam,
        layout,
    })
}

fn copy_into<R, D>(destination: &mut D, source: &R, origin: [usize; 2]) -> Result<()>
where
    R: Region,
    D: RegionMut<Pixel = R::Pixel>,
{
    let [width, height] = source.dimensions();
    for y in 0..height {
        for x in 0..width {
            let at = translate(origin, [x, y]);
            let written = source
                .pixel([x, y])
                .is_some_and(|pixel| destination.set_pixel(at, pixel));
            if !written {
                return Err(SeamError::OutOfBounds {
                    region: "destination",
                    origin,
                    extent: [width, height],
                    dimensions: destination.dimensions(),
                });
            }
        }
    }
    Ok(())
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|e| invalid_parameter("dimension", &value, &e))
}
