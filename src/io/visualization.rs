//! Seam overlays for inspecting where a join was cut

use crate::algorithm::Seam;
use crate::io::configuration::SEAM_HIGHLIGHT;
use crate::io::join::JoinResult;
use crate::spatial::Orientation;
use crate::spatial::orientation::translate;
use image::{ImageBuffer, Pixel, Rgba, RgbaImage};

/// Paint the cut cell of every seam position with `color`
///
/// `strip_origin` is where the overlap strip starts in `image`. Cells that
/// fall outside the image are skipped.
pub fn draw_seam<P, O>(
    image: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    seam: &Seam,
    strip_origin: [usize; 2],
    orientation: O,
    color: P,
) where
    P: Pixel,
    O: Orientation,
{
    for (position, &cut) in seam.cuts().iter().enumerate() {
        let [x, y] = translate(strip_origin, orientation.map(cut, position));
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
            && let Some(slot) = image.get_pixel_mut_checked(x, y)
        {
            *slot = color;
        }
    }
}

/// Copy of a joined image with its seam highlighted
pub fn render_seam_overlay(result: &JoinResult<Rgba<u8>>) -> RgbaImage {
    let mut overlay = result.image.clone();
    draw_seam(
        &mut overlay,
        &result.seam,
        result.layout.first_strip_origin,
        result.layout.direction,
        Rgba(SEAM_HIGHLIGHT),
    );
    overlay
}
