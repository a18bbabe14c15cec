//! Image placement within the printable area
//!
//! An image is scaled to the largest size that fits inside the page
//! margins without distorting it, then centered on both axes of the
//! remaining space.

use crate::types::{DuplexError, Margins, Result};

use super::PlacementRect;

/// Calculate the printable area of a page: everything inside the margins.
///
/// Fails with `InvalidLayout` when the margins leave no room on either axis.
pub fn printable_area(
    page_width_mm: f32,
    page_height_mm: f32,
    margins: &Margins,
) -> Result<PlacementRect> {
    for (side, value) in margins.iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(DuplexError::InvalidConfig(format!(
                "{:?} margin must be a non-negative number, got {}",
                side, value
            )));
        }
    }

    let available_width = page_width_mm - margins.left_mm - margins.right_mm;
    let available_height = page_height_mm - margins.top_mm - margins.bottom_mm;

    if available_width <= 0.0 || available_height <= 0.0 {
        return Err(DuplexError::InvalidLayout(format!(
            "Margins leave no printable area on a {}x{}mm page ({}x{}mm available)",
            page_width_mm, page_height_mm, available_width, available_height
        )));
    }

    Ok(PlacementRect::new(
        margins.left_mm,
        margins.top_mm,
        available_width,
        available_height,
    ))
}

/// Calculate where an image goes on a page.
///
/// Returns the largest rectangle with the image's aspect ratio that fits in
/// the printable area, centered within it.
///
/// # Arguments
/// * `image_width_px` - Natural width of the image
/// * `image_height_px` - Natural height of the image
/// * `page_width_mm` - Page width
/// * `page_height_mm` - Page height
/// * `margins` - Margins around the printable area
pub fn compute_placement(
    image_width_px: u32,
    image_height_px: u32,
    page_width_mm: f32,
    page_height_mm: f32,
    margins: &Margins,
) -> Result<PlacementRect> {
    if image_width_px == 0 || image_height_px == 0 {
        return Err(DuplexError::InvalidLayout(format!(
            "Image has no area ({}x{}px)",
            image_width_px, image_height_px
        )));
    }

    let area = printable_area(page_width_mm, page_height_mm, margins)?;

    let image_aspect = image_width_px as f32 / image_height_px as f32;
    let available_aspect = area.aspect_ratio();

    let (width, height) = if image_aspect > available_aspect {
        // Proportionally wider than the printable area: width-limited
        (area.width, area.width / image_aspect)
    } else {
        // Height-limited (or an exact match)
        (area.height * image_aspect, area.height)
    };

    let placement = PlacementRect::new(
        area.x + (area.width - width) / 2.0,
        area.y + (area.height - height) / 2.0,
        width,
        height,
    );

    log::debug!(
        "Placed {}x{}px image on {}x{}mm page at ({:.2}, {:.2}) size {:.2}x{:.2}mm",
        image_width_px,
        image_height_px,
        page_width_mm,
        page_height_mm,
        placement.x,
        placement.y,
        placement.width,
        placement.height
    );

    Ok(placement)
}
