use crate::foundation::error::{PhotocalError, PhotocalResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// A4 portrait width in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;

/// A4 portrait height in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Points per millimeter: one inch is 72 pt and 25.4 mm.
const PT_PER_MM: f64 = 72.0 / 25.4;

/// A4 portrait page size in millimeters.
pub fn a4_portrait_mm() -> Size {
    Size::new(A4_WIDTH_MM, A4_HEIGHT_MM)
}

/// Convert millimeters to PostScript points (the PDF user-space unit).
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Map a rectangle measured in surface pixels onto page millimeters.
///
/// Scaling is linear and independent per axis: x/width scale by page width,
/// y/height by page height. This assumes the surface was rendered at the same
/// aspect ratio as the physical page; no rotation or distortion is applied.
pub fn surface_rect_to_mm(rect_px: Rect, surface_px: Size, page_mm: Size) -> Rect {
    let sx = page_mm.width / surface_px.width;
    let sy = page_mm.height / surface_px.height;
    Rect::new(
        rect_px.x0 * sx,
        rect_px.y0 * sy,
        rect_px.x1 * sx,
        rect_px.y1 * sy,
    )
}

/// Pixel region selected from a source image by a cover-fit crop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    /// Left edge of the region in source pixels.
    pub x: u32,
    /// Top edge of the region in source pixels.
    pub y: u32,
    /// Region width in source pixels.
    pub width: u32,
    /// Region height in source pixels.
    pub height: u32,
}

/// Compute the centered cover-fit crop of a `width`×`height` image for a slot
/// with the given width/height aspect ratio.
///
/// Reproduces `background-size: cover; background-position: center`: if the
/// image is relatively wider than the slot, equal margins come off left and
/// right (`new width = height * aspect`); if relatively taller, equal margins
/// come off top and bottom (`new height = width / aspect`).
pub fn cover_crop(width: u32, height: u32, slot_aspect: f64) -> PhotocalResult<CropRegion> {
    if width == 0 || height == 0 {
        return Err(PhotocalError::validation(
            "cover_crop source dimensions must be non-zero",
        ));
    }
    if !slot_aspect.is_finite() || slot_aspect <= 0.0 {
        return Err(PhotocalError::validation(
            "cover_crop slot aspect must be finite and > 0",
        ));
    }

    let img_aspect = f64::from(width) / f64::from(height);
    let (mut x, mut y, mut w, mut h) = (0u32, 0u32, width, height);

    if img_aspect > slot_aspect {
        // Image is wider than the slot: crop the sides.
        w = (f64::from(height) * slot_aspect).round() as u32;
        w = w.clamp(1, width);
        x = (width - w) / 2;
    } else {
        // Image is taller than the slot: crop top and bottom.
        h = (f64::from(width) / slot_aspect).round() as u32;
        h = h.clamp(1, height);
        y = (height - h) / 2;
    }

    Ok(CropRegion {
        x,
        y,
        width: w,
        height: h,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
