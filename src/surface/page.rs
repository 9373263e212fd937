use crate::foundation::error::PhotocalResult;

/// Straight RGB8 bitmap produced by rasterizing a page surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major, tightly packed RGB8 bytes (`width * height * 3`).
    pub rgb8: Vec<u8>,
}

impl Bitmap {
    /// Solid-color bitmap, useful for test surfaces and blank pages.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut rgb8 = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            rgb8.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            rgb8,
        }
    }
}

/// A realized visual page for four months: the boundary between the
/// compositor and whatever technology renders the calendar.
///
/// The compositor only needs a surface to rasterize itself (honoring the
/// current photo-visibility state), report which slots hold a photo, and
/// toggle photo rendering so the skeleton can be captured without lossy
/// re-rasterized photos.
pub trait PageSurface {
    /// Surface dimensions in pixels. Must match the output page aspect ratio.
    fn size_px(&self) -> (u32, u32);

    /// True when the given slot currently displays an assigned photo.
    fn slot_is_populated(&self, slot_index: usize) -> bool;

    /// Whether photo slots currently render their photos.
    fn photos_visible(&self) -> bool;

    /// Toggle photo rendering on or off.
    fn set_photos_visible(&mut self, visible: bool);

    /// Rasterize the current visual state at `oversample` times the surface
    /// pixel size.
    fn rasterize(&mut self, oversample: u32) -> PhotocalResult<Bitmap>;
}

/// Scoped photo suppression: photos are hidden on construction and restored
/// when the guard drops, on every exit path including rasterization failure.
///
/// The suppress/restore toggle is the only shared mutable state in an export,
/// so its lifetime is confined to one page's skeleton capture.
pub struct PhotoSuppressGuard<'a> {
    surface: &'a mut dyn PageSurface,
}

impl<'a> PhotoSuppressGuard<'a> {
    /// Hide photos on `surface` until the guard drops.
    pub fn suppress(surface: &'a mut dyn PageSurface) -> Self {
        surface.set_photos_visible(false);
        Self { surface }
    }

    /// The guarded surface, for rasterizing while photos are hidden.
    pub fn surface(&mut self) -> &mut dyn PageSurface {
        self.surface
    }
}

impl Drop for PhotoSuppressGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_photos_visible(true);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/page.rs"]
mod tests;
