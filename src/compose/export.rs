use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::photo::{self, JPEG_EXPORT_QUALITY},
    compose::pdf::{PdfWriter, PlacedPhoto},
    foundation::error::{PhotocalError, PhotocalResult},
    project::model::PhotoAssignment,
    surface::layout::{month_for_slot, PageLayout, SLOTS_PER_PAGE},
    surface::page::{PageSurface, PhotoSuppressGuard},
};

/// Fixed output file name used by [`export_to_file`].
pub const EXPORT_FILE_NAME: &str = "calendar.pdf";

/// Default skeleton rasterization oversampling factor for print sharpness.
pub const DEFAULT_OVERSAMPLE: u32 = 3;

/// How each page of the document is assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportStrategy {
    /// Rasterize the skeleton without photos, then overlay each photo
    /// separately-cropped at full source resolution. The production path.
    #[default]
    Overlay,
    /// Rasterize the whole page, photos included, as one flat bitmap.
    /// Simpler, but photos are limited to on-screen fidelity.
    Flat,
}

/// Tunables for one export run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Page assembly strategy.
    pub strategy: ExportStrategy,
    /// Rasterization oversampling factor.
    pub oversample: u32,
    /// JPEG quality for cropped photo overlays.
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            strategy: ExportStrategy::Overlay,
            oversample: DEFAULT_OVERSAMPLE,
            jpeg_quality: JPEG_EXPORT_QUALITY,
        }
    }
}

/// Advisory progress callback: `(page_number, page_count)`, 1-based, invoked
/// before each page is processed. Has no effect on output.
pub type ProgressFn<'a> = &'a mut dyn FnMut(usize, usize);

/// Compose the final multi-page document from rendered page surfaces and the
/// photo assignment, returning the PDF bytes.
///
/// Pages are emitted in input order, one A4 portrait page per surface.
/// Per-photo failures (bad data URL, decode error) are logged and skipped;
/// they never abort the export. Skeleton rasterization or document write
/// failures abort the whole export, and photo visibility on the failing
/// surface is restored before returning.
///
/// Processing is deliberately sequential: the suppress/restore toggle is
/// shared visual state and must not overlap across pages. Callers are
/// responsible for preventing concurrent exports over the same surfaces.
#[tracing::instrument(skip(pages, photos, layout, on_progress))]
pub fn compose_calendar_pdf(
    pages: &mut [&mut dyn PageSurface],
    photos: &PhotoAssignment,
    layout: &PageLayout,
    options: &ExportOptions,
    mut on_progress: Option<ProgressFn<'_>>,
) -> PhotocalResult<Vec<u8>> {
    let mut writer = PdfWriter::a4_portrait();
    let total = pages.len();

    for (page_index, surface) in pages.iter_mut().enumerate() {
        if let Some(cb) = on_progress.as_mut() {
            cb(page_index + 1, total);
        }

        match options.strategy {
            ExportStrategy::Overlay => {
                compose_overlay_page(&mut writer, page_index, &mut **surface, photos, layout, options)?;
            }
            ExportStrategy::Flat => {
                let bitmap = surface.rasterize(options.oversample)?;
                writer.add_page(&bitmap, &[])?;
            }
        }
    }

    writer.finish()
}

/// One page of the high-fidelity path: capture slot geometry, rasterize the
/// skeleton with photos suppressed, then overlay independently-cropped
/// photos.
fn compose_overlay_page(
    writer: &mut PdfWriter,
    page_index: usize,
    surface: &mut dyn PageSurface,
    photos: &PhotoAssignment,
    layout: &PageLayout,
    options: &ExportOptions,
) -> PhotocalResult<()> {
    // Geometry capture: slots that hold a photo on the surface and in the
    // assignment, with their output rectangles in page millimeters.
    let mut captured = Vec::new();
    for slot_index in 0..SLOTS_PER_PAGE {
        if !surface.slot_is_populated(slot_index) {
            continue;
        }
        let month_index = month_for_slot(page_index, slot_index);
        let Some(data) = photos.get(month_index) else {
            continue;
        };
        let rect_mm = layout.slot_rect_mm(slot_index, writer.page_mm());
        captured.push((month_index, rect_mm, data.clone()));
    }

    // Skeleton pass. The guard restores photo visibility when this block
    // exits, whether rasterization succeeded or not.
    let skeleton = {
        let mut guard = PhotoSuppressGuard::suppress(surface);
        guard.surface().rasterize(options.oversample)
    }?;

    // Overlay pass: each photo independently; one bad photo never takes the
    // page down.
    let mut placed = Vec::with_capacity(captured.len());
    for (month_index, rect_mm, data) in captured {
        let slot_aspect = rect_mm.width() / rect_mm.height();
        match photo::prepare_cover_photo(&data, slot_aspect, options.jpeg_quality) {
            Ok(encoded) => placed.push(PlacedPhoto {
                rect_mm,
                photo: encoded,
            }),
            Err(error) => {
                tracing::warn!(month_index, %error, "skipping photo that failed to prepare");
            }
        }
    }

    writer.add_page(&skeleton, &placed)
}

/// Compose and write the document under the fixed name `calendar.pdf` in
/// `dir`, returning the written path.
pub fn export_to_file(
    pages: &mut [&mut dyn PageSurface],
    photos: &PhotoAssignment,
    layout: &PageLayout,
    options: &ExportOptions,
    on_progress: Option<ProgressFn<'_>>,
    dir: impl AsRef<Path>,
) -> PhotocalResult<PathBuf> {
    let bytes = compose_calendar_pdf(pages, photos, layout, options, on_progress)?;
    let path = dir.as_ref().join(EXPORT_FILE_NAME);
    std::fs::write(&path, bytes)
        .with_context(|| format!("write pdf to '{}'", path.display()))
        .map_err(PhotocalError::from)?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/export.rs"]
mod tests;
