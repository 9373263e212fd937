//! Photocal composes a personalized photo calendar and exports it as a
//! print-ready PDF.
//!
//! Two cooperating pieces form the core:
//!
//! 1. **Calendar grid generation**: `year + month + locale -> MonthGrid`, a
//!    fixed 6×7 Monday-first grid of day numbers with locale labels.
//!    Deterministic, no IO.
//! 2. **PDF composition**: rendered page surfaces plus a sparse photo
//!    assignment -> a multi-page A4 document. Each page is a rasterized
//!    "skeleton" (grid lines, numbers, labels) overlaid with
//!    separately-cropped, full-resolution photos at the page's photo-slot
//!    rectangles.
//!
//! The split exists because rasterizing a rendered page is lossy: capturing
//! photos through that path limits them to on-screen fidelity. The compositor
//! therefore suppresses photos during skeleton capture and re-places each
//! photo from its original bytes, cover-fit cropped at source resolution
//! (see [`compose_calendar_pdf`]).
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic grids**: grid generation is pure and total over valid
//!   input.
//! - **Failure isolation**: one undecodable photo is skipped with a warning;
//!   it never aborts the export.
//! - **Scoped visual state**: the photo suppress/restore toggle is held by an
//!   RAII guard and released on every exit path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod calendar;
mod compose;
mod foundation;
mod locale;
mod project;
mod surface;

pub use assets::data_url::{DataUrl, DecodedBlob};
pub use assets::photo::{
    EncodedPhoto, JPEG_EXPORT_QUALITY, PreparedPhoto, crop_to_cover, decode_photo, encode_jpeg,
    prepare_cover_photo,
};
pub use calendar::grid::{
    GRID_COLS, GRID_ROWS, MONTHS_PER_YEAR, MonthGrid, WeekRow, month_grid, year_grids,
};
pub use compose::export::{
    DEFAULT_OVERSAMPLE, EXPORT_FILE_NAME, ExportOptions, ExportStrategy, ProgressFn,
    compose_calendar_pdf, export_to_file,
};
pub use compose::pdf::{PdfWriter, PlacedPhoto};
pub use foundation::error::{PhotocalError, PhotocalResult};
pub use foundation::geom::{
    A4_HEIGHT_MM, A4_WIDTH_MM, CropRegion, Point, Rect, Size, Vec2, a4_portrait_mm, cover_crop,
    mm_to_pt, surface_rect_to_mm,
};
pub use locale::table::{Language, LocalePack, UiStrings, locale_strings};
pub use project::file::{
    FILE_VERSION, load_project, project_from_json, project_to_json, save_project,
    suggested_file_name,
};
pub use project::model::{CalendarProject, PhotoAssignment};
pub use surface::layout::{
    PAGE_COUNT, PageLayout, SLOTS_PER_PAGE, month_for_slot, page_months,
};
pub use surface::page::{Bitmap, PageSurface, PhotoSuppressGuard};
