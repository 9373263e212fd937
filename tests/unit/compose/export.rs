use super::*;

use std::io::Cursor;

use lopdf::Document;

use crate::assets::data_url::DataUrl;
use crate::surface::page::Bitmap;

struct FakeSurface {
    visible: bool,
    populated: [bool; SLOTS_PER_PAGE],
    fail_rasterize: bool,
}

impl FakeSurface {
    fn populated() -> Self {
        Self {
            visible: true,
            populated: [true; SLOTS_PER_PAGE],
            fail_rasterize: false,
        }
    }

    fn empty() -> Self {
        Self {
            populated: [false; SLOTS_PER_PAGE],
            ..Self::populated()
        }
    }
}

impl PageSurface for FakeSurface {
    fn size_px(&self) -> (u32, u32) {
        (105, 148)
    }

    fn slot_is_populated(&self, slot_index: usize) -> bool {
        self.populated[slot_index]
    }

    fn photos_visible(&self) -> bool {
        self.visible
    }

    fn set_photos_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn rasterize(&mut self, oversample: u32) -> PhotocalResult<Bitmap> {
        if self.fail_rasterize {
            return Err(PhotocalError::raster("surface lost"));
        }
        let (w, h) = self.size_px();
        Ok(Bitmap::solid(w * oversample, h * oversample, [240, 240, 240]))
    }
}

fn png_data_url(width: u32, height: u32) -> DataUrl {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([80, 120, 160]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    DataUrl::from_bytes("image/png", &bytes)
}

fn fast_options() -> ExportOptions {
    ExportOptions {
        oversample: 1,
        ..ExportOptions::default()
    }
}

fn page_xobject_names(doc: &Document, page_number: u32) -> Vec<String> {
    let page_id = *doc.get_pages().get(&page_number).unwrap();
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let mut names: Vec<String> = xobjects
        .iter()
        .map(|(k, _)| String::from_utf8_lossy(k).into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn overlay_export_places_photos_on_their_pages() {
    let mut photos = PhotoAssignment::new();
    photos.insert(0, png_data_url(40, 30)).unwrap(); // page 1, slot 0
    photos.insert(2, png_data_url(40, 30)).unwrap(); // page 1, slot 2
    photos.insert(5, png_data_url(40, 30)).unwrap(); // page 2, slot 1

    let mut s0 = FakeSurface::populated();
    let mut s1 = FakeSurface::populated();
    let mut s2 = FakeSurface::populated();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut s0, &mut s1, &mut s2];

    let bytes = compose_calendar_pdf(
        &mut pages,
        &photos,
        &PageLayout::a4_default(),
        &fast_options(),
        None,
    )
    .unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
    assert_eq!(page_xobject_names(&doc, 1), vec!["Bg", "P0", "P1"]);
    assert_eq!(page_xobject_names(&doc, 2), vec!["Bg", "P0"]);
    assert_eq!(page_xobject_names(&doc, 3), vec!["Bg"]);
}

#[test]
fn unpopulated_slots_get_no_overlay() {
    let mut photos = PhotoAssignment::new();
    photos.insert(0, png_data_url(40, 30)).unwrap();

    let mut surface = FakeSurface::empty();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut surface];

    let bytes = compose_calendar_pdf(
        &mut pages,
        &photos,
        &PageLayout::a4_default(),
        &fast_options(),
        None,
    )
    .unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(page_xobject_names(&doc, 1), vec!["Bg"]);
}

#[test]
fn undecodable_photo_is_skipped_without_failing_the_export() {
    let mut photos = PhotoAssignment::new();
    photos
        .insert(0, DataUrl::from_bytes("image/png", b"not an image"))
        .unwrap();
    photos.insert(1, png_data_url(40, 30)).unwrap();

    let mut surface = FakeSurface::populated();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut surface];

    let bytes = compose_calendar_pdf(
        &mut pages,
        &photos,
        &PageLayout::a4_default(),
        &fast_options(),
        None,
    )
    .unwrap();

    // The bad month is dropped; the good one still lands.
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(page_xobject_names(&doc, 1), vec!["Bg", "P0"]);
}

#[test]
fn rasterization_failure_aborts_and_restores_visibility() {
    let mut surface = FakeSurface::populated();
    surface.fail_rasterize = true;
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut surface];

    let result = compose_calendar_pdf(
        &mut pages,
        &PhotoAssignment::new(),
        &PageLayout::a4_default(),
        &fast_options(),
        None,
    );

    assert!(matches!(result.unwrap_err(), PhotocalError::Raster(_)));
    assert!(surface.photos_visible());
}

#[test]
fn flat_strategy_embeds_only_the_rasterized_page() {
    let mut photos = PhotoAssignment::new();
    photos.insert(0, png_data_url(40, 30)).unwrap();

    let mut surface = FakeSurface::populated();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut surface];

    let options = ExportOptions {
        strategy: ExportStrategy::Flat,
        ..fast_options()
    };
    let bytes = compose_calendar_pdf(
        &mut pages,
        &photos,
        &PageLayout::a4_default(),
        &options,
        None,
    )
    .unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(page_xobject_names(&doc, 1), vec!["Bg"]);
    // Flat mode never toggles visibility.
    assert!(surface.photos_visible());
}

#[test]
fn progress_is_reported_once_per_page() {
    let mut s0 = FakeSurface::empty();
    let mut s1 = FakeSurface::empty();
    let mut s2 = FakeSurface::empty();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut s0, &mut s1, &mut s2];

    let mut seen = Vec::new();
    let mut cb = |page: usize, total: usize| seen.push((page, total));
    compose_calendar_pdf(
        &mut pages,
        &PhotoAssignment::new(),
        &PageLayout::a4_default(),
        &fast_options(),
        Some(&mut cb),
    )
    .unwrap();

    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn export_to_file_writes_under_the_fixed_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut surface = FakeSurface::empty();
    let mut pages: Vec<&mut dyn PageSurface> = vec![&mut surface];

    let path = export_to_file(
        &mut pages,
        &PhotoAssignment::new(),
        &PageLayout::a4_default(),
        &fast_options(),
        None,
        dir.path(),
    )
    .unwrap();

    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    let bytes = std::fs::read(&path).unwrap();
    assert!(Document::load_mem(&bytes).is_ok());
}
