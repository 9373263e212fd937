use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::{
    assets::photo::EncodedPhoto,
    foundation::error::{PhotocalError, PhotocalResult},
    foundation::geom::{self, Rect, Size},
    surface::page::Bitmap,
};

/// A prepared photo plus its destination rectangle in page millimeters.
#[derive(Clone, Debug)]
pub struct PlacedPhoto {
    /// Destination rectangle on the page, top-left origin, millimeters.
    pub rect_mm: Rect,
    /// Cropped, quality-controlled JPEG to embed without recompression.
    pub photo: EncodedPhoto,
}

/// Incremental writer for the output document: fixed physical page size,
/// one full-page background bitmap per page, photos overlaid at mm
/// rectangles.
///
/// Backgrounds are embedded as raw RGB and deflated when the document is
/// finalized. Photos are embedded as DCT (JPEG) streams verbatim, so the
/// writer applies no further compression to them; quality was already decided
/// at encode time.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_mm: Size,
}

impl PdfWriter {
    /// Start an empty A4 portrait document.
    pub fn a4_portrait() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            page_mm: geom::a4_portrait_mm(),
        }
    }

    /// Page size in millimeters.
    pub fn page_mm(&self) -> Size {
        self.page_mm
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append one page: `background` stretched over the full page, then each
    /// photo placed at its recorded rectangle, in slot order.
    pub fn add_page(
        &mut self,
        background: &Bitmap,
        photos: &[PlacedPhoto],
    ) -> PhotocalResult<()> {
        let page_w_pt = geom::mm_to_pt(self.page_mm.width);
        let page_h_pt = geom::mm_to_pt(self.page_mm.height);

        let mut xobjects = Dictionary::new();
        let mut content = String::new();

        let bg_id = self.add_background_xobject(background)?;
        xobjects.set("Bg", Object::Reference(bg_id));
        content.push_str(&format!(
            "q\n{page_w_pt:.4} 0 0 {page_h_pt:.4} 0 0 cm\n/Bg Do\nQ\n"
        ));

        for (idx, placed) in photos.iter().enumerate() {
            let img_id = self.add_photo_xobject(&placed.photo);
            let name = format!("P{idx}");
            xobjects.set(name.as_bytes(), Object::Reference(img_id));

            let w_pt = geom::mm_to_pt(placed.rect_mm.width());
            let h_pt = geom::mm_to_pt(placed.rect_mm.height());
            let x_pt = geom::mm_to_pt(placed.rect_mm.x0);
            // PDF user space has a bottom-left origin; rectangles arrive
            // top-left based.
            let y_pt = page_h_pt - geom::mm_to_pt(placed.rect_mm.y1);
            content.push_str(&format!(
                "q\n{w_pt:.4} 0 0 {h_pt:.4} {x_pt:.4} {y_pt:.4} cm\n/{name} Do\nQ\n"
            ));
        }

        let content_id = self
            .doc
            .add_object(Object::Stream(Stream::new(
                Dictionary::new(),
                content.into_bytes(),
            )));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(self.pages_id));
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(resources));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(page_w_pt as f32),
                Object::Real(page_h_pt as f32),
            ]),
        );

        let page_id = self.doc.add_object(Object::Dictionary(page));
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Finalize the page tree and serialize the document.
    pub fn finish(mut self) -> PhotocalResult<Vec<u8>> {
        if self.page_ids.is_empty() {
            return Err(PhotocalError::document("document has no pages"));
        }

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set(
            "Kids",
            Object::Array(
                self.page_ids
                    .iter()
                    .map(|&id| Object::Reference(id))
                    .collect(),
            ),
        );
        pages.set("Count", Object::Integer(self.page_ids.len() as i64));
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.doc.add_object(Object::Dictionary(catalog));
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        // Deflates the raw-RGB backgrounds and content streams; streams that
        // already carry a filter (the JPEG photos) are left untouched.
        self.doc.compress();

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| PhotocalError::document(format!("serialize pdf: {e}")))?;
        Ok(buffer)
    }

    fn add_background_xobject(&mut self, bitmap: &Bitmap) -> PhotocalResult<ObjectId> {
        let expected = bitmap.width as usize * bitmap.height as usize * 3;
        if bitmap.rgb8.len() != expected {
            return Err(PhotocalError::document(format!(
                "background bitmap has {} bytes, expected {expected}",
                bitmap.rgb8.len()
            )));
        }

        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(i64::from(bitmap.width)));
        dict.set("Height", Object::Integer(i64::from(bitmap.height)));
        dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", Object::Integer(8));

        let stream = Stream::new(dict, bitmap.rgb8.clone());
        Ok(self.doc.add_object(Object::Stream(stream)))
    }

    fn add_photo_xobject(&mut self, photo: &EncodedPhoto) -> ObjectId {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(i64::from(photo.width)));
        dict.set("Height", Object::Integer(i64::from(photo.height)));
        dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", Object::Integer(8));
        dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

        let stream = Stream::new(dict, photo.jpeg.clone()).with_compression(false);
        self.doc.add_object(Object::Stream(stream))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pdf.rs"]
mod tests;
