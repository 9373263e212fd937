use crate::{
    calendar::grid::MONTHS_PER_YEAR,
    foundation::geom::{self, Rect, Size},
};

/// Photo slots on one export page, one per month shown.
pub const SLOTS_PER_PAGE: usize = 4;

/// Export pages per year: twelve months in groups of four.
pub const PAGE_COUNT: usize = MONTHS_PER_YEAR / SLOTS_PER_PAGE;

/// Month index shown in a slot: `page_index * 4 + slot_index`.
///
/// Panics when either index is out of range; slot enumeration is fixed by the
/// page layout and an invalid index is a programming error.
pub fn month_for_slot(page_index: usize, slot_index: usize) -> usize {
    assert!(page_index < PAGE_COUNT, "page index {page_index} out of range");
    assert!(
        slot_index < SLOTS_PER_PAGE,
        "slot index {slot_index} out of range"
    );
    page_index * SLOTS_PER_PAGE + slot_index
}

/// The four month indices shown on a page, in slot order.
pub fn page_months(page_index: usize) -> [usize; SLOTS_PER_PAGE] {
    [
        month_for_slot(page_index, 0),
        month_for_slot(page_index, 1),
        month_for_slot(page_index, 2),
        month_for_slot(page_index, 3),
    ]
}

/// Analytic page layout: four fixed photo-slot rectangles expressed as
/// fractions of the page, independent of any rendering technology.
///
/// Month cards sit in a 2×2 grid (slot order: left-to-right, top-to-bottom).
/// The photo slot is the upper region of each card; the date grid fills the
/// rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    /// Outer page margin as a fraction of page width/height.
    pub margin: f64,
    /// Gap between cards as a fraction of page width/height.
    pub gap: f64,
    /// Photo height as a fraction of card height.
    pub photo_share: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4_default()
    }
}

impl PageLayout {
    /// The built-in A4 arrangement used by the page renderer.
    pub fn a4_default() -> Self {
        Self {
            margin: 0.04,
            gap: 0.02,
            photo_share: 0.55,
        }
    }

    /// Photo-slot rectangle in page fractions (x, y from top-left; all in 0..1).
    pub fn slot_fraction(&self, slot_index: usize) -> Rect {
        assert!(
            slot_index < SLOTS_PER_PAGE,
            "slot index {slot_index} out of range"
        );
        let card_w = (1.0 - 2.0 * self.margin - self.gap) / 2.0;
        let card_h = (1.0 - 2.0 * self.margin - self.gap) / 2.0;
        let col = slot_index % 2;
        let row = slot_index / 2;
        let x0 = self.margin + col as f64 * (card_w + self.gap);
        let y0 = self.margin + row as f64 * (card_h + self.gap);
        Rect::new(x0, y0, x0 + card_w, y0 + card_h * self.photo_share)
    }

    /// Photo-slot rectangle in page millimeters for the given page size.
    pub fn slot_rect_mm(&self, slot_index: usize, page_mm: Size) -> Rect {
        let f = self.slot_fraction(slot_index);
        Rect::new(
            f.x0 * page_mm.width,
            f.y0 * page_mm.height,
            f.x1 * page_mm.width,
            f.y1 * page_mm.height,
        )
    }

    /// Photo-slot rectangle in millimeters on an A4 portrait page.
    pub fn slot_rect_a4(&self, slot_index: usize) -> Rect {
        self.slot_rect_mm(slot_index, geom::a4_portrait_mm())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/layout.rs"]
mod tests;
