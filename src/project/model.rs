use std::collections::BTreeMap;

use crate::{
    assets::data_url::DataUrl,
    calendar::grid::MONTHS_PER_YEAR,
    foundation::error::{PhotocalError, PhotocalResult},
    locale::table::Language,
};

/// Sparse mapping from month index (0–11) to an assigned photo.
///
/// Keys are not required to cover all twelve months. Serializes as a JSON
/// object keyed by the numeric month index, matching the project file format.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PhotoAssignment(BTreeMap<u8, DataUrl>);

impl PhotoAssignment {
    /// Empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a photo to a month, replacing any previous assignment.
    pub fn insert(&mut self, month_index: usize, photo: DataUrl) -> PhotocalResult<()> {
        if month_index >= MONTHS_PER_YEAR {
            return Err(PhotocalError::validation(format!(
                "month index {month_index} out of range 0..12"
            )));
        }
        self.0.insert(month_index as u8, photo);
        Ok(())
    }

    /// Remove a month's photo, returning it if one was assigned.
    pub fn remove(&mut self, month_index: usize) -> Option<DataUrl> {
        u8::try_from(month_index)
            .ok()
            .and_then(|m| self.0.remove(&m))
    }

    /// The photo assigned to a month, if any.
    pub fn get(&self, month_index: usize) -> Option<&DataUrl> {
        u8::try_from(month_index)
            .ok()
            .and_then(|m| self.0.get(&m))
    }

    /// Number of assigned months.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no month has a photo.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Assigned `(month_index, photo)` pairs in month order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DataUrl)> {
        self.0.iter().map(|(m, p)| (usize::from(*m), p))
    }
}

/// In-memory project state: the persisted unit.
///
/// Created with defaults on startup, mutated by user actions, serialized on
/// save, and fully replaced on a successful load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalendarProject {
    /// Calendar year.
    pub year: i32,
    /// Interface and grid locale.
    pub language: Language,
    /// Per-month photo assignment; absent in JSON means empty.
    #[serde(rename = "monthImages", default)]
    pub month_images: PhotoAssignment,
}

impl Default for CalendarProject {
    fn default() -> Self {
        Self {
            year: 2026,
            language: Language::Lt,
            month_images: PhotoAssignment::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/model.rs"]
mod tests;
