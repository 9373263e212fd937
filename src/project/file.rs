use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{PhotocalError, PhotocalResult},
    locale::table::Language,
    project::model::{CalendarProject, PhotoAssignment},
};

/// Current project file format version.
pub const FILE_VERSION: u32 = 1;

/// On-disk wrapper around a [`CalendarProject`].
#[derive(Debug, serde::Serialize)]
struct ProjectFile<'a> {
    version: u32,
    project: &'a CalendarProject,
}

/// Loosely-typed mirror of the file used for load validation. Unknown keys
/// are ignored; required fields are checked explicitly after parsing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawFile {
    version: Option<u32>,
    project: Option<RawProject>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawProject {
    year: Option<i32>,
    language: Option<Language>,
    #[serde(rename = "monthImages")]
    month_images: Option<PhotoAssignment>,
}

/// Serialize a project into the versioned file format.
pub fn project_to_json(project: &CalendarProject) -> PhotocalResult<String> {
    let file = ProjectFile {
        version: FILE_VERSION,
        project,
    };
    serde_json::to_string_pretty(&file)
        .map_err(|e| PhotocalError::serde(format!("serialize project file: {e}")))
}

/// Parse and validate a project file.
///
/// Rejects input whose `project` key is absent or whose `project.year` is
/// missing or zero. Unknown keys are ignored; a missing `monthImages` map is
/// treated as empty and a missing `language` falls back to the default.
/// Nothing is applied on failure, so the caller's current state survives a
/// bad file untouched.
pub fn project_from_json(json: &str) -> PhotocalResult<CalendarProject> {
    let raw: RawFile = serde_json::from_str(json)
        .map_err(|e| PhotocalError::serde(format!("parse project file: {e}")))?;

    let project = raw
        .project
        .ok_or_else(|| PhotocalError::validation("project file has no 'project' entry"))?;
    let year = match project.year {
        Some(year) if year != 0 => year,
        _ => {
            return Err(PhotocalError::validation(
                "project file has no usable 'project.year'",
            ));
        }
    };

    Ok(CalendarProject {
        year,
        language: project.language.unwrap_or_default(),
        month_images: project.month_images.unwrap_or_default(),
    })
}

/// Write a project file to disk.
pub fn save_project(project: &CalendarProject, path: impl AsRef<Path>) -> PhotocalResult<()> {
    let path = path.as_ref();
    let json = project_to_json(project)?;
    std::fs::write(path, json)
        .with_context(|| format!("write project file to '{}'", path.display()))
        .map_err(PhotocalError::from)
}

/// Read and validate a project file from disk.
pub fn load_project(path: impl AsRef<Path>) -> PhotocalResult<CalendarProject> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read project file from '{}'", path.display()))?;
    project_from_json(&json)
}

/// Download/save name suggested for a project: `calendar-{year}-{lang}.calendar`.
pub fn suggested_file_name(project: &CalendarProject) -> String {
    format!(
        "calendar-{}-{}.calendar",
        project.year,
        project.language.code()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/project/file.rs"]
mod tests;
