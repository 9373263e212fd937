//! The persisted unit of work: project state and its on-disk JSON format.

pub mod file;
pub mod model;
