//! PDF composition: low-level document writer and the export pipeline.

pub mod export;
pub mod pdf;
