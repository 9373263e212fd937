//! Shared foundation: error taxonomy and page geometry.

pub mod error;
pub mod geom;
