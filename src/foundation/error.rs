/// Convenience result type used across photocal.
pub type PhotocalResult<T> = Result<T, PhotocalError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum PhotocalError {
    /// Invalid user-provided data (project file, month index, slot aspect).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding an encoded photo or data URL payload.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while rasterizing a page surface.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors while assembling or writing the output PDF document.
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotocalError {
    /// Build a [`PhotocalError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PhotocalError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PhotocalError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`PhotocalError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`PhotocalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
