use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::foundation::error::{PhotocalError, PhotocalResult};

/// A self-describing base64 data URL (`data:<mime>;base64,<payload>`).
///
/// The transport form for photos inside project files and between components.
/// The wrapped string is kept verbatim; decoding is on demand.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DataUrl(String);

/// Decoded payload of a [`DataUrl`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBlob {
    /// MIME type embedded in the URL, e.g. `image/jpeg`.
    pub mime: String,
    /// Raw decoded bytes.
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Wrap an already-formatted data URL string without decoding it.
    ///
    /// Fails if the string does not carry the `data:` scheme; payload errors
    /// surface later from [`DataUrl::decode`].
    pub fn from_string(raw: impl Into<String>) -> PhotocalResult<Self> {
        let raw = raw.into();
        if !raw.starts_with("data:") {
            return Err(PhotocalError::validation(
                "data URL must start with 'data:'",
            ));
        }
        Ok(Self(raw))
    }

    /// Encode raw bytes as a base64 data URL with the given MIME type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
    }

    /// The verbatim URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into MIME type and raw bytes.
    pub fn decode(&self) -> PhotocalResult<DecodedBlob> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| PhotocalError::decode("data URL missing 'data:' scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| PhotocalError::decode("data URL missing ',' separator"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| PhotocalError::decode("data URL is not base64-encoded"))?;
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| PhotocalError::decode(format!("invalid base64 payload: {e}")))?;
        Ok(DecodedBlob {
            mime: mime.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/data_url.rs"]
mod tests;
