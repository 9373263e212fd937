use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::{
    assets::data_url::DataUrl,
    foundation::error::{PhotocalError, PhotocalResult},
    foundation::geom,
};

/// JPEG quality used when re-encoding cropped photos for the output document.
///
/// High enough to be visually lossless in print, low enough to keep the
/// exported file size under control.
pub const JPEG_EXPORT_QUALITY: u8 = 95;

/// Decoded photo at its natural resolution, stored as straight RGB8.
///
/// Print output has no alpha, so photos are flattened on decode.
#[derive(Clone, Debug)]
pub struct PreparedPhoto {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Row-major RGB8 pixels.
    pub rgb: RgbImage,
}

impl PreparedPhoto {
    /// Natural width/height aspect ratio.
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// A photo re-encoded as JPEG, ready to embed in the output document as-is.
#[derive(Clone, Debug)]
pub struct EncodedPhoto {
    /// Encoded JPEG bytes.
    pub jpeg: Vec<u8>,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
}

/// Decode a photo from its data-URL transport form.
pub fn decode_photo(data: &DataUrl) -> PhotocalResult<PreparedPhoto> {
    let blob = data.decode()?;
    let dyn_img = image::load_from_memory(&blob.bytes)
        .map_err(|e| PhotocalError::decode(format!("decode photo ({}): {e}", blob.mime)))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PreparedPhoto { width, height, rgb })
}

/// Crop a photo to the slot's aspect ratio, centered, at source resolution.
///
/// Reproduces cover-fit display semantics: the photo fills the slot while the
/// center content survives and the excess on the longer axis is discarded.
pub fn crop_to_cover(photo: &PreparedPhoto, slot_aspect: f64) -> PhotocalResult<PreparedPhoto> {
    let region = geom::cover_crop(photo.width, photo.height, slot_aspect)?;
    let rgb = image::imageops::crop_imm(&photo.rgb, region.x, region.y, region.width, region.height)
        .to_image();
    Ok(PreparedPhoto {
        width: region.width,
        height: region.height,
        rgb,
    })
}

/// Encode a photo as JPEG at the given quality (1..=100).
pub fn encode_jpeg(photo: &PreparedPhoto, quality: u8) -> PhotocalResult<EncodedPhoto> {
    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), quality);
    encoder
        .encode_image(&photo.rgb)
        .map_err(|e| PhotocalError::decode(format!("encode jpeg: {e}")))?;
    Ok(EncodedPhoto {
        jpeg,
        width: photo.width,
        height: photo.height,
    })
}

/// Decode, cover-fit crop, and re-encode one photo for a slot in one step.
pub fn prepare_cover_photo(
    data: &DataUrl,
    slot_aspect: f64,
    quality: u8,
) -> PhotocalResult<EncodedPhoto> {
    let photo = decode_photo(data)?;
    let cropped = crop_to_cover(&photo, slot_aspect)?;
    encode_jpeg(&cropped, quality)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/photo.rs"]
mod tests;
