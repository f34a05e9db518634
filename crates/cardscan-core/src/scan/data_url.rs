//! Base64 image data URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ScanError;

const IMAGE_PREFIX: &str = "data:image/";

/// Image bytes decoded from a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Media type, e.g. `image/jpeg`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Decode a `data:image/<type>;base64,<payload>` URL.
pub fn decode_data_url(data_url: &str) -> Result<DecodedImage, ScanError> {
    if !data_url.starts_with(IMAGE_PREFIX) {
        return Err(ScanError::InvalidImageFormat(
            "expected a data:image/ URL".to_string(),
        ));
    }

    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| ScanError::InvalidImageFormat("missing base64 payload".to_string()))?;

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ScanError::InvalidImageFormat(
            "missing base64 payload".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ScanError::InvalidImageFormat(format!("invalid base64: {}", e)))?;

    let media_type = header["data:".len()..]
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(DecodedImage { media_type, bytes })
}

/// Encode image bytes as a base64 data URL.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}
