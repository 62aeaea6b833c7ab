//! Image payloads returned by the synthesis collaborator.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type assumed when the service does not name one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Raw bytes of a synthesized image.
///
/// Serializes as `{"mime": ..., "data": "<base64>"}`.
///
/// # Examples
///
/// ```
/// use storyboard_core::GeneratedImage;
///
/// let image = GeneratedImage::png(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.mime(), "image/png");
/// assert_eq!(image.data_url(), "data:image/png;base64,iVBORw==");
/// assert_eq!(image.file_extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedImage {
    mime: String,
    #[serde(with = "base64_bytes")]
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Wrap image bytes with an explicit MIME type.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Wrap PNG bytes.
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(DEFAULT_IMAGE_MIME, data)
    }

    /// MIME type of the payload.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Render as a `data:` URL for inline display.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }

    /// File extension matching the MIME type, `bin` when unknown.
    pub fn file_extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.trim())
            .map_err(serde::de::Error::custom)
    }
}
