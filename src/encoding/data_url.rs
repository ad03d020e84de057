//! Data URL assembly and parsing
//!
//! The output contract of an extraction is a self-describing
//! `data:<mime>;base64,<payload>` string. This module owns the packing of
//! encoded bytes into that scheme and the inverse used for inspection.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crate::crop::errors::{CropError, CropResult};

/// An encoded image payload together with the MIME type actually used
///
/// The MIME type reflects what the encoder produced, which can differ from
/// what the caller requested when an unknown format fell back to the
/// default.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// MIME type of the encoded bytes
    pub mime: String,
    /// Encoded image bytes
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// Create a new encoded payload
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        EncodedImage {
            mime: mime.into(),
            bytes,
        }
    }

    /// Pack the payload into a `data:<mime>;base64,<payload>` string
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    /// Parse a base64 data URL back into its MIME type and raw bytes
    ///
    /// # Arguments
    /// * `url` - A `data:<mime>;base64,<payload>` string
    ///
    /// # Returns
    /// The decoded payload, or an error naming the malformed part
    pub fn from_data_url(url: &str) -> CropResult<Self> {
        let rest = url.trim().strip_prefix("data:")
            .ok_or_else(|| CropError::GenericError(
                "Data URL must start with 'data:'".to_string()))?;

        let (mime, payload) = rest.split_once(";base64,")
            .ok_or_else(|| CropError::GenericError(
                "Data URL must declare a base64 payload".to_string()))?;

        let bytes = STANDARD.decode(payload)
            .map_err(|e| CropError::GenericError(format!("Invalid base64 payload: {}", e)))?;

        Ok(EncodedImage::new(mime, bytes))
    }
}
