//! Custom error types for crop processing

use std::fmt;
use std::io;

/// Crop-specific error types
#[derive(Debug)]
pub enum CropError {
    /// I/O error
    IoError(io::Error),
    /// Source bitmap id did not resolve to a loaded bitmap
    ResourceNotFound(String),
    /// Zero-sized or out-of-bounds geometry in a request
    InvalidDimension(String),
    /// Decode or encode failure in the imaging backend
    ImageError(image::ImageError),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::IoError(e) => write!(f, "I/O error: {}", e),
            CropError::ResourceNotFound(id) => write!(f, "Source bitmap not found: {}", id),
            CropError::InvalidDimension(msg) => write!(f, "Invalid dimensions: {}", msg),
            CropError::ImageError(e) => write!(f, "Image codec error: {}", e),
            CropError::GenericError(msg) => write!(f, "Crop error: {}", msg),
        }
    }
}

impl std::error::Error for CropError {}

impl From<io::Error> for CropError {
    fn from(error: io::Error) -> Self {
        CropError::IoError(error)
    }
}

/// Result type for crop operations
pub type CropResult<T> = Result<T, CropError>;

impl From<String> for CropError {
    fn from(msg: String) -> Self {
        CropError::GenericError(msg)
    }
}

impl From<image::ImageError> for CropError {
    fn from(error: image::ImageError) -> Self {
        CropError::ImageError(error)
    }
}
