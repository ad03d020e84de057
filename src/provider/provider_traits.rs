//! Bitmap provider interface
//!
//! The extractor never consults ambient state to find its source bitmap; a
//! provider is injected and queried by identifier. The production
//! implementation is an in-memory registry of decoded bitmaps.

use image::DynamicImage;
use crate::crop::errors::CropResult;

/// Resolves bitmap identifiers to decoded bitmaps
///
/// Implementations hand out bitmaps that are fully decoded and ready to
/// draw; completing any loading beforehand is the provider's job, not the
/// extractor's.
pub trait BitmapProvider: Send + Sync {
    /// Resolve an identifier to its decoded bitmap
    ///
    /// # Arguments
    /// * `id` - Caller-chosen bitmap identifier
    ///
    /// # Returns
    /// The decoded bitmap, or ResourceNotFound for an unknown id
    fn resolve(&self, id: &str) -> CropResult<&DynamicImage>;

    /// Check whether an identifier is known to this provider
    fn contains(&self, id: &str) -> bool;
}
