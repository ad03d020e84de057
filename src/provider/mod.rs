//! Bitmap resolution
//!
//! Provides the bitmap provider capability: resolving caller-chosen
//! identifiers to decoded bitmaps.

pub mod provider_traits;
pub mod image_registry;
mod tests;

pub use provider_traits::BitmapProvider;
pub use image_registry::ImageRegistry;
