//! In-memory bitmap registry
//!
//! Holds decoded bitmaps under caller-chosen identifiers. This replaces the
//! ambient element-by-id lookup a display environment would provide, making
//! the set of resolvable bitmaps explicit and local.

use std::collections::HashMap;
use std::path::Path;

use image::DynamicImage;
use log::{debug, info};

use crate::crop::errors::{CropError, CropResult};
use super::provider_traits::BitmapProvider;

/// Registry of decoded bitmaps keyed by identifier
pub struct ImageRegistry {
    /// Loaded bitmaps by identifier
    bitmaps: HashMap<String, DynamicImage>,
}

impl ImageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ImageRegistry {
            bitmaps: HashMap::new(),
        }
    }

    /// Register an already-decoded bitmap under an identifier
    ///
    /// An existing bitmap under the same identifier is replaced.
    ///
    /// # Arguments
    /// * `id` - Identifier the bitmap will resolve under
    /// * `bitmap` - The decoded bitmap
    pub fn insert(&mut self, id: impl Into<String>, bitmap: DynamicImage) {
        let id = id.into();
        debug!("Registering {}x{} bitmap as '{}'", bitmap.width(), bitmap.height(), id);
        self.bitmaps.insert(id, bitmap);
    }

    /// Decode an image file and register it under an identifier
    ///
    /// # Arguments
    /// * `id` - Identifier the bitmap will resolve under
    /// * `path` - Path to the image file to decode
    ///
    /// # Returns
    /// Result indicating success or failure
    pub fn load_file(&mut self, id: impl Into<String>, path: &str) -> CropResult<()> {
        let id = id.into();
        info!("Loading bitmap '{}' from {}", id, path);

        let bitmap = image::open(Path::new(path)).map_err(|e| match e {
            // A missing or unreadable file is a resource resolution failure
            image::ImageError::IoError(io_err) =>
                CropError::ResourceNotFound(format!("{} ({})", path, io_err)),
            other => CropError::ImageError(other),
        })?;

        info!("Decoded {}x{} bitmap from {}", bitmap.width(), bitmap.height(), path);
        self.bitmaps.insert(id, bitmap);
        Ok(())
    }

    /// Remove a bitmap from the registry
    pub fn remove(&mut self, id: &str) -> Option<DynamicImage> {
        self.bitmaps.remove(id)
    }

    /// Number of registered bitmaps
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Whether the registry holds no bitmaps
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}

impl BitmapProvider for ImageRegistry {
    fn resolve(&self, id: &str) -> CropResult<&DynamicImage> {
        self.bitmaps.get(id)
            .ok_or_else(|| CropError::ResourceNotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.bitmaps.contains_key(id)
    }
}
