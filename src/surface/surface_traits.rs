//! Drawing surface interfaces
//!
//! Defines the off-screen drawing surface capability the extractor renders
//! through. Surfaces are created through a factory seam so the extraction
//! pipeline never depends on a concrete pixel backend and can be exercised
//! against instrumented implementations in tests.

use image::{DynamicImage, RgbaImage};
use crate::crop::errors::CropResult;
use crate::crop::region::CropRegion;
use crate::encoding::EncodedImage;

/// An off-screen pixel buffer supporting drawing and encoding
///
/// Surfaces are transient: the extractor allocates them per call through a
/// SurfaceFactory and drops them when the call returns.
pub trait DrawingSurface {
    /// Width of the surface in pixels
    fn width(&self) -> u32;

    /// Height of the surface in pixels
    fn height(&self) -> u32;

    /// Draw a decoded bitmap unscaled with its top-left corner at (x, y)
    ///
    /// Pixels falling outside the surface bounds are clipped.
    ///
    /// # Arguments
    /// * `bitmap` - The decoded bitmap to draw
    /// * `x` - Destination X of the bitmap's left edge
    /// * `y` - Destination Y of the bitmap's top edge
    fn draw_bitmap(&mut self, bitmap: &DynamicImage, x: u32, y: u32) -> CropResult<()>;

    /// Draw a region of another surface across this surface's full extent
    ///
    /// The region is resampled to fill this surface exactly. A region
    /// outside the source surface's bounds is an InvalidDimension error.
    ///
    /// # Arguments
    /// * `source` - Surface to read pixels from
    /// * `region` - Sub-rectangle of the source to draw
    fn draw_region(&mut self, source: &dyn DrawingSurface, region: CropRegion) -> CropResult<()>;

    /// Borrow the surface's pixel contents
    fn pixels(&self) -> &RgbaImage;

    /// Encode the surface contents
    ///
    /// Unknown format names do not fail the call: the default format is
    /// substituted and a warning logged. The returned payload carries the
    /// MIME type that was actually used.
    ///
    /// # Arguments
    /// * `format` - Requested format, a MIME type or short alias
    /// * `quality` - Encoder quality in 0.0..=1.0, ignored by lossless formats
    fn encode(&self, format: &str, quality: f32) -> CropResult<EncodedImage>;
}

/// Factory for creating drawing surfaces
///
/// The seam through which the extractor acquires its buffer and output
/// surfaces, so tests can substitute counting or fake implementations.
pub trait SurfaceFactory: Send + Sync {
    /// Create a surface of the given pixel dimensions
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels, must be positive
    /// * `height` - Surface height in pixels, must be positive
    ///
    /// # Returns
    /// A boxed surface, or InvalidDimension for a zero-sized request
    fn create_surface(&self, width: u32, height: u32) -> CropResult<Box<dyn DrawingSurface>>;
}
