//! Cropped image extraction
//!
//! Implements the core two-stage draw. The source bitmap is first drawn
//! unscaled onto a buffer surface matching its natural size, which pins the
//! crop coordinates to the bitmap's own pixel grid. The crop region is then
//! drawn from that buffer onto the output surface, resampled to fill it.
//! Both surfaces are transient and owned by the single call.

use image::DynamicImage;
use log::{debug, info};

use crate::encoding::EncodedImage;
use crate::provider::BitmapProvider;
use crate::surface::{DrawingSurface, SurfaceFactory};
use super::errors::CropResult;
use super::request::CropRequest;

/// Extracts an encoded crop of a registered bitmap
///
/// Both collaborators are injected: the provider resolves the source bitmap
/// and the factory supplies the off-screen surfaces. Nothing here reads
/// ambient state, so extraction runs the same against production pixel
/// buffers and instrumented test surfaces.
pub struct CroppedImageExtractor<'a> {
    /// Resolves source bitmap identifiers
    provider: &'a dyn BitmapProvider,
    /// Supplies the transient off-screen surfaces
    surfaces: &'a dyn SurfaceFactory,
}

impl<'a> CroppedImageExtractor<'a> {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `provider` - Provider the source identifier is resolved against
    /// * `surfaces` - Factory supplying the two off-screen surfaces
    pub fn new(provider: &'a dyn BitmapProvider, surfaces: &'a dyn SurfaceFactory) -> Self {
        CroppedImageExtractor { provider, surfaces }
    }

    /// Crop, resample and encode per the request
    ///
    /// # Arguments
    /// * `request` - The crop request to satisfy
    ///
    /// # Returns
    /// The encoded payload, carrying the MIME type actually used
    pub fn extract(&self, request: &CropRequest) -> CropResult<EncodedImage> {
        info!("Extracting {}x{} region at ({}, {}) of '{}' to {}x{} {}",
              request.region.width, request.region.height,
              request.region.x, request.region.y,
              request.source_id,
              request.output_width, request.output_height,
              request.format);

        let output = self.render(request)?;
        output.encode(&request.format, request.quality)
    }

    /// Crop, resample, encode and pack into a base64 data URL
    ///
    /// # Arguments
    /// * `request` - The crop request to satisfy
    ///
    /// # Returns
    /// A `data:<mime>;base64,<payload>` string
    pub fn extract_data_url(&self, request: &CropRequest) -> CropResult<String> {
        Ok(self.extract(request)?.to_data_url())
    }

    /// Crop and resample, returning the decoded output bitmap
    ///
    /// Skips the encode stage entirely, for callers that write the result
    /// to a file or keep processing pixels.
    pub fn extract_image(&self, request: &CropRequest) -> CropResult<DynamicImage> {
        let output = self.render(request)?;
        Ok(DynamicImage::ImageRgba8(output.pixels().clone()))
    }

    /// Run the two-stage draw, returning the filled output surface
    fn render(&self, request: &CropRequest) -> CropResult<Box<dyn DrawingSurface>> {
        let bitmap = self.provider.resolve(&request.source_id)?;
        request.validate_against(bitmap.width(), bitmap.height())?;

        // Stage 1: buffer at the bitmap's natural size, so region
        // coordinates address source pixels regardless of display scaling
        let mut buffer = self.surfaces.create_surface(
            request.source_width, request.source_height)?;
        buffer.draw_bitmap(bitmap, 0, 0)?;

        // Stage 2: crop region drawn across the whole output surface
        let mut output = self.surfaces.create_surface(
            request.output_width, request.output_height)?;
        output.draw_region(buffer.as_ref(), request.region)?;

        debug!("Rendered {}x{} output surface", output.width(), output.height());
        Ok(output)
    }
}
