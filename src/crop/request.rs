//! Crop request value object
//!
//! A CropRequest describes one extraction: which bitmap to read, the region
//! within it, the output size, and how to encode the result. Requests are
//! built by the caller, consumed by a single extraction and discarded.

use crate::crop::errors::{CropError, CropResult};
use crate::crop::region::CropRegion;
use crate::encoding::format::DEFAULT_QUALITY;

/// Parameters for a single crop-and-encode operation
#[derive(Debug, Clone)]
pub struct CropRequest {
    /// Identifier the source bitmap is registered under
    pub source_id: String,
    /// Natural width of the source bitmap in pixels
    pub source_width: u32,
    /// Natural height of the source bitmap in pixels
    pub source_height: u32,
    /// Region of the source to keep
    pub region: CropRegion,
    /// Width of the output in pixels
    pub output_width: u32,
    /// Height of the output in pixels
    pub output_height: u32,
    /// Requested encoding format, a MIME type or short alias
    pub format: String,
    /// Encoder quality in 0.0..=1.0, meaningful for lossy formats only
    pub quality: f32,
}

impl CropRequest {
    /// Create a request with the default format and quality
    ///
    /// # Arguments
    /// * `source_id` - Identifier the source bitmap is registered under
    /// * `source_width` - Natural width of the source bitmap
    /// * `source_height` - Natural height of the source bitmap
    /// * `region` - Region of the source to keep
    /// * `output_width` - Width of the output
    /// * `output_height` - Height of the output
    pub fn new(source_id: impl Into<String>,
               source_width: u32, source_height: u32,
               region: CropRegion,
               output_width: u32, output_height: u32) -> Self {
        CropRequest {
            source_id: source_id.into(),
            source_width,
            source_height,
            region,
            output_width,
            output_height,
            format: "image/png".to_string(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Set the encoding format, a MIME type or short alias
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the encoder quality
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Validate the geometry of this request
    ///
    /// Every dimension must be positive and the crop region must lie within
    /// the declared source bounds. Violations are reported as
    /// InvalidDimension errors, never silently clamped.
    ///
    /// # Returns
    /// Result indicating whether the request is well-formed
    pub fn validate(&self) -> CropResult<()> {
        if self.source_width == 0 || self.source_height == 0 {
            return Err(CropError::InvalidDimension(format!(
                "source size must be positive, got {}x{}",
                self.source_width, self.source_height)));
        }

        if self.region.width == 0 || self.region.height == 0 {
            return Err(CropError::InvalidDimension(format!(
                "crop region size must be positive, got {}x{}",
                self.region.width, self.region.height)));
        }

        if self.output_width == 0 || self.output_height == 0 {
            return Err(CropError::InvalidDimension(format!(
                "output size must be positive, got {}x{}",
                self.output_width, self.output_height)));
        }

        if !self.region.fits_within(self.source_width, self.source_height) {
            return Err(CropError::InvalidDimension(format!(
                "crop region ({}, {}) {}x{} exceeds source bounds {}x{}",
                self.region.x, self.region.y,
                self.region.width, self.region.height,
                self.source_width, self.source_height)));
        }

        Ok(())
    }

    /// Validate the request against a resolved bitmap
    ///
    /// Runs the geometric checks and additionally verifies that the declared
    /// source size matches the natural size of the bitmap the provider
    /// actually returned. A mismatch means the caller's region coordinates
    /// refer to a different pixel grid than the one being cropped.
    ///
    /// # Arguments
    /// * `bitmap_width` - Natural width of the resolved bitmap
    /// * `bitmap_height` - Natural height of the resolved bitmap
    pub fn validate_against(&self, bitmap_width: u32, bitmap_height: u32) -> CropResult<()> {
        self.validate()?;

        if self.source_width != bitmap_width || self.source_height != bitmap_height {
            return Err(CropError::InvalidDimension(format!(
                "declared source size {}x{} does not match bitmap {}x{}",
                self.source_width, self.source_height,
                bitmap_width, bitmap_height)));
        }

        Ok(())
    }
}
