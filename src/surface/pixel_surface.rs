//! Pixel-buffer drawing surface
//!
//! The production DrawingSurface implementation: an RGBA pixel buffer
//! backed by the image crate, initialized fully transparent like a freshly
//! created canvas.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use log::debug;

use crate::crop::errors::{CropError, CropResult};
use crate::crop::region::CropRegion;
use crate::encoding::{self, EncodedImage};
use super::surface_traits::{DrawingSurface, SurfaceFactory};

/// Off-screen RGBA pixel buffer
pub struct PixelSurface {
    /// Surface width in pixels
    width: u32,
    /// Surface height in pixels
    height: u32,
    /// Pixel contents, transparent black until drawn on
    pixels: RgbaImage,
}

impl PixelSurface {
    /// Create a new transparent surface
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels
    /// * `height` - Surface height in pixels
    pub fn new(width: u32, height: u32) -> Self {
        PixelSurface {
            width,
            height,
            pixels: RgbaImage::new(width, height),
        }
    }
}

impl DrawingSurface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_bitmap(&mut self, bitmap: &DynamicImage, x: u32, y: u32) -> CropResult<()> {
        debug!("Drawing {}x{} bitmap at ({}, {}) onto {}x{} surface",
               bitmap.width(), bitmap.height(), x, y, self.width, self.height);

        imageops::replace(&mut self.pixels, bitmap, i64::from(x), i64::from(y));
        Ok(())
    }

    fn draw_region(&mut self, source: &dyn DrawingSurface, region: CropRegion) -> CropResult<()> {
        if region.width == 0 || region.height == 0 {
            return Err(CropError::InvalidDimension(
                "cannot draw a zero-sized region".to_string()));
        }

        if !region.fits_within(source.width(), source.height()) {
            return Err(CropError::InvalidDimension(format!(
                "region ({}, {}) {}x{} exceeds source surface {}x{}",
                region.x, region.y, region.width, region.height,
                source.width(), source.height())));
        }

        let cropped = imageops::crop_imm(source.pixels(),
                                         region.x, region.y,
                                         region.width, region.height).to_image();

        // A 1:1 blit stays a plain copy so identity crops are pixel-exact
        if region.width == self.width && region.height == self.height {
            imageops::replace(&mut self.pixels, &cropped, 0, 0);
        } else {
            debug!("Resampling {}x{} region to {}x{}",
                   region.width, region.height, self.width, self.height);
            let resampled = imageops::resize(&cropped, self.width, self.height,
                                             FilterType::Triangle);
            imageops::replace(&mut self.pixels, &resampled, 0, 0);
        }

        Ok(())
    }

    fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    fn encode(&self, format: &str, quality: f32) -> CropResult<EncodedImage> {
        let spec = encoding::resolve_or_default(format);
        debug!("Encoding {}x{} surface as {}", self.width, self.height, spec.mime);

        let mut buffer = Vec::new();
        match spec.format {
            ImageFormat::Jpeg => {
                // JPEG carries no alpha channel
                let rgb = DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8();
                let mut encoder = JpegEncoder::new_with_quality(
                    &mut buffer, encoding::quality_scale(quality));
                encoder.encode_image(&rgb)?;
            }
            backend => {
                if spec.lossy {
                    debug!("No quality control for {} encoder, using backend default", spec.name);
                } else if quality != encoding::DEFAULT_QUALITY {
                    debug!("Quality {} ignored for lossless {}", quality, spec.name);
                }
                DynamicImage::ImageRgba8(self.pixels.clone())
                    .write_to(&mut Cursor::new(&mut buffer), backend)?;
            }
        }

        Ok(EncodedImage::new(spec.mime.clone(), buffer))
    }
}

/// Factory producing PixelSurface instances
pub struct PixelSurfaceFactory;

impl PixelSurfaceFactory {
    /// Create a new factory
    pub fn new() -> Self {
        PixelSurfaceFactory
    }
}

impl SurfaceFactory for PixelSurfaceFactory {
    fn create_surface(&self, width: u32, height: u32) -> CropResult<Box<dyn DrawingSurface>> {
        if width == 0 || height == 0 {
            return Err(CropError::InvalidDimension(format!(
                "surface size must be positive, got {}x{}", width, height)));
        }

        Ok(Box::new(PixelSurface::new(width, height)))
    }
}
