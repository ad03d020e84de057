use image::DynamicImage;
use log::info;
use crate::crop::errors::CropResult;
use crate::crop::extractor::CroppedImageExtractor;
use crate::crop::request::CropRequest;
use crate::encoding::EncodedImage;
use crate::provider::{BitmapProvider, ImageRegistry};
use crate::surface::PixelSurfaceFactory;
use crate::utils::logger::Logger;
use crate::utils::probe_utils;

/// Summary of an encoded payload produced by inspection
#[derive(Debug, Clone)]
pub struct PayloadSummary {
    /// MIME type declared by the data URL
    pub mime: String,
    /// Encoded payload size in bytes
    pub byte_count: usize,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Main interface to the CropKit library
pub struct CropKit {
    logger: Logger,
    registry: ImageRegistry,
    surfaces: PixelSurfaceFactory,
}

impl CropKit {
    /// Create a new CropKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "cropkit.log"
    ///
    /// # Returns
    /// A CropKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CropResult<Self> {
        let log_path = log_file.unwrap_or("cropkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CropKit {
            logger,
            registry: ImageRegistry::new(),
            surfaces: PixelSurfaceFactory::new(),
        })
    }

    /// Decode an image file and register it as a crop source
    ///
    /// # Arguments
    /// * `id` - Identifier the bitmap will resolve under
    /// * `path` - Path to the image file to decode
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn register_file(&mut self, id: &str, path: &str) -> CropResult<()> {
        self.logger.log(&format!("Registering '{}' from {}", id, path))?;
        self.registry.load_file(id, path)
    }

    /// Register an already-decoded bitmap as a crop source
    ///
    /// # Arguments
    /// * `id` - Identifier the bitmap will resolve under
    /// * `bitmap` - The decoded bitmap
    pub fn register_bitmap(&mut self, id: &str, bitmap: DynamicImage) {
        self.registry.insert(id, bitmap);
    }

    /// Check whether a source identifier is registered
    pub fn contains_source(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Extract a crop and return it as a base64 data URL
    ///
    /// This is the primary operation: the request's region is cut from the
    /// registered source bitmap, resampled to the output size, encoded, and
    /// packed into a `data:<mime>;base64,<payload>` string.
    ///
    /// # Arguments
    /// * `request` - The crop request describing source, region, output
    ///   size and encoding
    ///
    /// # Returns
    /// The data URL string or an error
    pub fn extract(&self, request: &CropRequest) -> CropResult<String> {
        self.logger.log(&format!(
            "Extract '{}' region ({}, {}) {}x{} -> {}x{} as {}",
            request.source_id, request.region.x, request.region.y,
            request.region.width, request.region.height,
            request.output_width, request.output_height, request.format))?;

        let extractor = CroppedImageExtractor::new(&self.registry, &self.surfaces);
        extractor.extract_data_url(request)
    }

    /// Extract a crop and return the encoded payload
    ///
    /// Same pipeline as `extract` but stops short of the data URL packing,
    /// for callers that want the raw encoded bytes.
    pub fn extract_payload(&self, request: &CropRequest) -> CropResult<EncodedImage> {
        let extractor = CroppedImageExtractor::new(&self.registry, &self.surfaces);
        extractor.extract(request)
    }

    /// Extract a crop to memory as a decoded bitmap
    ///
    /// # Arguments
    /// * `request` - The crop request to satisfy
    ///
    /// # Returns
    /// Result containing the cropped and resampled image or an error
    pub fn extract_to_image(&self, request: &CropRequest) -> CropResult<DynamicImage> {
        let extractor = CroppedImageExtractor::new(&self.registry, &self.surfaces);
        extractor.extract_image(request)
    }

    /// Extract a crop and save it to a file
    ///
    /// The file format is chosen by the image backend from the output
    /// path's extension, independent of the request's encoding format.
    ///
    /// # Arguments
    /// * `request` - The crop request to satisfy
    /// * `output_path` - Path where to save the extracted image
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn extract_to_file(&self, request: &CropRequest, output_path: &str) -> CropResult<()> {
        let image = self.extract_to_image(request)?;

        // JPEG output cannot carry the alpha channel
        let path_lower = output_path.to_lowercase();
        let image = if path_lower.ends_with(".jpg") || path_lower.ends_with(".jpeg") {
            DynamicImage::ImageRgb8(image.to_rgb8())
        } else {
            image
        };

        image.save(output_path)?;
        info!("Saved {}x{} image to {}", image.width(), image.height(), output_path);
        Ok(())
    }

    /// Inspect a data URL payload
    ///
    /// Parses the data URL and reports the declared MIME type, payload size
    /// and pixel dimensions. Dimensions come from a cheap header probe when
    /// the container allows it, with a full decode as fallback.
    ///
    /// # Arguments
    /// * `url` - A `data:<mime>;base64,<payload>` string
    ///
    /// # Returns
    /// A summary of the payload or an error
    pub fn inspect_data_url(&self, url: &str) -> CropResult<PayloadSummary> {
        let payload = EncodedImage::from_data_url(url)?;

        let info = match probe_utils::probe_dimensions(&payload.bytes) {
            Some(info) => info,
            None => {
                let image = image::load_from_memory(&payload.bytes)?;
                probe_utils::PayloadInfo {
                    width: image.width(),
                    height: image.height(),
                }
            }
        };

        self.logger.log(&format!("Inspected {} payload: {} bytes, {}x{}",
                                 payload.mime, payload.bytes.len(),
                                 info.width, info.height))?;

        Ok(PayloadSummary {
            mime: payload.mime,
            byte_count: payload.bytes.len(),
            width: info.width,
            height: info.height,
        })
    }

    /// List the encoding formats known to the registry
    ///
    /// # Returns
    /// Vector of format MIME types
    pub fn list_formats(&self) -> Vec<String> {
        crate::encoding::known_formats().iter()
            .map(|spec| spec.mime.clone())
            .collect()
    }
}
