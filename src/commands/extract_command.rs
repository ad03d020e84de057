//! Crop extraction command
//!
//! This module implements the command for cutting a region out of an image
//! file, resampling it to a target size and emitting the result as a base64
//! data URL, with optional decoded image output.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::crop::errors::{CropResult, CropError};
use crate::crop::extractor::CroppedImageExtractor;
use crate::crop::region::CropRegion;
use crate::crop::request::CropRequest;
use crate::encoding::format::DEFAULT_QUALITY;
use crate::provider::{BitmapProvider, ImageRegistry};
use crate::surface::PixelSurfaceFactory;
use crate::utils::logger::Logger;
use image::DynamicImage;

/// Command for extracting an encoded crop from an image file
pub struct ExtractCommand<'a> {
    /// Path to the input image file
    input_file: String,
    /// Path for the data URL output, stdout when absent
    output_file: Option<String>,
    /// Region string for crop selection
    region_str: Option<String>,
    /// Output size string as WIDTHxHEIGHT
    size_str: Option<String>,
    /// Requested encoding format
    format: String,
    /// Encoder quality
    quality: f32,
    /// Path to additionally save the decoded crop (optional)
    save_image: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CropResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| CropError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        let region_str = args.get_one::<String>("region").cloned();
        info!("Region: {:?}", region_str);

        let size_str = args.get_one::<String>("size").cloned();
        info!("Output size: {:?}", size_str);

        let format = args.get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "image/png".to_string());
        info!("Encoding format: {}", format);

        // Parse quality if provided
        let quality = if let Some(quality_str) = args.get_one::<String>("quality") {
            info!("Parsing quality value: {}", quality_str);
            quality_str.parse::<f32>()
                .map_err(|_| CropError::GenericError(format!("Invalid quality value: {}", quality_str)))?
        } else {
            info!("Using default quality: {}", DEFAULT_QUALITY);
            DEFAULT_QUALITY
        };

        let save_image = args.get_one::<String>("save-image").cloned();
        info!("Save decoded image: {:?}", save_image);

        Ok(ExtractCommand {
            input_file,
            output_file,
            region_str,
            size_str,
            format,
            quality,
            save_image,
            logger,
        })
    }

    /// Determine the crop region from the region argument
    ///
    /// # Arguments
    /// * `bitmap_width` - Natural width of the loaded bitmap
    /// * `bitmap_height` - Natural height of the loaded bitmap
    ///
    /// # Returns
    /// The region to crop, defaulting to the full bitmap
    fn determine_region(&self, bitmap_width: u32, bitmap_height: u32) -> CropResult<CropRegion> {
        let Some(region_str) = &self.region_str else {
            info!("No region specified, using the full bitmap");
            return Ok(CropRegion::full(bitmap_width, bitmap_height));
        };

        info!("Using region: {}", region_str);
        CropRegion::from_string(region_str)
            .map_err(|e| CropError::GenericError(e))
    }

    /// Determine the output size from the size argument
    ///
    /// # Arguments
    /// * `region` - The crop region the output defaults to
    ///
    /// # Returns
    /// Output width and height in pixels
    fn determine_output_size(&self, region: CropRegion) -> CropResult<(u32, u32)> {
        let Some(size_str) = &self.size_str else {
            info!("No output size specified, keeping region size {}x{}",
                  region.width, region.height);
            return Ok((region.width, region.height));
        };

        info!("Using output size: {}", size_str);
        parse_output_size(size_str)
    }

    /// Save the decoded crop to a file if requested
    fn handle_image_output(&self, extractor: &CroppedImageExtractor,
                           request: &CropRequest) -> CropResult<()> {
        let Some(image_path) = &self.save_image else {
            return Ok(());
        };

        info!("Saving decoded crop to {}", image_path);
        let image = extractor.extract_image(request)?;

        // JPEG output cannot carry the alpha channel
        let path_lower = image_path.to_lowercase();
        let image = if path_lower.ends_with(".jpg") || path_lower.ends_with(".jpeg") {
            DynamicImage::ImageRgb8(image.to_rgb8())
        } else {
            image
        };

        image.save(image_path)?;
        info!("Decoded crop saved successfully");
        Ok(())
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> CropResult<()> {
        info!("Executing extract command");

        // The input file registers under its own path
        let mut registry = ImageRegistry::new();
        registry.load_file(self.input_file.clone(), &self.input_file)?;

        let bitmap = registry.resolve(&self.input_file)?;
        let (bitmap_width, bitmap_height) = (bitmap.width(), bitmap.height());
        info!("Source bitmap is {}x{}", bitmap_width, bitmap_height);

        let region = self.determine_region(bitmap_width, bitmap_height)?;
        info!("Crop region: ({}, {}) {}x{}",
              region.x, region.y, region.width, region.height);

        let (output_width, output_height) = self.determine_output_size(region)?;
        info!("Output size: {}x{}", output_width, output_height);

        let request = CropRequest::new(&self.input_file,
                                       bitmap_width, bitmap_height,
                                       region,
                                       output_width, output_height)
            .with_format(self.format.clone())
            .with_quality(self.quality);

        let surfaces = PixelSurfaceFactory::new();
        let extractor = CroppedImageExtractor::new(&registry, &surfaces);

        self.handle_image_output(&extractor, &request)?;

        let data_url = extractor.extract_data_url(&request)?;
        info!("Produced data URL of {} characters", data_url.len());

        match &self.output_file {
            Some(output_file) => {
                std::fs::write(output_file, &data_url)?;
                info!("Data URL written to {}", output_file);
            }
            None => {
                // Without an output file the data URL goes to stdout
                println!("{}", data_url);
            }
        }

        self.logger.log("Extraction successful")?;
        Ok(())
    }
}

/// Parse a WIDTHxHEIGHT size string
fn parse_output_size(size_str: &str) -> CropResult<(u32, u32)> {
    let lower = size_str.trim().to_lowercase();
    let parts: Vec<&str> = lower.split('x').collect();

    if parts.len() != 2 {
        return Err(CropError::GenericError(format!(
            "Output size must be WIDTHxHEIGHT, got '{}'", size_str)));
    }

    let width = parts[0].trim().parse::<u32>()
        .map_err(|_| CropError::GenericError(format!("Invalid output width: {}", parts[0])))?;
    let height = parts[1].trim().parse::<u32>()
        .map_err(|_| CropError::GenericError(format!("Invalid output height: {}", parts[1])))?;

    Ok((width, height))
}
