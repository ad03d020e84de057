//! Payload inspection command
//!
//! This module implements the command for inspecting encoded image payloads
//! and the data URLs that wrap them, reporting MIME type, payload size and
//! pixel dimensions.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::crop::errors::{CropResult, CropError};
use crate::encoding::EncodedImage;
use crate::utils::logger::Logger;
use crate::utils::probe_utils;

/// Command for inspecting an encoded payload or data URL
pub struct InspectCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CropResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| CropError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(InspectCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Read the input file as either a data URL or raw encoded bytes
    ///
    /// A text file starting with `data:` inspects the embedded payload,
    /// anything else is treated as a raw encoded image.
    fn read_payload(&self) -> CropResult<EncodedImage> {
        let raw = std::fs::read(&self.input_file)?;

        if let Ok(text) = std::str::from_utf8(&raw) {
            if text.trim_start().starts_with("data:") {
                info!("Input holds a data URL, decoding payload");
                return EncodedImage::from_data_url(text.trim());
            }
        }

        let mime = match image::guess_format(&raw) {
            Ok(format) => format.to_mime_type().to_string(),
            Err(_) => "application/octet-stream".to_string(),
        };

        Ok(EncodedImage::new(mime, raw))
    }

    /// Display the payload's pixel dimensions
    ///
    /// Uses the cheap header probe first and falls back to a full decode
    /// for containers the probe does not cover.
    fn display_dimensions(&self, payload: &EncodedImage) {
        match probe_utils::probe_dimensions(&payload.bytes) {
            Some(dims) => {
                info!("  Dimensions: {}x{} (header probe)", dims.width, dims.height);
            }
            None => match image::load_from_memory(&payload.bytes) {
                Ok(image) => {
                    info!("  Dimensions: {}x{} (full decode)", image.width(), image.height());
                }
                Err(e) => {
                    warn!("  Dimensions: not readable ({})", e);
                }
            },
        }
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> CropResult<()> {
        info!("Inspecting file: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let payload = self.read_payload()?;

        info!("Payload Summary:");
        info!("  MIME type: {}", payload.mime);
        info!("  Encoded size: {} bytes", payload.bytes.len());

        self.display_dimensions(&payload);

        if let Some(spec) = crate::encoding::resolve_format(&payload.mime) {
            info!("  Preferred extension: .{}", spec.extension);
        }

        if self.verbose {
            let url = payload.to_data_url();
            debug!("  Data URL length: {} characters", url.len());
        }

        self.logger.log("Inspection completed successfully")?;

        Ok(())
    }
}
