//! Encoding format registry
//!
//! Maps caller-supplied format names (MIME types and shorthand aliases) onto
//! the encoders available in the imaging backend. The definitions are
//! embedded from formats.toml and parsed once at startup.

use std::collections::HashMap;
use image::ImageFormat;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::crop::errors::{CropError, CropResult};

/// Quality substituted when a caller supplies a value outside 0.0..=1.0,
/// matching the usual host-encoder default
pub const DEFAULT_QUALITY: f32 = 0.92;

/// Name of the format substituted when a requested format is unknown
pub const DEFAULT_FORMAT_NAME: &str = "png";

lazy_static! {
    // Parse the TOML file at startup
    static ref FORMAT_DEFINITIONS: FormatDefinitions = {
        let content = include_str!("../../formats.toml");
        FormatDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse encoding format definitions: {}", e);
                FormatDefinitions::default()
            })
    };
}

/// A single encoder target known to the registry
#[derive(Debug, Clone)]
pub struct FormatSpec {
    /// Short name, e.g. "png"
    pub name: String,
    /// Canonical MIME type emitted in data URLs
    pub mime: String,
    /// Preferred file extension
    pub extension: String,
    /// Whether the encoder honours the quality parameter
    pub lossy: bool,
    /// Backend encoder selector
    pub format: ImageFormat,
}

/// Container for the encoding format definitions
#[derive(Debug)]
pub struct FormatDefinitions {
    // Known formats in declaration order
    formats: Vec<FormatSpec>,
    // Lower-cased name, MIME type and alias lookups into formats
    by_alias: HashMap<String, usize>,
}

impl FormatDefinitions {
    /// Parse format definitions from a TOML string
    pub fn from_str(content: &str) -> CropResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CropError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = FormatDefinitions {
            formats: Vec::new(),
            by_alias: HashMap::new(),
        };

        if let Some(table) = toml_value.get("formats").and_then(|v| v.as_table()) {
            for (name, entry) in table {
                // Entries the backend has no encoder for are skipped
                let Some(format) = backend_format_for(name) else { continue };
                let Some(mime) = entry.get("mime").and_then(|v| v.as_str()) else { continue };

                let extension = entry.get("extension")
                    .and_then(|v| v.as_str())
                    .unwrap_or(name)
                    .to_string();
                let lossy = entry.get("lossy")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);

                let index = defs.formats.len();
                defs.formats.push(FormatSpec {
                    name: name.clone(),
                    mime: mime.to_string(),
                    extension,
                    lossy,
                    format,
                });

                defs.by_alias.insert(name.to_lowercase(), index);
                defs.by_alias.insert(mime.to_lowercase(), index);
                if let Some(aliases) = entry.get("aliases").and_then(|v| v.as_array()) {
                    for alias in aliases {
                        if let Some(alias) = alias.as_str() {
                            defs.by_alias.insert(alias.to_lowercase(), index);
                        }
                    }
                }
            }
        }

        if defs.lookup(DEFAULT_FORMAT_NAME).is_none() {
            return Err(CropError::GenericError(
                "Format definitions are missing the default format".to_string()));
        }

        Ok(defs)
    }

    /// Look up a format by name, MIME type or alias
    pub fn lookup(&self, requested: &str) -> Option<&FormatSpec> {
        self.by_alias.get(&requested.trim().to_lowercase())
            .map(|&index| &self.formats[index])
    }

    /// All known formats in declaration order
    pub fn all(&self) -> &[FormatSpec] {
        &self.formats
    }
}

impl Default for FormatDefinitions {
    /// Registry containing only the built-in default format
    ///
    /// Used when the embedded definitions cannot be parsed; the encoder must
    /// always have a default format to substitute.
    fn default() -> Self {
        let mut by_alias = HashMap::new();
        by_alias.insert("png".to_string(), 0);
        by_alias.insert("image/png".to_string(), 0);

        FormatDefinitions {
            formats: vec![FormatSpec {
                name: "png".to_string(),
                mime: "image/png".to_string(),
                extension: "png".to_string(),
                lossy: false,
                format: ImageFormat::Png,
            }],
            by_alias,
        }
    }
}

/// Map a registry entry name onto the backend encoder selector
fn backend_format_for(name: &str) -> Option<ImageFormat> {
    match name {
        "png" => Some(ImageFormat::Png),
        "jpeg" => Some(ImageFormat::Jpeg),
        "gif" => Some(ImageFormat::Gif),
        "bmp" => Some(ImageFormat::Bmp),
        "tiff" => Some(ImageFormat::Tiff),
        "webp" => Some(ImageFormat::WebP),
        _ => None,
    }
}

/// Resolve a requested format name to its spec, if known
pub fn resolve_format(requested: &str) -> Option<&'static FormatSpec> {
    let defs: &'static FormatDefinitions = &FORMAT_DEFINITIONS;
    defs.lookup(requested)
}

/// All encoding formats known to the registry
pub fn known_formats() -> &'static [FormatSpec] {
    let defs: &'static FormatDefinitions = &FORMAT_DEFINITIONS;
    defs.all()
}

/// Resolve a requested format, substituting the default for unknown names
///
/// An unknown format is not an error: the default format is used in its
/// place and a warning is logged, mirroring what host canvas encoders do.
pub fn resolve_or_default(requested: &str) -> &'static FormatSpec {
    match resolve_format(requested) {
        Some(spec) => spec,
        None => {
            let fallback = default_format();
            warn!("Unsupported encoding format '{}', substituting {}", requested, fallback.mime);
            fallback
        }
    }
}

/// The default format spec
pub fn default_format() -> &'static FormatSpec {
    // from_str and Default both guarantee the default format is registered
    resolve_format(DEFAULT_FORMAT_NAME).expect("default format is always registered")
}

/// Map a 0.0..=1.0 quality onto the 1..=100 scale lossy encoders use
///
/// Out-of-range values (including NaN) fall back to the default quality,
/// matching host-encoder behaviour rather than failing the call.
pub fn quality_scale(quality: f32) -> u8 {
    let quality = if (0.0..=1.0).contains(&quality) {
        quality
    } else {
        debug!("Quality {} outside 0.0..=1.0, using default {}", quality, DEFAULT_QUALITY);
        DEFAULT_QUALITY
    };

    ((quality * 100.0).round() as u8).max(1)
}
