//! Encoded output handling
//!
//! This module owns the encoding format registry and the packing of
//! encoded bytes into base64 data URLs.

pub mod format;
pub mod data_url;
mod tests;

pub use format::{FormatSpec, FormatDefinitions, DEFAULT_QUALITY, DEFAULT_FORMAT_NAME};
pub use format::{resolve_format, resolve_or_default, default_format, quality_scale, known_formats};
pub use data_url::EncodedImage;
