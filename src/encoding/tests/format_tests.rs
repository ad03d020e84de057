//! Tests for the encoding format registry

extern crate std;

use image::ImageFormat;
use crate::encoding::format::{
    FormatDefinitions, DEFAULT_QUALITY,
    default_format, known_formats, quality_scale, resolve_format, resolve_or_default,
};

#[test]
fn test_resolve_by_mime_type() {
    let spec = resolve_format("image/png").unwrap();
    std::assert_eq!(spec.name, "png");
    std::assert_eq!(spec.format, ImageFormat::Png);
    std::assert!(!spec.lossy);

    let spec = resolve_format("image/jpeg").unwrap();
    std::assert_eq!(spec.name, "jpeg");
    std::assert!(spec.lossy);
}

#[test]
fn test_resolve_by_alias() {
    std::assert_eq!(resolve_format("jpg").unwrap().mime, "image/jpeg");
    std::assert_eq!(resolve_format("tif").unwrap().mime, "image/tiff");
}

#[test]
fn test_resolve_is_case_insensitive_and_trims() {
    std::assert_eq!(resolve_format("PNG").unwrap().mime, "image/png");
    std::assert_eq!(resolve_format("Image/JPEG").unwrap().mime, "image/jpeg");
    std::assert_eq!(resolve_format(" png ").unwrap().mime, "image/png");
}

#[test]
fn test_resolve_unknown_format() {
    std::assert!(resolve_format("image/bogus").is_none());
    std::assert!(resolve_format("").is_none());
}

#[test]
fn test_resolve_or_default_substitutes_unknown() {
    let spec = resolve_or_default("image/bogus");
    std::assert_eq!(spec.mime, "image/png");

    let spec = resolve_or_default("image/webp");
    std::assert_eq!(spec.mime, "image/webp");
}

#[test]
fn test_default_format_is_png() {
    std::assert_eq!(default_format().name, "png");
    std::assert_eq!(default_format().mime, "image/png");
}

#[test]
fn test_known_formats_cover_the_registry() {
    let names: Vec<&str> = known_formats().iter().map(|spec| spec.name.as_str()).collect();
    for expected in ["png", "jpeg", "gif", "bmp", "tiff", "webp"] {
        std::assert!(names.contains(&expected), "missing format {}", expected);
    }
}

#[test]
fn test_quality_scale_maps_unit_range() {
    std::assert_eq!(quality_scale(1.0), 100);
    std::assert_eq!(quality_scale(0.5), 50);
    std::assert_eq!(quality_scale(DEFAULT_QUALITY), 92);

    // Zero still produces a valid encoder setting
    std::assert_eq!(quality_scale(0.0), 1);
}

#[test]
fn test_quality_scale_substitutes_default_for_out_of_range() {
    std::assert_eq!(quality_scale(1.5), 92);
    std::assert_eq!(quality_scale(-0.1), 92);
    std::assert_eq!(quality_scale(f32::NAN), 92);
}

#[test]
fn test_definitions_from_custom_toml() {
    let content = r#"
        [formats.png]
        mime = "image/png"
        aliases = ["png"]
        extension = "png"
        lossy = false

        [formats.jpeg]
        mime = "image/jpeg"
        aliases = ["jpg"]
        extension = "jpg"
        lossy = true
    "#;

    let defs = FormatDefinitions::from_str(content).unwrap();
    std::assert_eq!(defs.all().len(), 2);
    std::assert_eq!(defs.lookup("jpg").unwrap().mime, "image/jpeg");
    std::assert!(defs.lookup("gif").is_none());
}

#[test]
fn test_definitions_require_the_default_format() {
    // A registry without the default format cannot honour the fallback
    let content = r#"
        [formats.jpeg]
        mime = "image/jpeg"
        lossy = true
    "#;
    std::assert!(FormatDefinitions::from_str(content).is_err());
}

#[test]
fn test_definitions_skip_unknown_backends() {
    let content = r#"
        [formats.png]
        mime = "image/png"

        [formats.xpm]
        mime = "image/x-xpixmap"
    "#;

    let defs = FormatDefinitions::from_str(content).unwrap();
    std::assert_eq!(defs.all().len(), 1);
    std::assert!(defs.lookup("image/x-xpixmap").is_none());
}

#[test]
fn test_definitions_reject_invalid_toml() {
    std::assert!(FormatDefinitions::from_str("not [valid toml").is_err());
}
