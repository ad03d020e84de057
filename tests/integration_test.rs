//! Integration tests for the crop extraction pipeline

extern crate std;

use image::{DynamicImage, Rgba, RgbaImage};

use cropkit::{CropError, CropKit, CropRegion, CropRequest};
use cropkit::encoding::EncodedImage;
use cropkit::utils::logger::Logger;

/// Builds a gradient bitmap where every pixel encodes its position
fn gradient(width: u32, height: u32) -> DynamicImage {
    let mut pixels = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = if width > 1 { (x * 255 / (width - 1)) as u8 } else { 0 };
            let g = if height > 1 { (y * 255 / (height - 1)) as u8 } else { 0 };
            pixels.put_pixel(x, y, Rgba([r, g, 128, 255]));
        }
    }
    DynamicImage::ImageRgba8(pixels)
}

/// Creates a kit logging into the system temp directory
fn test_kit() -> CropKit {
    let log_path = std::env::temp_dir().join("cropkit_integration.log");
    CropKit::new(Some(log_path.to_str().unwrap())).unwrap()
}

#[test]
fn test_extract_produces_png_data_url_by_default() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(200, 100));

    let request = CropRequest::new("photo", 200, 100,
                                   CropRegion::new(50, 20, 80, 60), 160, 120);
    let url = kit.extract(&request).unwrap();
    std::assert!(url.starts_with("data:image/png;base64,"));

    // The payload decodes to an image of the requested output size
    let payload = EncodedImage::from_data_url(&url).unwrap();
    let decoded = image::load_from_memory(&payload.bytes).unwrap();
    std::assert_eq!(decoded.width(), 160);
    std::assert_eq!(decoded.height(), 120);
}

#[test]
fn test_identity_extraction_round_trips_exactly() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(64, 64));

    let request = CropRequest::new("photo", 64, 64, CropRegion::full(64, 64), 64, 64);
    let url = kit.extract(&request).unwrap();

    let payload = EncodedImage::from_data_url(&url).unwrap();
    let decoded = image::load_from_memory(&payload.bytes).unwrap();
    std::assert_eq!(decoded.to_rgba8(), gradient(64, 64).to_rgba8());
}

#[test]
fn test_inspect_reports_payload_summary() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(200, 100));

    let request = CropRequest::new("photo", 200, 100,
                                   CropRegion::new(50, 20, 80, 60), 160, 120);
    let url = kit.extract(&request).unwrap();

    let summary = kit.inspect_data_url(&url).unwrap();
    std::assert_eq!(summary.mime, "image/png");
    std::assert_eq!(summary.width, 160);
    std::assert_eq!(summary.height, 120);
    std::assert!(summary.byte_count > 0);
}

#[test]
fn test_unsupported_format_substitutes_the_default() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(32, 32));

    let request = CropRequest::new("photo", 32, 32, CropRegion::full(32, 32), 16, 16)
        .with_format("image/bogus");

    let url = kit.extract(&request).unwrap();
    std::assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn test_jpeg_quality_drives_payload_size() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(128, 128));

    let request = CropRequest::new("photo", 128, 128, CropRegion::full(128, 128), 128, 128);

    let coarse = kit.extract_payload(&request.clone().with_format("image/jpeg").with_quality(0.2)).unwrap();
    let fine = kit.extract_payload(&request.with_format("image/jpeg").with_quality(0.9)).unwrap();

    std::assert_eq!(coarse.mime, "image/jpeg");
    std::assert!(coarse.bytes.len() < fine.bytes.len());
}

#[test]
fn test_missing_source_is_a_resolution_error() {
    let kit = test_kit();

    let request = CropRequest::new("nowhere", 10, 10, CropRegion::full(10, 10), 10, 10);
    let result = kit.extract(&request);
    std::assert!(matches!(result, Err(CropError::ResourceNotFound(_))));
}

#[test]
fn test_declared_source_size_is_checked_against_the_bitmap() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(200, 100));

    // Declared as 100x100 while the bitmap is 200x100
    let request = CropRequest::new("photo", 100, 100, CropRegion::full(100, 100), 50, 50);
    let result = kit.extract(&request);
    std::assert!(matches!(result, Err(CropError::InvalidDimension(_))));
}

#[test]
fn test_extract_to_file_writes_decoded_image() {
    let mut kit = test_kit();
    kit.register_bitmap("photo", gradient(40, 30));

    let path = std::env::temp_dir().join("cropkit_it_output.png");
    let request = CropRequest::new("photo", 40, 30, CropRegion::new(10, 5, 20, 20), 20, 20);
    kit.extract_to_file(&request, path.to_str().unwrap()).unwrap();

    let saved = image::open(&path).unwrap();
    std::assert_eq!(saved.width(), 20);
    std::assert_eq!(saved.height(), 20);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_register_file_resolves_like_a_bitmap() {
    let path = std::env::temp_dir().join("cropkit_it_source.png");
    gradient(24, 24).save(&path).unwrap();

    let mut kit = test_kit();
    kit.register_file("disk-photo", path.to_str().unwrap()).unwrap();
    std::assert!(kit.contains_source("disk-photo"));

    let request = CropRequest::new("disk-photo", 24, 24, CropRegion::full(24, 24), 24, 24);
    let url = kit.extract(&request).unwrap();

    let payload = EncodedImage::from_data_url(&url).unwrap();
    let decoded = image::load_from_memory(&payload.bytes).unwrap();
    std::assert_eq!(decoded.to_rgba8(), gradient(24, 24).to_rgba8());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_register_file_missing_path_is_a_resolution_error() {
    let mut kit = test_kit();
    let result = kit.register_file("ghost", "/no/such/cropkit_input.png");
    std::assert!(matches!(result, Err(CropError::ResourceNotFound(_))));
}

#[test]
fn test_global_logger_installs_and_tolerates_reinitialization() {
    let path = std::env::temp_dir().join("cropkit_it_global.log");
    Logger::init_global_logger(path.to_str().unwrap()).unwrap();

    // A second installation is reported, not an error
    Logger::init_global_logger(path.to_str().unwrap()).unwrap();

    log::info!("journal line after global install");
    std::assert!(std::fs::metadata(&path).is_ok());
}

#[test]
fn test_list_formats_names_the_known_encoders() {
    let kit = test_kit();
    let formats = kit.list_formats();
    std::assert!(formats.contains(&"image/png".to_string()));
    std::assert!(formats.contains(&"image/jpeg".to_string()));
}
