//! Tests for the crop region module

extern crate std;

use crate::crop::region::CropRegion;

#[test]
fn test_region_creation() {
    let region = CropRegion::new(10, 20, 30, 40);
    std::assert_eq!(region.x, 10);
    std::assert_eq!(region.y, 20);
    std::assert_eq!(region.width, 30);
    std::assert_eq!(region.height, 40);
    std::assert_eq!(region.end_x(), 40);
    std::assert_eq!(region.end_y(), 60);
}

#[test]
fn test_region_full() {
    let region = CropRegion::full(640, 480);
    std::assert_eq!(region.x, 0);
    std::assert_eq!(region.y, 0);
    std::assert_eq!(region.width, 640);
    std::assert_eq!(region.height, 480);
}

#[test]
fn test_region_fits_within() {
    // Exactly covering the bitmap fits
    std::assert!(CropRegion::new(0, 0, 100, 100).fits_within(100, 100));

    // Interior region fits
    std::assert!(CropRegion::new(50, 50, 50, 50).fits_within(100, 100));

    // One pixel past the right edge does not fit
    std::assert!(!CropRegion::new(1, 0, 100, 100).fits_within(100, 100));

    // One pixel past the bottom edge does not fit
    std::assert!(!CropRegion::new(50, 50, 50, 51).fits_within(100, 100));
}

#[test]
fn test_region_fits_within_near_u32_max() {
    // The sum x + width exceeds u32::MAX and must not wrap around
    let region = CropRegion::new(u32::MAX - 1, 0, 2, 1);
    std::assert!(!region.fits_within(u32::MAX, 1));

    let covering = CropRegion::new(0, 0, u32::MAX, 1);
    std::assert!(covering.fits_within(u32::MAX, 1));
}

#[test]
fn test_region_from_string() {
    let region = CropRegion::from_string("10,20,30,40").unwrap();
    std::assert_eq!(region, CropRegion::new(10, 20, 30, 40));
}

#[test]
fn test_region_from_string_with_spaces() {
    let region = CropRegion::from_string(" 10, 20, 30, 40 ").unwrap();
    std::assert_eq!(region, CropRegion::new(10, 20, 30, 40));
}

#[test]
fn test_region_from_string_wrong_arity() {
    std::assert!(CropRegion::from_string("10,20,30").is_err());
    std::assert!(CropRegion::from_string("10,20,30,40,50").is_err());
    std::assert!(CropRegion::from_string("").is_err());
}

#[test]
fn test_region_from_string_invalid_values() {
    std::assert!(CropRegion::from_string("a,20,30,40").is_err());
    std::assert!(CropRegion::from_string("10,20,30,-5").is_err());
    std::assert!(CropRegion::from_string("10.5,20,30,40").is_err());
}
