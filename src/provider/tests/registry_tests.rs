//! Tests for the in-memory bitmap registry

extern crate std;

use crate::crop::errors::CropError;
use crate::crop::tests::test_utils::gradient_bitmap;
use crate::provider::{BitmapProvider, ImageRegistry};

#[test]
fn test_insert_and_resolve() {
    let mut registry = ImageRegistry::new();
    registry.insert("photo", gradient_bitmap(20, 10));

    let bitmap = registry.resolve("photo").unwrap();
    std::assert_eq!(bitmap.width(), 20);
    std::assert_eq!(bitmap.height(), 10);
}

#[test]
fn test_resolve_unknown_id() {
    let registry = ImageRegistry::new();
    let result = registry.resolve("missing");
    std::assert!(matches!(result, Err(CropError::ResourceNotFound(_))));
}

#[test]
fn test_contains() {
    let mut registry = ImageRegistry::new();
    std::assert!(!registry.contains("photo"));

    registry.insert("photo", gradient_bitmap(4, 4));
    std::assert!(registry.contains("photo"));
}

#[test]
fn test_insert_replaces_existing_bitmap() {
    let mut registry = ImageRegistry::new();
    registry.insert("photo", gradient_bitmap(4, 4));
    registry.insert("photo", gradient_bitmap(8, 8));

    std::assert_eq!(registry.len(), 1);
    std::assert_eq!(registry.resolve("photo").unwrap().width(), 8);
}

#[test]
fn test_remove() {
    let mut registry = ImageRegistry::new();
    registry.insert("photo", gradient_bitmap(4, 4));

    let removed = registry.remove("photo");
    std::assert!(removed.is_some());
    std::assert!(registry.is_empty());
    std::assert!(registry.remove("photo").is_none());
}

#[test]
fn test_load_file_missing_path() {
    let mut registry = ImageRegistry::new();
    let result = registry.load_file("photo", "/no/such/file.png");
    std::assert!(matches!(result, Err(CropError::ResourceNotFound(_))));
}

#[test]
fn test_load_file_round_trip() {
    let path = std::env::temp_dir().join("cropkit_registry_test.png");
    gradient_bitmap(12, 7).save(&path).unwrap();

    let mut registry = ImageRegistry::new();
    registry.load_file("photo", path.to_str().unwrap()).unwrap();

    let bitmap = registry.resolve("photo").unwrap();
    std::assert_eq!(bitmap.width(), 12);
    std::assert_eq!(bitmap.height(), 7);

    std::fs::remove_file(&path).unwrap();
}
