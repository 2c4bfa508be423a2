//! Common test utilities

use image::{DynamicImage, RgbImage};
use std::path::Path;
use tempfile::TempDir;
use warehouse::store::images::encode_jpeg;
use warehouse::WarehouseConfig;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Warehouse rooted at `path` with a small worker pool
pub fn test_config(path: &Path) -> WarehouseConfig {
    WarehouseConfig::new(path)
        .with_return_location("tool wall")
        .with_max_workers(4)
}

/// Solid grey JPEG of the given size
#[allow(dead_code)] // Test utility for integration tests
pub fn grey_jpeg(width: u32, height: u32) -> Vec<u8> {
    let canvas = RgbImage::from_pixel(width, height, image::Rgb([128, 128, 128]));
    encode_jpeg(&DynamicImage::ImageRgb8(canvas)).expect("Failed to encode JPEG")
}

/// Grey JPEG carrying an EXIF orientation tag, as phone cameras write it
#[allow(dead_code)] // Test utility for integration tests
pub fn oriented_jpeg(width: u32, height: u32, orientation: u8) -> Vec<u8> {
    let jpeg = grey_jpeg(width, height);
    let mut out = vec![0xff, 0xd8, 0xff, 0xe1, 0x00, 0x22];
    out.extend_from_slice(b"Exif\0\0");
    // Little-endian TIFF header, one IFD entry: 0x0112 SHORT count 1.
    out.extend_from_slice(b"II*\0");
    out.extend_from_slice(&[0x08, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&[0x01, 0x00]);
    out.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&[orientation, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    out.extend(jpeg.iter().skip(2));
    out
}
