//! Shared test utilities: synthetic image fixtures and source trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = source_tree(&[
//!     ("photo.jpg", Fixture::Jpeg(2000, 1500)),
//!     ("icons/icon.png", Fixture::Png(200, 150)),
//!     ("shot.webp", Fixture::WebP(640, 480)),
//!     ("notes.txt", Fixture::Text),
//! ]);
//! ```

use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let writer = std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create an opaque RGB PNG.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(y % 256) as u8, 64, (x % 256) as u8])
    });
    let writer = std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a PNG with a transparent left half.
pub fn create_test_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        let alpha = if x < width / 2 { 0 } else { 255 };
        image::Rgba([200, 30, 30, alpha])
    });
    let writer = std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
}

/// Create a lossy WebP through libwebp.
pub fn create_test_webp(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, 180, (y % 256) as u8])
    });
    let encoded = webp::Encoder::from_rgb(img.as_raw(), width, height).encode(90.0);
    std::fs::write(path, &*encoded).unwrap();
}

/// File contents for [`source_tree`].
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    Jpeg(u32, u32),
    Png(u32, u32),
    WebP(u32, u32),
    /// Bytes that no decoder accepts.
    Corrupt,
    Text,
}

/// Build a temp directory containing the given relative paths.
pub fn source_tree(files: &[(&str, Fixture)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, fixture) in files {
        let path = tmp.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        match *fixture {
            Fixture::Jpeg(w, h) => create_test_jpeg(&path, w, h),
            Fixture::Png(w, h) => create_test_png(&path, w, h),
            Fixture::WebP(w, h) => create_test_webp(&path, w, h),
            Fixture::Corrupt => std::fs::write(&path, b"\0\0 not an image").unwrap(),
            Fixture::Text => std::fs::write(&path, "just some notes").unwrap(),
        }
    }
    tmp
}
