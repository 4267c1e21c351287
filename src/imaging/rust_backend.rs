//! Production image backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::ImageReader`, format sniffed from content |
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Thumbnail | `DynamicImage::crop_imm` of the cover window, then `resize_exact` |
//! | Encode → WebP | `webp::Encoder::encode_advanced` with a `libwebp_sys::WebPConfig` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::calculate_cover_crop;
use super::params::{Effort, Quality, ResizeParams, ThumbnailParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Backend using `image` for pixels and libwebp for encoding.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a reader whose format comes from the file contents, falling back to
/// the extension when the signature is not recognised.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| BackendError::Decode(e.to_string()))
}

/// libwebp only accepts 8-bit RGB or RGBA input.
fn as_webp_input(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        other if other.color().has_alpha() => {
            Cow::Owned(DynamicImage::ImageRgba8(other.to_rgba8()))
        }
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    }
}

/// Encode as lossy WebP and write to `path`, replacing any existing file.
fn save_webp(
    img: &DynamicImage,
    path: &Path,
    quality: Quality,
    effort: Effort,
) -> Result<(), BackendError> {
    let input = as_webp_input(img);
    let encoder =
        webp::Encoder::from_image(&input).map_err(|e| BackendError::Encode(e.to_string()))?;

    let mut config = libwebp_sys::WebPConfig::new()
        .map_err(|_| BackendError::Encode("libwebp rejected default config".to_string()))?;
    config.lossless = 0;
    config.quality = quality.value() as f32;
    config.method = i32::from(effort.value());

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| BackendError::Encode(format!("{e:?}")))?;
    std::fs::write(path, &*encoded)?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = if (img.width(), img.height()) == (params.width, params.height) {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };
        save_webp(&resized, &params.output, params.quality, params.effort)
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let crop = (params.crop_width, params.crop_height);

        // Crop in source space first so extreme aspect ratios stay small
        let (x, y, w, h) = calculate_cover_crop((img.width(), img.height()), crop);
        let thumb = img
            .crop_imm(x, y, w, h)
            .resize_exact(crop.0, crop.1, FilterType::Lanczos3);

        save_webp(&thumb, &params.output, params.quality, params.effort)
    }
}
