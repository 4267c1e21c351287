//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_fit_inside_dimensions;
use super::params::{Effort, Quality, ResizeParams, ThumbnailParams};
use crate::naming::{primary_output_name, thumbnail_output_name};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for the primary (full-size) output.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: Quality,
    pub effort: Effort,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1080,
            quality: Quality::new(80),
            effort: Effort::MAX,
        }
    }
}

/// Plan the primary output for a source of the given dimensions.
pub fn plan_primary(
    source: &Path,
    output_path: &Path,
    original_dims: (u32, u32),
    config: &PrimaryConfig,
) -> ResizeParams {
    let (width, height) =
        calculate_fit_inside_dimensions(original_dims, (config.max_width, config.max_height));

    ResizeParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        width,
        height,
        quality: config.quality,
        effort: config.effort,
    }
}

/// Create the primary output: `<stem>.webp`, fit inside the configured box.
///
/// Returns the path written.
pub fn create_primary(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    filename_stem: &str,
    original_dims: (u32, u32),
    config: &PrimaryConfig,
) -> Result<PathBuf> {
    let output_path = output_dir.join(primary_output_name(filename_stem));
    let params = plan_primary(source, &output_path, original_dims, config);
    backend.resize(&params)?;
    Ok(output_path)
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    /// Thumbnails are only made for sources strictly wider than this.
    pub min_source_width: u32,
    pub quality: Quality,
    pub effort: Effort,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            min_source_width: 400,
            quality: Quality::new(80),
            effort: Effort::MAX,
        }
    }
}

impl ThumbnailConfig {
    /// Whether a source of these dimensions gets a thumbnail.
    pub fn applies_to(&self, original_dims: (u32, u32)) -> bool {
        original_dims.0 > self.min_source_width
    }
}

/// Plan a thumbnail operation without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_thumbnail(
    source: &Path,
    output_path: &Path,
    config: &ThumbnailConfig,
) -> ThumbnailParams {
    ThumbnailParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        crop_width: config.width,
        crop_height: config.height,
        quality: config.quality,
        effort: config.effort,
    }
}

/// Create a thumbnail image: `<stem>-thumb.webp`.
///
/// Center-crops to the box's aspect ratio, then resizes to the box.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    filename_stem: &str,
    config: &ThumbnailConfig,
) -> Result<PathBuf> {
    let thumb_path = output_dir.join(thumbnail_output_name(filename_stem));

    let params = plan_thumbnail(source, &thumb_path, config);
    backend.thumbnail(&params)?;

    Ok(thumb_path)
}
