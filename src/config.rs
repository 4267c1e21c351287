//! Run configuration.
//!
//! All tuning is compiled in. The only values a caller may change are the
//! source and output directories, which the CLI exposes as `--source` and
//! `--output` and tests inject directly.
//!
//! ```text
//! source:     assets/images
//! output:     <source>/optimized
//! primary:    fit inside 1920x1080, WebP q80, effort 6
//! thumbnail:  cover 400x300, WebP q80, effort 6, only for sources wider than 400px
//! formats:    jpg, jpeg, png, webp (case-insensitive)
//! ```

use crate::imaging::{PrimaryConfig, ThumbnailConfig};
use std::path::{Path, PathBuf};

/// Default source root, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "assets/images";

/// Name of the output directory created inside the source root by default.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "optimized";

/// Source extensions eligible for optimization, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Everything one run needs, passed explicitly into each component.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub primary: PrimaryConfig,
    pub thumbnail: ThumbnailConfig,
}

impl OptimizeConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            primary: PrimaryConfig::default(),
            thumbnail: ThumbnailConfig::default(),
        }
    }

    /// Use `<source>/optimized` as the output directory.
    pub fn for_source(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let output_dir = source_dir.join(DEFAULT_OUTPUT_DIR_NAME);
        Self::new(source_dir, output_dir)
    }

    /// Substring that marks a path as already-optimized output.
    ///
    /// This is the output directory's final component. Any source path whose
    /// text contains it is skipped, including unrelated names such as
    /// `unoptimized.jpg`. `None` when the output path has no final component
    /// (e.g. `/` or `..`), which disables the check.
    pub fn exclusion_marker(&self) -> Option<String> {
        self.output_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
    }
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self::for_source(DEFAULT_SOURCE_DIR)
    }
}

/// Whether `path` has one of [`SUPPORTED_EXTENSIONS`], ignoring case.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
