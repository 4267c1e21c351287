//! Output file naming.
//!
//! Every output lives flat in the output directory and is named after the
//! source's file stem (the file name with its last extension removed):
//!
//! - `photo.jpg` → `photo.webp`, `photo-thumb.webp`
//! - `archive.tar.png` → `archive.tar.webp`
//! - `Holiday.JPEG` → `Holiday.webp`
//!
//! Subdirectories are not mirrored, so `a/photo.jpg` and `b/photo.png` both
//! write `photo.webp` and the one processed last wins.

use std::path::Path;

/// Extension of every generated file.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Suffix inserted between the stem and the extension for thumbnails.
pub const THUMBNAIL_SUFFIX: &str = "-thumb";

/// Stem used to name outputs for `source`. Non-UTF-8 names are converted lossily.
pub fn output_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name for display in progress lines.
pub fn display_name(source: &Path) -> String {
    source
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string())
}

/// `<stem>.webp`
pub fn primary_output_name(stem: &str) -> String {
    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// `<stem>-thumb.webp`
pub fn thumbnail_output_name(stem: &str) -> String {
    format!("{stem}{THUMBNAIL_SUFFIX}.{OUTPUT_EXTENSION}")
}
