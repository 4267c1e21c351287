//! Per-file transform: eligibility, decode, primary output, thumbnail.
//!
//! For each candidate path [`optimize_file`] decides whether the file is
//! eligible and, if so, writes:
//!
//! ```text
//! optimized/
//! ├── photo.webp          # fit inside 1920x1080, q80, effort 6
//! └── photo-thumb.webp    # 400x300 center crop, only if source width > 400
//! ```
//!
//! Ineligible files are skipped without any event. Decode and encode failures
//! are reported as [`ProcessEvent::FileFailed`] and never abort the run.
//!
//! ## Progress events
//!
//! The transform reports what it did through a caller-supplied sink instead
//! of printing. [`crate::output`] turns events into console lines; tests
//! collect them into a `Vec`.

use crate::config::{OptimizeConfig, has_supported_extension};
use crate::imaging::{
    BackendError, ImageBackend, create_primary, create_thumbnail, get_dimensions,
};
use crate::naming::{display_name, output_stem};
use crate::run::RunSummary;
use std::path::{Path, PathBuf};

/// Progress of a run, one event per observable step.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// The run is initializing with these directories.
    Started { source: PathBuf, output: PathBuf },
    /// Primary output written.
    Optimized { file_name: String, output_name: String },
    /// Thumbnail written after the primary output of the same file.
    ThumbnailCreated { output_name: String },
    /// Decode or encode failed for one file; the run continues.
    FileFailed { file_name: String, message: String },
    /// A directory or entry could not be read; its subtree was skipped.
    ScanFailed { path: PathBuf, message: String },
    /// Every candidate has been handled.
    Completed(RunSummary),
}

/// Why a candidate was skipped. Skips are silent: no event is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path mentions the output directory's name.
    InsideOutputDir,
    /// The extension is not in the allow-list.
    UnsupportedExtension,
}

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Skipped(SkipReason),
    Optimized {
        primary: PathBuf,
        thumbnail: Option<PathBuf>,
    },
    /// Failed after zero or more outputs were written; already reported.
    Failed,
}

/// Check eligibility without touching the file.
///
/// The output-directory check is a plain substring match on the path text,
/// so it also matches unrelated names that happen to contain the marker.
pub fn skip_reason(path: &Path, config: &OptimizeConfig) -> Option<SkipReason> {
    let in_output_dir = config
        .exclusion_marker()
        .is_some_and(|marker| path.to_string_lossy().contains(marker.as_str()));
    if in_output_dir {
        return Some(SkipReason::InsideOutputDir);
    }
    if !has_supported_extension(path) {
        return Some(SkipReason::UnsupportedExtension);
    }
    None
}

/// Transform one candidate, reporting progress through `on_event`.
pub fn optimize_file(
    backend: &impl ImageBackend,
    path: &Path,
    config: &OptimizeConfig,
    on_event: &mut dyn FnMut(ProcessEvent),
) -> FileOutcome {
    if let Some(reason) = skip_reason(path, config) {
        return FileOutcome::Skipped(reason);
    }

    match transform(backend, path, config, on_event) {
        Ok((primary, thumbnail)) => FileOutcome::Optimized { primary, thumbnail },
        Err(err) => {
            on_event(ProcessEvent::FileFailed {
                file_name: display_name(path),
                message: err.to_string(),
            });
            FileOutcome::Failed
        }
    }
}

fn transform(
    backend: &impl ImageBackend,
    path: &Path,
    config: &OptimizeConfig,
    on_event: &mut dyn FnMut(ProcessEvent),
) -> Result<(PathBuf, Option<PathBuf>), BackendError> {
    let dimensions = get_dimensions(backend, path)?;
    let stem = output_stem(path);

    let primary = create_primary(
        backend,
        path,
        &config.output_dir,
        &stem,
        dimensions,
        &config.primary,
    )?;
    on_event(ProcessEvent::Optimized {
        file_name: display_name(path),
        output_name: display_name(&primary),
    });

    if !config.thumbnail.applies_to(dimensions) {
        return Ok((primary, None));
    }

    let thumbnail = create_thumbnail(
        backend,
        path,
        &config.output_dir,
        &stem,
        &config.thumbnail,
    )?;
    on_event(ProcessEvent::ThumbnailCreated {
        output_name: display_name(&thumbnail),
    });

    Ok((primary, Some(thumbnail)))
}
