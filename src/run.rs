//! Run orchestration.
//!
//! A run moves through four phases and never re-enters one:
//!
//! ```text
//! Initializing ──(output dir ready)──▶ Processing ──▶ Done
//!      │
//!      └──(output dir uncreatable)──▶ Failed
//! ```
//!
//! Only failing to prepare the output directory is fatal. Unreadable
//! directories and undecodable files are reported as events and counted in
//! the [`RunSummary`]; the walk always runs to the end.

use crate::config::OptimizeConfig;
use crate::imaging::{ImageBackend, RustBackend};
use crate::process::{FileOutcome, ProcessEvent, optimize_file};
use crate::scan::walk_files;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Initializing,
    Processing,
    Done,
    Failed,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output path {} exists and is not a directory", path.display())]
    OutputNotDirectory { path: PathBuf },
    #[error("run already finished ({0:?})")]
    AlreadyRun(RunPhase),
}

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files with a primary output written.
    pub optimized: usize,
    pub thumbnails: usize,
    /// Eligible files that failed to decode or encode.
    pub failed: usize,
    /// Ineligible files, skipped silently.
    pub skipped: usize,
    /// Directories or entries the walker could not read.
    pub unreadable: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Optimized { thumbnail, .. } => {
                self.optimized += 1;
                if thumbnail.is_some() {
                    self.thumbnails += 1;
                }
            }
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// Create the output directory and any missing parents.
///
/// An existing directory is fine; an existing non-directory is not.
fn prepare_output_dir(path: &Path) -> Result<(), RunError> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(RunError::OutputNotDirectory {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(RunError::CreateOutputDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Drives one pass over the source tree.
pub struct Runner<B> {
    backend: B,
    config: OptimizeConfig,
    phase: RunPhase,
}

impl<B: ImageBackend> Runner<B> {
    pub fn new(backend: B, config: OptimizeConfig) -> Self {
        Self {
            backend,
            config,
            phase: RunPhase::Initializing,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn config(&self) -> &OptimizeConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the full pipeline once, strictly one file at a time.
    ///
    /// Emits `Started` first and, on success, `Completed` last. On error the
    /// runner ends in [`RunPhase::Failed`] and no `Completed` event is sent.
    pub fn execute(
        &mut self,
        on_event: &mut dyn FnMut(ProcessEvent),
    ) -> Result<RunSummary, RunError> {
        if self.phase != RunPhase::Initializing {
            return Err(RunError::AlreadyRun(self.phase));
        }

        on_event(ProcessEvent::Started {
            source: self.config.source_dir.clone(),
            output: self.config.output_dir.clone(),
        });

        if let Err(err) = prepare_output_dir(&self.config.output_dir) {
            self.phase = RunPhase::Failed;
            return Err(err);
        }
        self.phase = RunPhase::Processing;

        let mut summary = RunSummary::default();
        for item in walk_files(&self.config.source_dir) {
            match item {
                Ok(path) => {
                    let outcome = optimize_file(&self.backend, &path, &self.config, on_event);
                    summary.record(&outcome);
                }
                Err(err) => {
                    summary.unreadable += 1;
                    on_event(ProcessEvent::ScanFailed {
                        path: err.path().to_path_buf(),
                        message: err.to_string(),
                    });
                }
            }
        }

        self.phase = RunPhase::Done;
        on_event(ProcessEvent::Completed(summary));
        Ok(summary)
    }
}

/// Run once with the production backend.
pub fn run(
    config: OptimizeConfig,
    on_event: &mut dyn FnMut(ProcessEvent),
) -> Result<RunSummary, RunError> {
    Runner::new(RustBackend::new(), config).execute(on_event)
}
