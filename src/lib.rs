//! # imgopt
//!
//! Re-encode a directory tree of source images as web-optimized WebP files,
//! with a small cropped thumbnail for anything wider than 400 pixels.
//!
//! # Pipeline
//!
//! One run is a single sequential pass:
//!
//! ```text
//! assets/images/**          walk (depth-first, symlinks followed)
//!        │
//!        ▼
//!   eligible?  ── no ──▶ skip silently
//!        │ yes
//!        ▼
//!   identify → primary WebP (≤1920x1080) → thumbnail WebP (4:3 crop → 400x300)
//!        │
//!        ▼
//! assets/images/optimized/  (flat: photo.webp, photo-thumb.webp)
//! ```
//!
//! Files are handled strictly one at a time. A file that fails to decode or
//! encode is reported and the walk moves on; only an uncreatable output
//! directory stops the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`run`] | Run state machine: prepare output, walk, summarize |
//! | [`scan`] | Lazy depth-first file walk with per-directory error reporting |
//! | [`process`] | Per-file eligibility and transform, emitting progress events |
//! | [`imaging`] | Backend trait, dimension math, and the WebP-encoding backend |
//! | [`naming`] | Output file names derived from source stems |
//! | [`config`] | Directories, extension allow-list, encode settings |
//! | [`output`] | Console formatting of progress events |
//!
//! # Design Decisions
//!
//! ## Flat Output
//!
//! Outputs land directly in the output directory regardless of how deep the
//! source was. `trips/photo.jpg` and `photo.png` both become `photo.webp`, and
//! whichever is processed later wins. This collision is a known limitation;
//! rename one of the sources to keep both.
//!
//! ## Backend Trait
//!
//! All pixel work goes through [`imaging::ImageBackend`]. The production
//! [`imaging::RustBackend`] decodes with the `image` crate and encodes with
//! libwebp; unit tests swap in a recording mock so the pipeline logic runs
//! without touching real image data.
//!
//! ## Events, Not Printing
//!
//! The pipeline never writes to the console. It reports progress through a
//! caller-supplied sink of [`process::ProcessEvent`]s, and [`output`] turns
//! those into lines. Tests collect the events and assert on them directly.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod run;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
