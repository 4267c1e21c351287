//! Console output for a run.
//!
//! # Output Format
//!
//! ```text
//! 🔍 Starting image optimization...
//! Source directory: assets/images
//! Output directory: assets/images/optimized
//! ✓ Optimized: photo.jpg -> photo.webp
//!   ↳ Created thumbnail: photo-thumb.webp
//! ✓ Optimized: icon.png -> icon.webp
//! ✗ Error processing broken.jpg: Decode failed: ...
//!
//! ✨ Image optimization complete!
//!    2 optimized, 1 thumbnail, 1 failed, 3 skipped
//! ```
//!
//! Error lines (`✗`, `❌`) go to stderr, everything else to stdout. Skipped
//! files never produce a line.
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O, so every line is
//! unit tested. `print_*` wrappers write them to the right stream.

use crate::process::ProcessEvent;
use crate::run::{RunError, RunSummary};

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// One-line human summary, e.g. `2 optimized, 1 thumbnail, 1 failed`.
///
/// Zero counts other than `optimized` are left out.
pub fn format_summary(summary: &RunSummary) -> String {
    let mut parts = vec![format!("{} optimized", summary.optimized)];
    if summary.thumbnails > 0 {
        parts.push(plural(summary.thumbnails, "thumbnail", "thumbnails"));
    }
    if summary.failed > 0 {
        parts.push(format!("{} failed", summary.failed));
    }
    if summary.skipped > 0 {
        parts.push(format!("{} skipped", summary.skipped));
    }
    if summary.unreadable > 0 {
        parts.push(format!("{} unreadable", summary.unreadable));
    }
    parts.join(", ")
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started { source, output } => vec![
            "🔍 Starting image optimization...".to_string(),
            format!("Source directory: {}", source.display()),
            format!("Output directory: {}", output.display()),
        ],
        ProcessEvent::Optimized {
            file_name,
            output_name,
        } => vec![format!("✓ Optimized: {file_name} -> {output_name}")],
        ProcessEvent::ThumbnailCreated { output_name } => {
            vec![format!("  ↳ Created thumbnail: {output_name}")]
        }
        ProcessEvent::FileFailed { file_name, message } => {
            vec![format!("✗ Error processing {file_name}: {message}")]
        }
        ProcessEvent::ScanFailed { path, message } => {
            vec![format!("✗ Error reading directory {}: {message}", path.display())]
        }
        ProcessEvent::Completed(summary) => vec![
            String::new(),
            "✨ Image optimization complete!".to_string(),
            format!("   {}", format_summary(summary)),
        ],
    }
}

/// Whether an event belongs on stderr.
pub fn is_error_event(event: &ProcessEvent) -> bool {
    matches!(
        event,
        ProcessEvent::FileFailed { .. } | ProcessEvent::ScanFailed { .. }
    )
}

/// Print one event to stdout, or stderr for failures.
pub fn print_process_event(event: ProcessEvent) {
    let to_stderr = is_error_event(&event);
    for line in format_process_event(&event) {
        if to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Format the fatal error that ends a run.
pub fn format_fatal(err: &RunError) -> Vec<String> {
    vec![String::new(), format!("❌ Error during optimization: {err}")]
}

/// Print the fatal error to stderr.
pub fn print_fatal(err: &RunError) {
    for line in format_fatal(err) {
        eprintln!("{line}");
    }
}
