//! Pipeline composition: load, patch, persist, notify.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::io::{load_document, write_document};
use crate::patcher::{patch_document, ImageChange, PatchReport};
use crate::PatcherConfig;

/// Sink for human-readable progress output.
///
/// The binary wires this to the console; tests use a recording
/// implementation so the pipeline can run without capturing stdout.
pub trait Reporter {
    /// Called once per filled-in image field, in entry order.
    fn image_updated(&mut self, change: &ImageChange);

    /// Called once after the destination file has been written.
    fn finished(&mut self, report: &PatchReport, output: &Path);
}

/// Run the full pipeline described by `config`.
///
/// Change notifications fire before the destination is written, mirroring a
/// pass that reports as it goes; the summary fires only after a successful
/// write.
pub fn run(config: &PatcherConfig, reporter: &mut dyn Reporter) -> Result<PatchReport> {
    debug!("loading manifest from {}", config.input.display());
    let mut doc = load_document(&config.input)?;

    let report = patch_document(&mut doc);
    for change in &report.changes {
        reporter.image_updated(change);
    }

    debug!(
        "writing {} entries ({} updated) to {}",
        report.total_items,
        report.changed(),
        config.output.display()
    );
    write_document(&config.output, &doc)?;
    reporter.finished(&report, &config.output);
    Ok(report)
}
