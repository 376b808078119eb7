//! Progress reporting port and its adapters.

use crate::core::{CompressionResult, CompressorError};
use crate::utils::{calculate_savings, format_file_size};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Emitted once per processed file, after the file is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
}

/// Terminal artifact of a run that processed at least one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl BatchSummary {
    /// Size reduction across successful files, in percent.
    pub fn savings(&self) -> f64 {
        calculate_savings(self.bytes_before, self.bytes_after)
    }
}

/// Receives batch events. Calls are synchronous; the batch waits for each
/// one to return before touching the next file.
pub trait ProgressSink {
    fn on_progress(&mut self, event: ProgressEvent);

    fn on_summary(&mut self, summary: &BatchSummary);

    /// Called instead of any progress when a precondition fails.
    fn on_fatal(&mut self, error: &CompressorError);

    /// Called with each file's result, just before its progress event.
    fn on_file(&mut self, _result: &CompressionResult) {}

    /// Called when the input folder holds no eligible files.
    fn on_empty(&mut self, _input_dir: &Path) {}
}

/// Reports everything through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn on_progress(&mut self, event: ProgressEvent) {
        log::info!("Progress: {} / {}", event.completed, event.total);
    }

    fn on_summary(&mut self, summary: &BatchSummary) {
        log::info!(
            "Processed {} images: {} succeeded, {} failed ({:.1}% size reduction)",
            summary.total,
            summary.success_count,
            summary.failure_count,
            summary.savings()
        );
    }

    fn on_fatal(&mut self, error: &CompressorError) {
        log::error!("{}", error);
    }

    fn on_file(&mut self, result: &CompressionResult) {
        if let Some(reason) = result.failure_reason() {
            log::warn!("Failed: {}: {}", result.source_path.display(), reason);
        }
    }

    fn on_empty(&mut self, input_dir: &Path) {
        log::warn!("No image files found in {}", input_dir.display());
    }
}

/// Terminal progress bar.
pub struct ProgressBarSink {
    bar: Option<ProgressBar>,
}

impl ProgressBarSink {
    pub fn new() -> Self {
        Self { bar: None }
    }

    fn bar(&mut self, total: usize) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        })
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn on_progress(&mut self, event: ProgressEvent) {
        let pb = self.bar(event.total);
        pb.set_length(event.total as u64);
        pb.set_position(event.completed as u64);
    }

    fn on_summary(&mut self, summary: &BatchSummary) {
        let message = format!(
            "Processed {} images ({} failed), {} -> {} ({:.1}% size reduction)",
            summary.total,
            summary.failure_count,
            format_file_size(summary.bytes_before),
            format_file_size(summary.bytes_after),
            summary.savings()
        );

        match &self.bar {
            Some(pb) => pb.finish_with_message(message),
            None => eprintln!("{}", message),
        }
    }

    fn on_fatal(&mut self, error: &CompressorError) {
        match &self.bar {
            Some(pb) => pb.abandon_with_message(format!("Error: {}", error)),
            None => eprintln!("Error: {}", error),
        }
    }

    fn on_file(&mut self, result: &CompressionResult) {
        if let Some(reason) = result.failure_reason() {
            let path = result.source_path.display().to_string();
            match &self.bar {
                Some(pb) => pb.println(format!("WARN: {}: {}", path, reason)),
                None => eprintln!("WARN: {}: {}", path, reason),
            }
        }
    }

    fn on_empty(&mut self, input_dir: &Path) {
        eprintln!("No image files found in {}", input_dir.display());
    }
}
