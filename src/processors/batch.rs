use crate::core::processor::ImageProcessor;
use crate::core::{BatchJob, CompressorError, Outcome, Result};
use crate::processors::Scanner;
use crate::progress::{BatchSummary, ProgressEvent, ProgressSink};
use crate::utils::generate_output_path;
use std::collections::HashSet;
use std::path::Path;

/// How a run ended when no precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed(BatchSummary),
    /// The input folder held no eligible files; nothing was processed.
    EmptyBatch,
}

impl BatchOutcome {
    pub fn summary(&self) -> Option<&BatchSummary> {
        match self {
            BatchOutcome::Completed(summary) => Some(summary),
            BatchOutcome::EmptyBatch => None,
        }
    }
}

/// Drives a batch strictly one file at a time.
pub struct BatchProcessor {
    scanner: Scanner,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self {
            scanner: Scanner::new(),
        }
    }

    /// Fatal preconditions are reported to `sink.on_fatal` and returned as `Err`.
    /// Per-file failures never abort the run.
    pub fn run(&self, job: &BatchJob, sink: &mut dyn ProgressSink) -> Result<BatchOutcome> {
        match self.process_directory(job, sink) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                sink.on_fatal(&e);
                Err(e)
            }
        }
    }

    fn process_directory(
        &self,
        job: &BatchJob,
        sink: &mut dyn ProgressSink,
    ) -> Result<BatchOutcome> {
        let input_dir = job.input_dir();
        let output_dir = job.output_dir();

        self.validate_paths(input_dir)?;
        self.ensure_output_dir(output_dir)?;

        let files = self.scanner.list_eligible(input_dir)?;
        if files.is_empty() {
            sink.on_empty(input_dir);
            return Ok(BatchOutcome::EmptyBatch);
        }

        let total = files.len();
        log::info!("Processing {} images from {}", total, input_dir.display());

        let processor = ImageProcessor::new(job.spec());
        let mut summary = BatchSummary {
            total,
            ..Default::default()
        };
        let mut completed = 0;
        let mut written = HashSet::new();

        for file in &files {
            let output_path = generate_output_path(&file.path, output_dir);
            if !written.insert(output_path.clone()) {
                log::warn!(
                    "{} overwrites an output already written in this batch: {}",
                    file.path.display(),
                    output_path.display()
                );
            }

            log::debug!(
                "[{}/{}] {:?} source: {}",
                completed + 1,
                total,
                file.format,
                file.path.display()
            );
            let result = processor.compress(&file.path, &output_path);
            completed += 1;

            match &result.outcome {
                Outcome::Success {
                    bytes_before,
                    bytes_after,
                    ..
                } => {
                    summary.success_count += 1;
                    summary.bytes_before += bytes_before;
                    summary.bytes_after += bytes_after;
                }
                Outcome::Failure(_) => summary.failure_count += 1,
            }

            sink.on_file(&result);
            sink.on_progress(ProgressEvent { completed, total });
        }

        log::info!(
            "Batch finished: {} succeeded, {} failed",
            summary.success_count,
            summary.failure_count
        );
        sink.on_summary(&summary);

        Ok(BatchOutcome::Completed(summary))
    }

    /// Missing or non-directory input is fatal and must be detected before
    /// anything is written.
    fn validate_paths(&self, input_dir: &Path) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(CompressorError::InputFolderNotFound(input_dir.to_path_buf()));
        }

        Ok(())
    }

    fn ensure_output_dir(&self, output_dir: &Path) -> Result<()> {
        if output_dir.is_dir() {
            return Ok(());
        }

        log::debug!("Creating output folder {}", output_dir.display());
        std::fs::create_dir_all(output_dir).map_err(|source| {
            CompressorError::OutputFolderCreateFailure {
                path: output_dir.to_path_buf(),
                source,
            }
        })
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}
