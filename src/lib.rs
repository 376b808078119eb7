mod cli;
mod core;
mod processors;
pub mod progress;
mod utils;

pub use cli::{Cli, Commands};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    BatchJob, CompressionResult, CompressorError, Outcome, Result, TargetSpec,
    DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY,
};
pub use processors::{
    fit_within, BatchOutcome, BatchProcessor, Compressor, Loader, Resizer, Scanner, SourceFile,
};
pub use progress::{BatchSummary, LogSink, ProgressBarSink, ProgressEvent, ProgressSink};
pub use utils::{
    calculate_savings, eligible_extension, format_file_size, generate_output_path,
    SUPPORTED_EXTENSIONS,
};
