// photoshrink/src/core/mod.rs
pub mod processor;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MAX_DIMENSION: u32 = 800;
pub const DEFAULT_QUALITY: u8 = 80;

/// Suffix appended to the source file stem for every output.
pub const OUTPUT_SUFFIX: &str = "_compressed";
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Size bound and JPEG quality applied to every image of a run.
///
/// Fields are private so a `TargetSpec` in hand is always a valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    max_dimension: u32,
    quality: u8,
}

impl TargetSpec {
    pub fn new(max_dimension: u32, quality: u32) -> Result<Self> {
        if max_dimension == 0 {
            return Err(CompressorError::ConfigInvalid(
                "Max size must be at least 1 pixel".to_string(),
            ));
        }

        if !(1..=100).contains(&quality) {
            return Err(CompressorError::ConfigInvalid(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(Self {
            max_dimension,
            quality: quality as u8,
        })
    }

    /// Builds a target from raw text, as typed into a form field.
    pub fn parse(max_dimension: &str, quality: &str) -> Result<Self> {
        let max_dimension = max_dimension.trim().parse::<u32>();
        let quality = quality.trim().parse::<u32>();

        match (max_dimension, quality) {
            (Ok(max_dimension), Ok(quality)) => Self::new(max_dimension, quality),
            _ => Err(CompressorError::ConfigInvalid(
                "Max size and quality must be valid numbers".to_string(),
            )),
        }
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// One batch run: where to read, where to write, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    input_dir: PathBuf,
    output_dir: PathBuf,
    spec: TargetSpec,
}

impl BatchJob {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        spec: TargetSpec,
    ) -> Result<Self> {
        let input_dir = input_dir.into();
        let output_dir = output_dir.into();

        if input_dir.as_os_str().is_empty() || output_dir.as_os_str().is_empty() {
            return Err(CompressorError::ConfigInvalid(
                "Both input and output folders must be selected".to_string(),
            ));
        }

        Ok(Self {
            input_dir,
            output_dir,
            spec,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn spec(&self) -> TargetSpec {
        self.spec
    }
}

/// How converting a single file ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        output_path: PathBuf,
        bytes_before: u64,
        bytes_after: u64,
    },
    Failure(String),
}

/// Result of converting one source file. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub source_path: PathBuf,
    pub outcome: Outcome,
}

impl CompressionResult {
    pub fn success(
        source_path: PathBuf,
        output_path: PathBuf,
        bytes_before: u64,
        bytes_after: u64,
    ) -> Self {
        Self {
            source_path,
            outcome: Outcome::Success {
                output_path,
                bytes_before,
                bytes_after,
            },
        }
    }

    pub fn failure(source_path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            source_path,
            outcome: Outcome::Failure(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// Written path; present only on success.
    pub fn output_path(&self) -> Option<&Path> {
        match &self.outcome {
            Outcome::Success { output_path, .. } => Some(output_path),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure(reason) => Some(reason),
        }
    }
}

#[derive(Error, Debug)]
pub enum CompressorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Input folder '{}' does not exist", .0.display())]
    InputFolderNotFound(PathBuf),

    #[error("Could not create output folder '{}': {source}", path.display())]
    OutputFolderCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, CompressorError>;
