// photoshrink/src/core/processor.rs
use super::{CompressionResult, Result, TargetSpec};
use crate::processors::{Compressor, Loader, Resizer};
use std::path::Path;

/// Loads one image, flattens it to RGB, bounds its size and writes it as JPEG.
///
/// Holds no state between calls; one processor serves a whole batch.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(spec: TargetSpec) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(spec),
            compressor: Compressor::new(spec),
        }
    }

    /// Never fails: any error is captured in the returned result.
    /// The output directory must already exist.
    pub fn compress(&self, source_path: &Path, output_path: &Path) -> CompressionResult {
        log::debug!("Opening image: {}", source_path.display());

        match self.process_single(source_path, output_path) {
            Ok((bytes_before, bytes_after)) => {
                log::debug!("Successfully processed: {}", source_path.display());
                CompressionResult::success(
                    source_path.to_path_buf(),
                    output_path.to_path_buf(),
                    bytes_before,
                    bytes_after,
                )
            }
            Err(e) => {
                log::warn!("Error processing {}: {}", source_path.display(), e);
                CompressionResult::failure(source_path.to_path_buf(), e.to_string())
            }
        }
    }

    fn process_single(&self, source_path: &Path, output_path: &Path) -> Result<(u64, u64)> {
        let original_size = std::fs::metadata(source_path)?.len();

        let image = self.loader.load_rgb(source_path)?;
        let image = self.resizer.resize(image);
        let new_size = self.compressor.save(&image, output_path)?;

        Ok((original_size, new_size))
    }
}
