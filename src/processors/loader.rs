// photoshrink/src/processors/loader.rs
use crate::core::{CompressorError, Result};
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// Decodes source files and normalizes them to 8-bit RGB.
#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `path` in whatever color model it carries.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        self.validate_path(path)?;

        // Content sniffing wins over the extension; the extension is the fallback.
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        log::debug!("Decoding {} as {:?}", path.display(), reader.format());

        let image = reader.decode().map_err(|e| match e {
            ImageError::Unsupported(unsupported) => {
                CompressorError::UnsupportedFormat(unsupported.to_string())
            }
            other => CompressorError::Image(other),
        })?;

        log::debug!(
            "Decoded {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    /// Decodes and converts to three-channel RGB, dropping any alpha.
    pub fn load_rgb(&self, path: &Path) -> Result<DynamicImage> {
        let image = self.load(path)?;
        Ok(Self::normalize(image))
    }

    pub fn normalize(image: DynamicImage) -> DynamicImage {
        match image {
            DynamicImage::ImageRgb8(_) => image,
            other => {
                log::debug!("Converting {:?} to Rgb8", other.color());
                DynamicImage::ImageRgb8(other.to_rgb8())
            }
        }
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        let metadata = path.metadata()?;

        if !metadata.is_file() {
            return Err(CompressorError::ProcessingError(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() == 0 {
            return Err(CompressorError::ProcessingError(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
