// photoshrink/src/processors/compressor.rs
use crate::core::{Result, TargetSpec};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::path::Path;

/// Encodes images as baseline JPEG at a fixed quality.
pub struct Compressor {
    quality: u8,
}

impl Compressor {
    pub fn new(spec: TargetSpec) -> Self {
        Self {
            quality: spec.quality(),
        }
    }

    /// Encodes fully in memory, then writes. Returns the number of bytes written.
    ///
    /// No file is left behind when encoding or writing fails.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        log::debug!(
            "Saving image to {} as JPEG, quality: {}",
            path.display(),
            self.quality
        );

        let data = self.compress_to_bytes(image)?;

        if let Err(e) = std::fs::write(path, &data) {
            let _ = std::fs::remove_file(path);
            return Err(e.into());
        }

        let file_size = data.len() as u64;
        log::info!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(file_size)
    }

    pub fn compress_to_bytes(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);

        image.write_with_encoder(encoder)?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    fn compressor(quality: u32) -> Compressor {
        Compressor::new(TargetSpec::new(800, quality).unwrap())
    }

    #[test]
    fn output_is_jpeg() {
        let bytes = compressor(80).compress_to_bytes(&gradient(64, 48)).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn lower_quality_yields_fewer_bytes() {
        let image = gradient(256, 256);
        let low = compressor(10).compress_to_bytes(&image).unwrap();
        let high = compressor(95).compress_to_bytes(&image).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn save_writes_file_and_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        let written = compressor(80).save(&gradient(32, 32), &path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), written);
    }

    #[test]
    fn save_into_missing_directory_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.jpg");

        assert!(compressor(80).save(&gradient(8, 8), &path).is_err());
        assert!(!path.exists());
    }
}
