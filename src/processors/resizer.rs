// photoshrink/src/processors/resizer.rs
use crate::core::TargetSpec;
use image::{imageops::FilterType, DynamicImage};

/// Downscales images to fit inside a square bound, keeping aspect ratio.
pub struct Resizer {
    max_dimension: u32,
    filter: FilterType,
}

impl Resizer {
    pub fn new(spec: TargetSpec) -> Self {
        Self {
            max_dimension: spec.max_dimension(),
            filter: FilterType::Lanczos3,
        }
    }

    /// Never upscales; an image already inside the bound is returned as is.
    pub fn resize(&self, image: DynamicImage) -> DynamicImage {
        let (width, height) = self.calculate_dimensions(image.width(), image.height());

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions within bound, skipping resize");
            return image;
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.filter)
    }

    pub fn calculate_dimensions(&self, orig_w: u32, orig_h: u32) -> (u32, u32) {
        fit_within(orig_w, orig_h, self.max_dimension)
    }
}

/// Largest size with the same aspect ratio whose sides are both `<= bound`.
/// The longest side lands exactly on `bound`; the other is rounded to the
/// nearest pixel and never drops below 1.
pub fn fit_within(orig_w: u32, orig_h: u32, bound: u32) -> (u32, u32) {
    if orig_w <= bound && orig_h <= bound {
        return (orig_w, orig_h);
    }

    let scale_side = |side: u32, longest: u32| -> u32 {
        let (side, longest, bound) = (side as u64, longest as u64, bound as u64);
        let scaled = (side * bound * 2 + longest) / (longest * 2);
        (scaled as u32).max(1)
    };

    if orig_w >= orig_h {
        (bound, scale_side(orig_h, orig_w))
    } else {
        (scale_side(orig_w, orig_h), bound)
    }
}
