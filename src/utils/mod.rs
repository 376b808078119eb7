// photoshrink/src/utils/mod.rs
use crate::core::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use std::path::{Path, PathBuf};

/// Extensions accepted as batch input, compared lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// `<dir>/<stem>_compressed.jpg`. Only the last extension is stripped,
/// so `b.corrupt.jpg` maps to `b.corrupt_compressed.jpg`.
pub fn generate_output_path(input_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    output_dir.join(format!("{}{}.{}", stem, OUTPUT_SUFFIX, OUTPUT_EXTENSION))
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

/// Percentage saved, clamped to `0..=100`.
pub fn calculate_savings(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }

    let savings =
        (original_size as f64 - compressed_size as f64) / original_size as f64 * 100.0;
    savings.clamp(0.0, 100.0)
}

/// Allowlisted extension the file name ends with, matched on the lowercased
/// name. Dotfiles such as `.png` and names that are not valid UTF-8 before
/// the extension still qualify.
pub fn eligible_extension(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();

    SUPPORTED_EXTENSIONS.into_iter().find(|ext| {
        name.len() > ext.len()
            && name.ends_with(ext)
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}
