// photoshrink/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod resizer;
mod scanner;

pub use batch::{BatchOutcome, BatchProcessor};
pub use compressor::Compressor;
pub use loader::Loader;
pub use resizer::{fit_within, Resizer};
pub use scanner::{Scanner, SourceFile};
