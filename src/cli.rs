// photoshrink/src/cli.rs
use crate::core::{DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photoshrink", version, about = "Resize and recompress images to JPEG")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// No progress bar; only warnings and errors are logged
    #[arg(long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// `--verbose` wins over `--quiet`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process every eligible image in a folder
    Batch {
        /// Folder to read images from
        input: PathBuf,

        /// Folder to write `<name>_compressed.jpg` files into (created if missing)
        output: PathBuf,

        /// Longest allowed side in pixels
        #[arg(short = 's', long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_size: u32,

        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = DEFAULT_QUALITY as u32)]
        quality: u32,
    },

    /// Process a single image
    Compress {
        /// Image to read
        input: PathBuf,

        /// Output file (defaults to `<name>_compressed.jpg` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Longest allowed side in pixels
        #[arg(short = 's', long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_size: u32,

        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = DEFAULT_QUALITY as u32)]
        quality: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_defaults() {
        let cli = Cli::try_parse_from(["photoshrink", "batch", "in", "out"]).unwrap();
        match cli.command {
            Commands::Batch {
                input,
                output,
                max_size,
                quality,
            } => {
                assert_eq!(input, PathBuf::from("in"));
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(max_size, 800);
                assert_eq!(quality, 80);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn compress_with_overrides() {
        let cli = Cli::try_parse_from([
            "photoshrink", "compress", "a.png", "-o", "b.jpg", "-s", "1024", "-q", "60", "-v",
        ])
        .unwrap();
        match cli.command {
            Commands::Compress {
                output,
                max_size,
                quality,
                ..
            } => {
                assert_eq!(output, Some(PathBuf::from("b.jpg")));
                assert_eq!(max_size, 1024);
                assert_eq!(quality, 60);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn quiet_raises_log_level() {
        let base = Cli::try_parse_from(["photoshrink", "batch", "in", "out"]).unwrap();
        assert_eq!(base.log_level(), LevelFilter::Info);

        let quiet = Cli::try_parse_from(["photoshrink", "--quiet", "batch", "in", "out"]).unwrap();
        assert_eq!(quiet.log_level(), LevelFilter::Warn);

        let both =
            Cli::try_parse_from(["photoshrink", "batch", "in", "out", "--quiet", "-v"]).unwrap();
        assert_eq!(both.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["photoshrink", "batch", "in", "out", "-s", "big"]).is_err());
    }
}
