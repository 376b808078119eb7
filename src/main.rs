use anyhow::bail;
use clap::Parser;
use photoshrink::{
    format_file_size, generate_output_path, BatchJob, BatchOutcome, BatchProcessor, Cli,
    Commands, ImageProcessor, LogSink, Outcome, ProgressBarSink, ProgressSink, TargetSpec,
};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Batch {
            input,
            output,
            max_size,
            quality,
        } => process_batch(input, output, max_size, quality, cli.quiet),
        Commands::Compress {
            input,
            output,
            max_size,
            quality,
        } => process_compress(input, output, max_size, quality),
    }
}

fn process_batch(
    input: PathBuf,
    output: PathBuf,
    max_size: u32,
    quality: u32,
    quiet: bool,
) -> anyhow::Result<()> {
    let spec = TargetSpec::new(max_size, quality)?;
    let job = BatchJob::new(input, output, spec)?;

    let mut sink: Box<dyn ProgressSink> = if quiet {
        Box::new(LogSink)
    } else {
        Box::new(ProgressBarSink::new())
    };

    let outcome = match BatchProcessor::new().run(&job, sink.as_mut()) {
        Ok(outcome) => outcome,
        // The sink has already reported it.
        Err(_) => std::process::exit(1),
    };

    match outcome {
        BatchOutcome::Completed(summary) => {
            println!(
                "Batch processing complete. Processed {} images to: {} ({} succeeded, {} failed)",
                summary.total,
                job.output_dir().display(),
                summary.success_count,
                summary.failure_count
            );
        }
        BatchOutcome::EmptyBatch => {
            println!(
                "No image files found in the input folder: {}",
                job.input_dir().display()
            );
        }
    }

    Ok(())
}

fn process_compress(
    input: PathBuf,
    output: Option<PathBuf>,
    max_size: u32,
    quality: u32,
) -> anyhow::Result<()> {
    let spec = TargetSpec::new(max_size, quality)?;

    if !input.is_file() {
        bail!("File does not exist: {}", input.display());
    }

    let output_path = match output {
        Some(path) => path,
        None => {
            let dir = input.parent().unwrap_or_else(|| Path::new("."));
            generate_output_path(&input, dir)
        }
    };

    let result = ImageProcessor::new(spec).compress(&input, &output_path);
    match result.outcome {
        Outcome::Success {
            output_path,
            bytes_before,
            bytes_after,
        } => {
            println!(
                "Compressed image saved to: {} ({} -> {})",
                output_path.display(),
                format_file_size(bytes_before),
                format_file_size(bytes_after)
            );
            Ok(())
        }
        Outcome::Failure(reason) => bail!("Error processing {}: {}", input.display(), reason),
    }
}
