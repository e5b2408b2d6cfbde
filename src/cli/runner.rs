use tracing::{info, warn};

use roundpic::api::process_directory_to_path;
use roundpic::{ProcessingParams, ResizeMode};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.resize == 0 {
        return Err(AppError::ZeroSize { size: args.resize }.into());
    }

    if args.circle_input_directory.is_none() && args.non_circle_input_directory.is_none() {
        warn!("No input directories given; nothing to process");
        return Ok(());
    }

    let params = ProcessingParams {
        target_size: args.resize,
        resize_mode: if args.unified_resize {
            ResizeMode::Unified
        } else {
            ResizeMode::Legacy
        },
    };

    info!("Output directory: {:?}", args.output_directory);

    let report = process_directory_to_path(
        args.circle_input_directory.as_deref(),
        args.non_circle_input_directory.as_deref(),
        &args.output_directory,
        &params,
        !args.strict,
    )
    .map_err(AppError::from)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    Ok(())
}
