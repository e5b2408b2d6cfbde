//! High-level, ergonomic library API: process single files or whole input
//! directories into PNG + JPEG profile-picture pairs. Prefer these
//! entrypoints over the low-level processing modules when embedding
//! ROUNDPIC.
use std::path::Path;

use image::DynamicImage;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::transform_image;
use crate::core::processing::save::save_image_pair;
use crate::error::{Error, Result};
use crate::io::{load_image, scan_input_dir};
use crate::types::SourceKind;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Apply the transform chain to an in-memory image (no disk I/O).
pub fn process_image(
    image: DynamicImage,
    kind: SourceKind,
    params: &ProcessingParams,
) -> Result<DynamicImage> {
    transform_image(image, kind, params).map_err(Error::external)
}

/// Decode `input`, run the transform chain, and write the PNG/JPEG pair
/// into `output_dir` under the input's filename stem.
pub fn process_file_to_path(
    input: &Path,
    output_dir: &Path,
    kind: SourceKind,
    params: &ProcessingParams,
) -> Result<()> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Processing(format!("Cannot derive output name from {input:?}")))?;

    let decoded = load_image(input)?;
    let processed = process_image(decoded, kind, params)?;
    save_image_pair(&processed, output_dir, &stem).map_err(Error::external)?;
    Ok(())
}

/// Process the circle batch, then the non-circle batch, into `output_dir`.
///
/// An omitted input directory contributes zero images. If
/// `continue_on_error` is true, per-file errors are logged and counted in
/// the report; otherwise the first error is returned.
pub fn process_directory_to_path(
    circle_dir: Option<&Path>,
    non_circle_dir: Option<&Path>,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    let batches = [
        (SourceKind::Circle, circle_dir),
        (SourceKind::NonCircle, non_circle_dir),
    ];
    for (kind, dir) in batches {
        let Some(dir) = dir else { continue };

        let scan = scan_input_dir(dir)?;
        report.skipped += scan.skipped;

        for path in &scan.files {
            match process_file_to_path(path, output_dir, kind, params) {
                Ok(()) => {
                    info!("Processed {} image: {:?}", kind, path);
                    report.processed += 1;
                }
                Err(e) => {
                    report.errors += 1;
                    if !continue_on_error {
                        return Err(e);
                    }
                    warn!("Error processing {:?}: {}", path, e);
                }
            }
        }
    }

    Ok(report)
}
