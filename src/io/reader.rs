use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Result of scanning one input directory.
#[derive(Debug, Clone, Default)]
pub struct DirScan {
    /// Regular files, sorted by path for a deterministic processing order
    pub files: Vec<PathBuf>,
    /// Entries that were not regular files (subdirectories, special files)
    pub skipped: usize,
}

/// List the candidate image files in `dir`.
///
/// Symlinks are followed; entries that do not resolve to a regular file are
/// counted as skipped. A missing directory is an error carrying the
/// offending path.
pub fn scan_input_dir(dir: &Path) -> Result<DirScan> {
    if !dir.is_dir() {
        return Err(Error::InputDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut scan = DirScan::default();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            scan.files.push(path);
        } else {
            debug!("Skipping non-regular entry: {:?}", path);
            scan.skipped += 1;
        }
    }
    scan.files.sort();
    Ok(scan)
}

/// Decode an image and normalize its pixel mode: sources with an alpha
/// channel become `Rgba8`, everything else `Rgb8`.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decoded = image::open(path)?;
    if decoded.color().has_alpha() {
        Ok(DynamicImage::ImageRgba8(decoded.into_rgba8()))
    } else {
        Ok(DynamicImage::ImageRgb8(decoded.into_rgb8()))
    }
}
