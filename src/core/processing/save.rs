use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::core::processing::flatten::flatten_alpha_to_white;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_png;

/// Write the processed image as `<stem>.png` and `<stem>.jpg` inside
/// `output_dir`, creating the directory first if needed.
///
/// The PNG preserves the alpha channel; the JPEG is flattened over white
/// when the image carries alpha. If the JPEG write fails after the PNG
/// succeeded, the PNG stays on disk.
pub fn save_image_pair(
    image: &DynamicImage,
    output_dir: &Path,
    stem: &str,
) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let png_path = output_dir.join(format!("{stem}.png"));
    debug!("Writing PNG: {:?}", png_path);
    write_png(&png_path, image)?;

    let jpg_path = output_dir.join(format!("{stem}.jpg"));
    debug!("Writing JPEG: {:?}", jpg_path);
    match image {
        DynamicImage::ImageRgba8(buf) => {
            let flattened = flatten_alpha_to_white(buf);
            write_rgb_jpeg(
                &jpg_path,
                flattened.width() as usize,
                flattened.height() as usize,
                flattened.as_raw(),
            )?;
        }
        _ => {
            let rgb = image.to_rgb8();
            write_rgb_jpeg(
                &jpg_path,
                rgb.width() as usize,
                rgb.height() as usize,
                rgb.as_raw(),
            )?;
        }
    }

    Ok((png_path, jpg_path))
}
