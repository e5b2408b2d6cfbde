use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

/// Write the image as a PNG with maximum lossless compression, preserving
/// the alpha channel when present. The fixed filter strategy keeps the
/// encoded bytes identical across runs.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);

    match image {
        DynamicImage::ImageRgba8(buf) => {
            encoder.write_image(buf.as_raw(), buf.width(), buf.height(), ExtendedColorType::Rgba8)?;
        }
        _ => {
            let rgb = image.to_rgb8();
            encoder.write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
        }
    }
    Ok(())
}
