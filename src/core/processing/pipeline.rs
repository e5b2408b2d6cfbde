use image::DynamicImage;

use crate::core::params::{LEGACY_NON_CIRCLE_SIZE, ProcessingParams};
use crate::core::processing::circularize::circularize;
use crate::core::processing::resize::resize_to_square;
use crate::types::{ResampleFilter, ResizeMode, SourceKind};

/// Run the transform chain for one decoded image.
///
/// Circle-sourced images go straight to the resizer at the configured
/// target size. Non-circle images are circularized first and then resized
/// with bicubic resampling; in `Legacy` mode that resize ignores the
/// configured size and always produces `LEGACY_NON_CIRCLE_SIZE`.
pub fn transform_image(
    image: DynamicImage,
    kind: SourceKind,
    params: &ProcessingParams,
) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    match kind {
        SourceKind::Circle => {
            resize_to_square(&image, params.target_size, ResampleFilter::Nearest)
        }
        SourceKind::NonCircle => {
            let circled = DynamicImage::ImageRgba8(circularize(&image));
            let target = match params.resize_mode {
                ResizeMode::Legacy => LEGACY_NON_CIRCLE_SIZE,
                ResizeMode::Unified => params.target_size,
            };
            resize_to_square(&circled, target, ResampleFilter::Bicubic)
        }
    }
}
