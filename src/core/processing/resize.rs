use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::debug;

use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
    }
}

pub fn resize_rgba_image(
    src: &RgbaImage,
    target_size: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (width, height) = src.dimensions();
    let src_image = Image::from_vec_u8(width, height, src.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_size, target_size, PixelType::U8x4);

    // Straight-channel interpolation: the reference resampler does not
    // premultiply by alpha.
    let resize_options = ResizeOptions::new()
        .resize_alg(resize_alg(filter))
        .use_alpha(false);
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_size, target_size, dst_image.into_vec())
        .ok_or_else(|| "resized RGBA buffer has unexpected length".into())
}

pub fn resize_rgb_image(
    src: &RgbImage,
    target_size: u32,
    filter: ResampleFilter,
) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let (width, height) = src.dimensions();
    let src_image = Image::from_vec_u8(width, height, src.as_raw().clone(), PixelType::U8x3)?;
    let mut dst_image = Image::new(target_size, target_size, PixelType::U8x3);

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbImage::from_raw(target_size, target_size, dst_image.into_vec())
        .ok_or_else(|| "resized RGB buffer has unexpected length".into())
}

/// Scale an image to an exact `target_size x target_size` square,
/// keeping its pixel mode.
pub fn resize_to_square(
    image: &DynamicImage,
    target_size: u32,
    filter: ResampleFilter,
) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        image.width(),
        image.height(),
        target_size,
        target_size,
        filter
    );

    match image {
        DynamicImage::ImageRgba8(buf) => Ok(DynamicImage::ImageRgba8(resize_rgba_image(
            buf,
            target_size,
            filter,
        )?)),
        _ => Ok(DynamicImage::ImageRgb8(resize_rgb_image(
            &image.to_rgb8(),
            target_size,
            filter,
        )?)),
    }
}
