use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Canvas color outside the circle: white, fully transparent.
const CANVAS: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Crop an arbitrary rectangular image to a circle.
///
/// The output is the top-left `size x size` square of the source, where
/// `size = min(width, height)`, masked to the circle inscribed in
/// `(0,0)-(size,size)`. The mask is anchored to the origin corner, not
/// centered on the source. Pixels outside the circle are `CANVAS`.
pub fn circularize(image: &DynamicImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let size = width.min(height);
    let src = image.to_rgba8();

    // A pixel belongs to the circle when its center lies within the
    // inscribed radius of the circle centered at (size/2, size/2).
    let center = size as f32 / 2.0;
    let radius_sq = center * center;

    let mut out = RgbaImage::from_pixel(size, size, CANVAS);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if dx * dx + dy * dy <= radius_sq {
                out.put_pixel(x, y, *src.get_pixel(x, y));
            }
        }
    }
    out
}
