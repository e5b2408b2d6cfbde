use image::{Rgb, RgbImage, RgbaImage};

/// Composite the image over an opaque white background and drop the alpha
/// channel. Used before JPEG encoding, which cannot carry transparency.
pub fn flatten_alpha_to_white(src: &RgbaImage) -> RgbImage {
    let (width, height) = src.dimensions();
    let mut out = RgbImage::new(width, height);

    for (x, y, pixel) in src.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let blend =
            |c: u8| ((c as u16 * a as u16 + 255 * (255 - a) as u16 + 127) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}
