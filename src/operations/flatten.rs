use image::{imageops::overlay, DynamicImage, Rgb, Rgba, RgbaImage};
use tracing::debug;

use crate::image::Image;

/// Normalizes the image to 8-bit RGB.
///
/// Images with an alpha channel are composited onto an opaque canvas of `background` color,
/// using their alpha as the blend mask. Palette images arrive here already expanded by the decoder,
/// so a palette with a transparent entry is treated like any other RGBA image.
/// Everything else is converted to RGB directly.
pub fn flatten(image: &mut Image, background: Rgb<u8>) {
    let pixels = &image.pixels;
    if let DynamicImage::ImageRgb8(_) = pixels {
        return;
    }

    let color = pixels.color();
    image.pixels = if color.has_alpha() {
        debug!(?color, ?background, "compositing transparent image onto background");
        let [r, g, b] = background.0;
        let mut canvas =
            RgbaImage::from_pixel(pixels.width(), pixels.height(), Rgba([r, g, b, 255]));
        overlay(&mut canvas, &pixels.to_rgba8(), 0, 0);
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).into_rgb8())
    } else {
        debug!(?color, "converting image to RGB");
        DynamicImage::ImageRgb8(pixels.to_rgb8())
    };
}
