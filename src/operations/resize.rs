use std::borrow::Cow;

use image::{DynamicImage, RgbImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};
use tracing::debug;

use crate::{error::FitError, fj_err, image::Image};

/// Exact output dimensions. The aspect ratio of the input is not preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

/// Stretches or squashes the image to exactly `target` with a 3-lobe Lanczos filter.
///
/// The result is always 8-bit RGB.
pub fn resize_exact(image: &mut Image, target: TargetSize) -> Result<(), FitError> {
    if image.pixels.width() == target.width && image.pixels.height() == target.height {
        if !matches!(image.pixels, DynamicImage::ImageRgb8(_)) {
            image.pixels = DynamicImage::ImageRgb8(image.pixels.to_rgb8());
        }
        return Ok(());
    }

    let resized = {
        let src: Cow<'_, RgbImage> = match &image.pixels {
            DynamicImage::ImageRgb8(pixels) => Cow::Borrowed(pixels),
            other => Cow::Owned(other.to_rgb8()),
        };
        debug!(
            from_width = src.width(),
            from_height = src.height(),
            to_width = target.width,
            to_height = target.height,
            "resizing"
        );
        let src_size = ImageSize::new(src.width() as usize, src.height() as usize);
        let dst_size = ImageSize::new(target.width as usize, target.height as usize);
        pic_scale_safe::resize_rgb8(
            src.as_raw(),
            src_size,
            dst_size,
            ResamplingFunction::Lanczos3,
        )
        .map_err(|error| fj_err!("unable to resize image: {:?}", error))?
    };

    let resized = RgbImage::from_raw(target.width, target.height, resized)
        .ok_or_else(|| fj_err!("resampler returned a buffer of unexpected size"))?;
    image.pixels = DynamicImage::ImageRgb8(resized);
    Ok(())
}
