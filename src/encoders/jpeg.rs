use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::{error::FitError, fj_err, fj_try, image::Image};

/// Writes the image as a baseline JPEG at the given quality (1-100).
///
/// Expects 8-bit RGB pixels; run the flatten operation first.
pub fn encode<W: Write>(image: &Image, writer: &mut W, quality: u8) -> Result<(), FitError> {
    let pixels = image
        .pixels
        .as_rgb8()
        .ok_or_else(|| fj_err!("JPEG output expects RGB pixels, got {:?}", image.pixels.color()))?;

    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    fj_try!(encoder.write_image(
        pixels.as_raw(),
        pixels.width(),
        pixels.height(),
        ExtendedColorType::Rgb8,
    ));
    Ok(())
}
