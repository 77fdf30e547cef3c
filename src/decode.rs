use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::debug;

use crate::{error::FitError, fj_err, fj_try, image::Image};

/// Opens and decodes the file, guessing the format from its contents.
///
/// The file handle and decoder state are owned by this function and released on every return path.
pub fn decode(path: &Path) -> Result<Image, FitError> {
    let reader = ImageReader::open(path)
        .map_err(|error| fj_err!("unable to open image '{}': {}", path.display(), error))?;
    let reader = fj_try!(reader.with_guessed_format());
    let format = reader.format();
    let mut decoder = fj_try!(reader.into_decoder());
    // A failure to read the profile is not a reason to reject the pixels
    let icc = decoder
        .icc_profile()
        .ok()
        .flatten()
        .filter(|profile| is_rgb_profile(profile));
    let pixels = fj_try!(DynamicImage::from_decoder(decoder));
    debug!(
        path = %path.display(),
        ?format,
        color = ?pixels.color(),
        width = pixels.width(),
        height = pixels.height(),
        has_icc = icc.is_some(),
        "decoded image"
    );
    Ok(Image { icc, pixels })
}

/// Checks the data color space field of an ICC header.
///
/// The pipeline always emits RGB pixels, so CMYK or grayscale profiles would misdescribe the output.
pub(crate) fn is_rgb_profile(profile: &[u8]) -> bool {
    profile.get(16..20) == Some(b"RGB ".as_slice())
}
