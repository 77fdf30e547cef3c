use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{encoders, error::FitError, fj_err, fj_try, image::Image};

/// Encodes the image as JPEG and writes it to `path`, replacing any existing file.
///
/// If anything fails after the file has been created, the partially written file is removed again.
pub fn encode(image: &Image, path: &Path, quality: u8) -> Result<(), FitError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| fj_err!("unable to open image '{}': {}", path.display(), error))?;

    let result = write_jpeg(image, file, quality);
    if result.is_err() {
        if let Err(error) = fs::remove_file(path) {
            warn!(path = %path.display(), %error, "unable to remove partial output");
        }
    } else {
        debug!(path = %path.display(), quality, "wrote JPEG");
    }
    result
}

fn write_jpeg(image: &Image, file: File, quality: u8) -> Result<(), FitError> {
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    encoders::jpeg::encode(image, &mut writer, quality)?;
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    fj_try!(writer.flush());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView};

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpeg");
        std::fs::write(&path, b"stale contents").unwrap();

        let image = Image::from_pixels(DynamicImage::new_rgb8(10, 20));
        encode(&image, &path, 95).unwrap();

        assert_eq!(image::open(&path).unwrap().dimensions(), (10, 20));
    }

    #[test]
    fn failed_encoding_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpeg");

        let image = Image::from_pixels(DynamicImage::new_rgba8(10, 20));
        assert!(encode(&image, &path, 95).is_err());

        assert!(!path.exists());
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.jpeg");

        let image = Image::from_pixels(DynamicImage::new_rgb8(1, 1));
        let err = encode(&image, &path, 95).unwrap_err();
        assert!(err.0.contains("unable to open image"), "{}", err);
    }
}
