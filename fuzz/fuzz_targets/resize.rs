#![no_main]

use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        use image::{codecs::png::PngEncoder, ImageBuffer, ImageEncoder, RgbaImage};
        use std::fs::File;

        let img: RgbaImage =
            ImageBuffer::from_fn(self.width.get() as u32, self.height.get() as u32, |x, y| {
                let idx = (y * self.width.get() as u32 + x) as usize * 4;
                image::Rgba([
                    self.rgba_data[idx],
                    self.rgba_data[idx + 1],
                    self.rgba_data[idx + 2],
                    self.rgba_data[idx + 3],
                ])
            });

        let file = File::create(path)?;
        let encoder = PngEncoder::new_with_quality(
            file,
            image::codecs::png::CompressionType::Fast,
            image::codecs::png::FilterType::NoFilter,
        );
        encoder
            .write_image(
                &img,
                self.width.get() as u32,
                self.height.get() as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

fuzz_target!(|image: StructuredImage| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    // PNG data behind a .jpeg name, like a mislabeled download
    let input_path = temp_directory.path().join("input_image.jpeg");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let output_path = fitjpeg_fuzz::convert_and_check(&temp_directory, &input_path)
        .expect("a valid PNG must always convert");
    assert_eq!(
        output_path,
        temp_directory.path().join("input_image_640x400.jpeg")
    );
});
