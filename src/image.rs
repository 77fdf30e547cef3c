use image::DynamicImage;

#[derive(Debug, Clone)]
pub struct Image {
    /// Embedded color profile, if the input carried one that still applies to RGB pixels
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self {
            icc: None,
            pixels,
        }
    }
}
