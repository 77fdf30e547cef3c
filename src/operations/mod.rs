mod flatten;
mod resize;

pub use resize::TargetSize;

use image::Rgb;

use crate::{error::FitError, image::Image};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    /// Composite transparency onto the given opaque color, normalizing to RGB
    Flatten(Rgb<u8>),
    Resize(TargetSize),
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), FitError> {
        match self {
            Operation::Flatten(background) => {
                flatten::flatten(image, *background);
                Ok(())
            }
            Operation::Resize(target) => resize::resize_exact(image, *target),
        }
    }
}
